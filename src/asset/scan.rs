//! Asset scanning functions (pure, no side effects).
//!
//! Two entry points share one grouping routine:
//!
//! - [`scan_directory`]: walk a folder, keep files with an active extension,
//!   group them by their exact parent, sort the groups
//! - [`scan_file_selection`]: group an explicit list of files, keeping the
//!   order they were given in
//!
//! ```text
//! icons/                      scan_directory(icons/)
//! ├── a.svg                   ├── icons/        -> [a.svg, b.svg]
//! ├── b.svg                   └── icons/brand/  -> [logo.svg]
//! ├── node_modules/   (skip)
//! │   └── x.svg
//! └── brand/
//!     └── logo.svg
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jwalk::{Parallelism, WalkDir};
use thiserror::Error;

use super::filter::{ExclusionSet, ExtensionFilter};
use super::group::{AssetGroup, GroupBuilder};
use crate::core::CancelToken;
use crate::debug;
use crate::utils::path::normalize_path;

/// Errors that abort a whole scan.
///
/// Everything below the root degrades to "no data" instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root `{0}` does not exist")]
    RootNotFound(PathBuf),

    #[error("scan root `{0}` cannot be read")]
    RootUnreadable(PathBuf, #[source] io::Error),

    #[error("scan root `{0}` is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("scan cancelled")]
    Cancelled,
}

/// Runtime knobs for [`scan_directory`].
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Worker threads for directory reads. `0` = one per core, `1` = serial.
    pub threads: usize,
    /// Checked at every directory boundary.
    pub cancel: CancelToken,
}

impl ScanOptions {
    pub fn new(threads: usize, cancel: CancelToken) -> Self {
        Self { threads, cancel }
    }

    fn parallelism(&self) -> Parallelism {
        match self.threads {
            1 => Parallelism::Serial,
            n => Parallelism::RayonNewPool(n),
        }
    }
}

/// Scan a directory tree for assets.
///
/// - Directories whose base name is in `exclusions` (the root included) are
///   neither reported nor descended into
/// - Only regular files whose extension is active in `filter` are kept;
///   symbolic links are not followed
/// - Each directory with at least one kept file becomes one group, files in
///   directory-listing order
/// - Groups are sorted by directory with a locale-aware collation
/// - Unreadable subdirectories are skipped; only a missing or unreadable root
///   is an error
///
/// Subdirectories are read concurrently on a pool of `options.threads`
/// workers. Cancelling `options.cancel` stops descending and makes the scan
/// return [`ScanError::Cancelled`].
pub fn scan_directory(
    root: &Path,
    filter: &ExtensionFilter,
    exclusions: &ExclusionSet,
    options: &ScanOptions,
) -> Result<AssetGroup, ScanError> {
    let root = check_root(root)?;

    if exclusions.excludes(&root) {
        debug!("scan"; "root {} is excluded", root.display());
        return Ok(AssetGroup::new());
    }

    let excluded = Arc::new(exclusions.clone());
    let cancel = options.cancel.clone();

    let walker = WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(options.parallelism())
        .process_read_dir(move |_depth, _dir, _state, children| {
            if cancel.is_cancelled() {
                children.clear();
                return;
            }
            // Dropping an excluded directory here also stops descent into it
            children.retain(|child| match child {
                Ok(entry) => !(entry.file_type().is_dir() && excluded.contains(entry.file_name())),
                Err(_) => true,
            });
        });

    let mut builder = GroupBuilder::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("scan"; "skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !filter.matches(&path) {
            continue;
        }
        if let Some(dir) = path.parent() {
            let dir = dir.to_path_buf();
            builder.push(&dir, path);
        }
    }

    if options.cancel.is_cancelled() {
        return Err(ScanError::Cancelled);
    }

    Ok(builder.build_sorted())
}

/// Group an explicit selection of files by parent directory.
///
/// Paths are made absolute first (relative ones against the working
/// directory). No extension filtering. Groups appear in the order their
/// directory is first seen; files keep their relative order. Repeated paths
/// are kept once.
pub fn scan_file_selection(paths: &[PathBuf]) -> AssetGroup {
    let mut builder = GroupBuilder::new();
    for path in paths {
        let path = normalize_path(path);
        let Some(dir) = path.parent().map(Path::to_path_buf) else {
            debug!("scan"; "skipping {}: not a file path", path.display());
            continue;
        };
        if !builder.contains(&dir, &path) {
            builder.push(&dir, path);
        }
    }
    builder.build()
}

/// Resolve the root to its canonical form and make sure it can be listed.
fn check_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ScanError::RootNotFound(root.to_path_buf()),
        _ => ScanError::RootUnreadable(root.to_path_buf(), err),
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }

    let root = normalize_path(root);
    std::fs::read_dir(&root).map_err(|err| ScanError::RootUnreadable(root.clone(), err))?;
    Ok(root)
}
