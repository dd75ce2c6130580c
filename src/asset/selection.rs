//! Splitting a mixed list of paths into what each gallery needs.

use std::path::{Path, PathBuf};

use super::filter::ExtensionFilter;
use crate::utils::path::normalize_path;

/// Why a path was left out of every gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    /// A file without a recognised image extension.
    Unsupported,
}

impl SkipReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::Unsupported => "not a recognised image",
        }
    }
}

/// Paths sorted into one file gallery and one gallery per folder.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Image files as absolute paths, in the order given.
    pub files: Vec<PathBuf>,
    /// Directories as absolute paths, in the order given.
    pub folders: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

impl Selection {
    /// Classify `paths`.
    ///
    /// Files are accepted when their extension is recognised by `filter`,
    /// even in SVG-only mode: picking a file explicitly always shows it.
    pub fn classify(paths: &[PathBuf], filter: &ExtensionFilter) -> Self {
        let mut selection = Self::default();
        for path in paths {
            selection.push(path, filter);
        }
        selection
    }

    fn push(&mut self, path: &Path, filter: &ExtensionFilter) {
        if path.is_dir() {
            self.folders.push(normalize_path(path));
        } else if !path.exists() {
            self.skipped.push((path.to_path_buf(), SkipReason::NotFound));
        } else if filter.is_recognized(path) {
            self.files.push(normalize_path(path));
        } else {
            self.skipped.push((path.to_path_buf(), SkipReason::Unsupported));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }
}
