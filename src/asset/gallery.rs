//! Gallery assembly: scanned groups turned into titled, sized sections.
//!
//! ```text
//! AssetGroup                      Gallery "icons"
//! /w/icons       -> [a.svg]   =>  ├── /w/icons        a.svg   W:24px H:24px
//! /w/icons/brand -> [b.svg]       └── /w/icons/brand  b.svg   W:2in H:1in
//! ```

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Serialize, Serializer};

use super::entry::FileEntry;
use super::filter::{ExclusionSet, ExtensionFilter};
use super::group::AssetGroup;
use super::kind::AssetKind;
use super::scan::{ScanError, ScanOptions, scan_directory, scan_file_selection};
use crate::logger::ProgressLine;
use crate::utils::path::{base_name, display_path, normalize_path};

/// Title of a file-selection gallery with more than one file.
pub const MULTIPLE_FILES_TITLE: &str = "Multiple files";

/// How a gallery was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    /// An explicit list of files.
    Files,
    /// A scanned directory tree.
    Folder,
}

/// Files of one directory under a display header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(serialize_with = "serialize_lossy")]
    pub directory: PathBuf,
    pub header: String,
    pub entries: Vec<FileEntry>,
}

/// A titled collection of sections, one per directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub title: String,
    pub kind: GalleryKind,
    pub sections: Vec<Section>,
}

impl Gallery {
    /// Gallery for an explicit file selection, grouped by parent directory.
    pub fn from_files(paths: &[PathBuf]) -> Self {
        let group = scan_file_selection(paths);
        Self::from_group(files_title(paths), GalleryKind::Files, group)
    }

    /// Gallery for every matching asset below `root`.
    ///
    /// The title comes from the resolved root, so `.` is titled after the
    /// working directory.
    pub fn from_folder(
        root: &Path,
        filter: &ExtensionFilter,
        exclusions: &ExclusionSet,
        options: &ScanOptions,
    ) -> Result<Self, ScanError> {
        let group = scan_directory(root, filter, exclusions, options)?;
        Ok(Self::from_group(folder_title(&normalize_path(root)), GalleryKind::Folder, group))
    }

    /// Attach entries (with dimensions) to an already scanned group.
    ///
    /// Files are inspected in parallel; section and entry order follow the
    /// group.
    pub fn from_group(title: String, kind: GalleryKind, group: AssetGroup) -> Self {
        let svg_count = group
            .paths()
            .filter(|path| AssetKind::from_path(path).is_svg())
            .count();
        let progress = ProgressLine::new(&[
            ("svg", svg_count),
            ("raster", group.file_count() - svg_count),
        ]);

        let sections = group
            .into_iter()
            .map(|(directory, files)| {
                let entries = files
                    .par_iter()
                    .map(|path| {
                        let entry = FileEntry::from_path(path);
                        progress.inc(if entry.kind.is_svg() { "svg" } else { "raster" });
                        entry
                    })
                    .collect();
                Section {
                    header: display_path(&directory),
                    directory,
                    entries,
                }
            })
            .collect();

        progress.finish();
        Self {
            title,
            kind,
            sections,
        }
    }

    pub fn file_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }
}

/// Base name of a lone file, otherwise [`MULTIPLE_FILES_TITLE`].
pub fn files_title(paths: &[PathBuf]) -> String {
    match paths {
        [single] => base_name(single),
        _ => MULTIPLE_FILES_TITLE.to_string(),
    }
}

/// Folder name without its extension (`icons.v2` -> `icons`).
pub fn folder_title(dir: &Path) -> String {
    dir.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| base_name(dir))
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
