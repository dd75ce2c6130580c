//! Asset discovery and gallery assembly.
//!
//! - [`scan_directory`] / [`scan_file_selection`]: paths grouped by folder
//! - [`Gallery`]: groups turned into sized entries under display headers
//! - [`Selection`]: mixed CLI paths split into files and folders

mod entry;
mod filter;
mod gallery;
mod group;
mod kind;
mod scan;
mod selection;

// Types
pub use entry::FileEntry;
pub use filter::{ExclusionSet, ExtensionFilter, normalize_extension};
pub use gallery::{Gallery, GalleryKind, MULTIPLE_FILES_TITLE, Section};
pub use group::AssetGroup;
pub use kind::{AssetKind, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, SVG_EXT};
pub use selection::{Selection, SkipReason};

// Scanning (pure functions)
pub use scan::{ScanError, ScanOptions, scan_directory, scan_file_selection};
