//! Per-file gallery records.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use super::kind::AssetKind;
use crate::image::svg::{self, SvgDimensions};
use crate::utils::path::base_name;

/// One tile of a gallery.
///
/// `dimensions` is only ever present for SVG content that yielded a usable
/// size. Entries are not mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub display_name: String,
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<SvgDimensions>,
}

impl FileEntry {
    /// Build the entry for `path`, reading SVG content for its size.
    pub fn from_path(path: &Path) -> Self {
        Self::with_dimensions(path, svg::extract_file(path))
    }

    /// Build the entry with already known dimensions.
    pub fn with_dimensions(path: &Path, dimensions: Option<SvgDimensions>) -> Self {
        let kind = AssetKind::from_path(path);
        Self {
            path: path.to_path_buf(),
            display_name: base_name(path),
            kind,
            // Raster formats are never sized
            dimensions: dimensions.filter(|_| kind.is_svg()),
        }
    }

    /// Caption under the tile, empty when there are no dimensions.
    pub fn label(&self) -> String {
        self.dimensions
            .as_ref()
            .map(SvgDimensions::label)
            .unwrap_or_default()
    }
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
