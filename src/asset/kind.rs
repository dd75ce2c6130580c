//! Asset kind definitions.

use std::path::Path;

use serde::Serialize;

/// Extension of the primary asset type (without the dot).
pub const SVG_EXT: &str = "svg";

/// Image extensions recognised by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[SVG_EXT, "png", "jpg", "jpeg", "webp", "gif", "bmp", "ico"];

/// Directory names never descended into by default.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules"];

/// Kind of discovered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// SVG document; the only kind that carries dimensions.
    Svg,
    /// Any other recognised image format.
    Raster,
}

impl AssetKind {
    /// Classify by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        if has_extension(path, SVG_EXT) {
            Self::Svg
        } else {
            Self::Raster
        }
    }

    pub const fn is_svg(self) -> bool {
        matches!(self, Self::Svg)
    }
}

/// Lowercased extension of `path`, if it has a UTF-8 one.
pub fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_from_path() {
        assert_eq!(AssetKind::from_path(Path::new("a/logo.svg")), AssetKind::Svg);
        assert_eq!(AssetKind::from_path(Path::new("a/LOGO.SVG")), AssetKind::Svg);
        assert_eq!(AssetKind::from_path(Path::new("a/photo.png")), AssetKind::Raster);
        assert_eq!(AssetKind::from_path(Path::new("a/noext")), AssetKind::Raster);
        assert!(AssetKind::Svg.is_svg());
    }

    #[test]
    fn test_extension_lower() {
        assert_eq!(extension_lower(Path::new("x.JPeG")), Some("jpeg".to_string()));
        assert_eq!(extension_lower(Path::new("x")), None);
        assert_eq!(extension_lower(Path::new(".svg")), None);
    }
}
