//! Intrinsic SVG size from raw markup.
//!
//! No DOM is built. The first `<svg ...>` opening tag is located with a
//! pattern and its `width`, `height` and `viewBox` attributes are read.
//!
//! # Resolution order
//!
//! 1. `width` and `height` both usable -> use them as-is
//! 2. `viewBox` usable -> aspect ratio from its last two values, then
//!    - `width` only  -> height = width / ratio
//!    - `height` only -> width = height * ratio
//!    - neither       -> the viewBox size itself
//! 3. otherwise no dimensions
//!
//! Percentage sizes (`width="50%"`) are never usable.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use thiserror::Error;

use super::length::{Length, unit_or_default};
use crate::asset::AssetKind;
use crate::debug;

/// First `<svg` tag with at least one attribute.
static RE_SVG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg\s[^>]*>").unwrap());

/// `width="..."`, values containing `%` do not match.
static RE_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\swidth\s*=\s*(?:"([^"%]*)"|'([^'%]*)')"#).unwrap());

/// `height="..."`, values containing `%` do not match.
static RE_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sheight\s*=\s*(?:"([^"%]*)"|'([^'%]*)')"#).unwrap());

/// `viewBox="..."` or `viewbox="..."`.
static RE_VIEWBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sview[Bb]ox\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

// ============================================================================
// SvgDimensions
// ============================================================================

/// Display size of an SVG document.
///
/// Both values are finite and strictly positive; a value that would violate
/// this is never constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgDimensions {
    pub width: f64,
    pub height: f64,
    pub width_unit: String,
    pub height_unit: String,
}

impl SvgDimensions {
    /// `None` unless both values are finite and positive.
    pub fn new(
        width: f64,
        height: f64,
        width_unit: impl Into<String>,
        height_unit: impl Into<String>,
    ) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return None;
        }
        Some(Self {
            width,
            height,
            width_unit: width_unit.into(),
            height_unit: height_unit.into(),
        })
    }

    /// Caption shown under a tile: `W:120px H:80px`.
    pub fn label(&self) -> String {
        format!(
            "W:{}{} H:{}{}",
            format_number(self.width),
            self.width_unit,
            format_number(self.height),
            self.height_unit
        )
    }
}

/// At most two decimals, trailing zeros dropped.
fn format_number(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ============================================================================
// Rejection reasons
// ============================================================================

/// Why a document yielded no dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedSvg {
    #[error("content does not start with `<`")]
    NotMarkup,

    #[error("no `<svg>` opening tag with attributes")]
    MissingSvgTag,

    #[error("viewBox `{0}` does not have four values")]
    InvalidViewBox(String),

    #[error("viewBox size is not positive")]
    EmptyViewBox,

    #[error("viewBox units differ: `{0}` vs `{1}`")]
    ViewBoxUnitMismatch(String, String),

    #[error("no usable width, height or viewBox")]
    NoDimensions,
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract dimensions from raw file bytes.
///
/// Never fails loudly: any problem yields `None`. Pure and deterministic.
pub fn extract(bytes: &[u8]) -> Option<SvgDimensions> {
    inspect(bytes).ok()
}

/// Read `path` and extract its dimensions.
///
/// Only `.svg` files are inspected; other formats, unreadable files and
/// malformed documents yield `None` (logged with `--verbose`).
pub fn extract_file(path: &Path) -> Option<SvgDimensions> {
    if !AssetKind::from_path(path).is_svg() {
        return None;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("dims"; "cannot read {}: {}", path.display(), err);
            return None;
        }
    };

    match inspect(&bytes) {
        Ok(dims) => Some(dims),
        Err(reason) => {
            debug!("dims"; "{}: {}", path.display(), reason);
            None
        }
    }
}

/// Like [`extract`], reporting why nothing was found.
pub fn inspect(bytes: &[u8]) -> Result<SvgDimensions, MalformedSvg> {
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .ok_or(MalformedSvg::NotMarkup)?;
    if bytes[start] != b'<' {
        return Err(MalformedSvg::NotMarkup);
    }

    // Only ASCII tag syntax is inspected, so one char per byte is enough
    let text: String = bytes[start..].iter().map(|&b| char::from(b)).collect();

    let tag = RE_SVG_TAG
        .find(&text)
        .ok_or(MalformedSvg::MissingSvgTag)?
        .as_str();

    resolve(tag)
}

/// Apply the resolution order to one opening tag.
fn resolve(tag: &str) -> Result<SvgDimensions, MalformedSvg> {
    let width = attribute(&RE_WIDTH, tag).and_then(Length::parse_positive);
    let height = attribute(&RE_HEIGHT, tag).and_then(Length::parse_positive);

    if let (Some(w), Some(h)) = (&width, &height) {
        return SvgDimensions::new(w.value, h.value, w.unit(), h.unit())
            .ok_or(MalformedSvg::NoDimensions);
    }

    let view_box = attribute(&RE_VIEWBOX, tag).ok_or(MalformedSvg::NoDimensions)?;
    let view_box = ViewBoxSize::parse(view_box)?;
    let ratio = view_box.width / view_box.height;

    let dims = match (width, height) {
        (Some(w), _) => SvgDimensions::new(w.value, w.value / ratio, w.unit(), w.unit()),
        (None, Some(h)) => SvgDimensions::new(h.value * ratio, h.value, h.unit(), h.unit()),
        (None, None) => SvgDimensions::new(
            view_box.width,
            view_box.height,
            view_box.unit.clone(),
            view_box.unit,
        ),
    };
    dims.ok_or(MalformedSvg::NoDimensions)
}

/// Value of the first match of an attribute pattern, either quote style.
fn attribute<'a>(re: &Regex, tag: &'a str) -> Option<&'a str> {
    let caps: Captures<'a> = re.captures(tag)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Width and height taken from a `viewBox` value.
struct ViewBoxSize {
    width: f64,
    height: f64,
    unit: String,
}

impl ViewBoxSize {
    /// `min-x min-y width height`, separated by whitespace or commas.
    fn parse(value: &str) -> Result<Self, MalformedSvg> {
        let parts: Vec<&str> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() < 4 {
            return Err(MalformedSvg::InvalidViewBox(value.to_string()));
        }

        let width = Length::parse(parts[2]).filter(Length::is_positive);
        let height = Length::parse(parts[3]).filter(Length::is_positive);
        let (Some(width), Some(height)) = (width, height) else {
            return Err(MalformedSvg::EmptyViewBox);
        };

        if width.suffix != height.suffix {
            return Err(MalformedSvg::ViewBoxUnitMismatch(width.suffix, height.suffix));
        }

        Ok(Self {
            width: width.value,
            height: height.value,
            unit: unit_or_default(&width.suffix).to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn svg(attrs: &str) -> Vec<u8> {
        format!(r#"<svg xmlns="http://www.w3.org/2000/svg" {attrs}><rect width="1" height="1"/></svg>"#)
            .into_bytes()
    }

    fn dims(width: f64, height: f64, unit: &str) -> SvgDimensions {
        SvgDimensions::new(width, height, unit, unit).unwrap()
    }

    // ------------------------------------------------------------------------
    // Tier 1: explicit width and height
    // ------------------------------------------------------------------------

    #[test]
    fn test_explicit_width_height() {
        assert_eq!(extract(&svg(r#"width="120" height="80""#)), Some(dims(120.0, 80.0, "px")));
    }

    #[test]
    fn test_explicit_units_kept_per_axis() {
        let result = extract(&svg(r#"width="2in" height="30mm""#)).unwrap();
        assert_eq!(result.width, 2.0);
        assert_eq!(result.width_unit, "in");
        assert_eq!(result.height, 30.0);
        assert_eq!(result.height_unit, "mm");
    }

    #[test]
    fn test_single_quotes_and_spacing() {
        assert_eq!(
            extract(&svg("width = '16' height='24px'")),
            Some(dims(16.0, 24.0, "px"))
        );
    }

    #[test]
    fn test_explicit_beats_viewbox() {
        assert_eq!(
            extract(&svg(r#"viewBox="0 0 300 150" width="30" height="15""#)),
            Some(dims(30.0, 15.0, "px"))
        );
    }

    #[test]
    fn test_stroke_width_not_mistaken_for_width() {
        assert_eq!(
            extract(&svg(r#"stroke-width="3" viewBox="0 0 40 20""#)),
            Some(dims(40.0, 20.0, "px"))
        );
    }

    // ------------------------------------------------------------------------
    // Tier 2: viewBox
    // ------------------------------------------------------------------------

    #[test]
    fn test_viewbox_only() {
        assert_eq!(extract(&svg(r#"viewBox="0 0 300 150""#)), Some(dims(300.0, 150.0, "px")));
    }

    #[test]
    fn test_lowercase_viewbox_and_commas() {
        assert_eq!(extract(&svg(r#"viewbox="0,0,64,32""#)), Some(dims(64.0, 32.0, "px")));
    }

    #[test]
    fn test_width_with_viewbox_ratio() {
        assert_eq!(
            extract(&svg(r#"width="2in" viewBox="0 0 200 100""#)),
            Some(dims(2.0, 1.0, "in"))
        );
    }

    #[test]
    fn test_height_with_viewbox_ratio() {
        assert_eq!(
            extract(&svg(r#"height="50" viewBox="0 0 200 100""#)),
            Some(dims(100.0, 50.0, "px"))
        );
    }

    #[test]
    fn test_percentage_width_ignored() {
        assert_eq!(
            extract(&svg(r#"width="50%" viewBox="0 0 200 100""#)),
            Some(dims(200.0, 100.0, "px"))
        );
        assert_eq!(
            extract(&svg(r#"width="100%" height="100%" viewBox="0 0 10 5""#)),
            Some(dims(10.0, 5.0, "px"))
        );
    }

    #[test]
    fn test_viewbox_units_must_match() {
        assert_eq!(extract(&svg(r#"viewBox="0 0 200 100in""#)), None);
        assert_eq!(
            inspect(&svg(r#"viewBox="0 0 200 100in""#)),
            Err(MalformedSvg::ViewBoxUnitMismatch(String::new(), "in".to_string()))
        );
        assert_eq!(
            extract(&svg(r#"viewBox="0 0 200in 100in""#)),
            Some(dims(200.0, 100.0, "in"))
        );
    }

    #[test]
    fn test_viewbox_invalid() {
        assert_eq!(
            inspect(&svg(r#"viewBox="0 0 10""#)),
            Err(MalformedSvg::InvalidViewBox("0 0 10".to_string()))
        );
        assert_eq!(inspect(&svg(r#"viewBox="0 0 0 10""#)), Err(MalformedSvg::EmptyViewBox));
        assert_eq!(inspect(&svg(r#"viewBox="0 0 -5 10""#)), Err(MalformedSvg::EmptyViewBox));
        assert_eq!(inspect(&svg(r#"viewBox="0 0 a b""#)), Err(MalformedSvg::EmptyViewBox));
    }

    #[test]
    fn test_zero_width_falls_back_to_viewbox() {
        assert_eq!(
            extract(&svg(r#"width="0" height="10" viewBox="0 0 4 2""#)),
            Some(dims(20.0, 10.0, "px"))
        );
    }

    // ------------------------------------------------------------------------
    // Rejections
    // ------------------------------------------------------------------------

    #[test]
    fn test_not_markup() {
        assert_eq!(extract(b""), None);
        assert_eq!(extract(b"  \r\n\t "), None);
        assert_eq!(extract(b"\x89PNG\r\n\x1a\n"), None);
        assert_eq!(inspect(b"hello <svg width=\"1\" height=\"1\">"), Err(MalformedSvg::NotMarkup));
    }

    #[test]
    fn test_leading_whitespace_and_prolog() {
        let bytes = b"\n\t <?xml version=\"1.0\"?>\n<svg width=\"12\" height=\"8\"></svg>";
        assert_eq!(extract(bytes), Some(dims(12.0, 8.0, "px")));
    }

    #[test]
    fn test_missing_svg_tag() {
        assert_eq!(inspect(b"<html><body></body></html>"), Err(MalformedSvg::MissingSvgTag));
        assert_eq!(inspect(b"<svg></svg>"), Err(MalformedSvg::MissingSvgTag));
    }

    #[test]
    fn test_no_dimensions() {
        assert_eq!(inspect(&svg(r#"fill="none""#)), Err(MalformedSvg::NoDimensions));
        assert_eq!(inspect(&svg(r#"width="10""#)), Err(MalformedSvg::NoDimensions));
    }

    #[test]
    fn test_non_ascii_bytes_tolerated() {
        let mut bytes = b"<svg width=\"7\" height=\"9\"><title>".to_vec();
        bytes.extend_from_slice(&[0xE2, 0x9C, 0x93, 0xFF]);
        bytes.extend_from_slice(b"</title></svg>");
        assert_eq!(extract(&bytes), Some(dims(7.0, 9.0, "px")));
    }

    #[test]
    fn test_extract_idempotent() {
        for input in [
            svg(r#"width="120" height="80""#),
            svg(r#"viewBox="0 0 200 100in""#),
            b"not svg".to_vec(),
        ] {
            assert_eq!(extract(&input), extract(&input));
        }
    }

    // ------------------------------------------------------------------------
    // SvgDimensions
    // ------------------------------------------------------------------------

    #[test]
    fn test_dimensions_reject_non_positive() {
        assert!(SvgDimensions::new(0.0, 1.0, "px", "px").is_none());
        assert!(SvgDimensions::new(1.0, f64::INFINITY, "px", "px").is_none());
        assert!(SvgDimensions::new(f64::NAN, 1.0, "px", "px").is_none());
    }

    #[test]
    fn test_label() {
        assert_eq!(dims(120.0, 80.0, "px").label(), "W:120px H:80px");
        let odd = SvgDimensions::new(100.0 / 3.0, 2.5, "mm", "mm").unwrap();
        assert_eq!(odd.label(), "W:33.33mm H:2.5mm");
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&dims(1.0, 2.0, "px")).unwrap();
        assert_eq!(json, r#"{"width":1.0,"height":2.0,"widthUnit":"px","heightUnit":"px"}"#);
    }

    // ------------------------------------------------------------------------
    // extract_file
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let svg_path = dir.path().join("icon.SVG");
        let png_path = dir.path().join("photo.png");
        std::fs::write(&svg_path, svg(r#"width="24" height="24""#)).unwrap();
        std::fs::write(&png_path, svg(r#"width="24" height="24""#)).unwrap();

        assert_eq!(extract_file(&svg_path), Some(dims(24.0, 24.0, "px")));
        // Raster formats never carry dimensions
        assert_eq!(extract_file(&png_path), None);
        assert_eq!(extract_file(&dir.path().join("missing.svg")), None);
    }
}
