//! SVG dimension extraction.
//!
//! Works on raw bytes with pattern matching only; no XML parser, no
//! rendering. Any malformed input simply yields no dimensions.
//!
//! - [`length`]: numeric attribute values with unit suffixes
//! - [`dimensions`]: the `width` / `height` / `viewBox` resolution

mod dimensions;
mod length;

pub use dimensions::{MalformedSvg, SvgDimensions, extract, extract_file, inspect};
pub use length::{DEFAULT_UNIT, KNOWN_UNITS, Length};
