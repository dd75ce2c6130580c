//! Image inspection.
//!
//! - [`svg`]: intrinsic SVG dimensions read from markup

pub mod svg;
