//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects except
//! `normalize_path`, which consults the filesystem to canonicalize.
//!
//! - [`fs`]: Filesystem path normalization and display helpers

pub mod fs;

pub use fs::{base_name, display_path, normalize_path};
