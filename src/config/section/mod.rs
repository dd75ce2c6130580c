//! Configuration section definitions.
//!
//! Each module corresponds to a section in `gallery.toml`:
//!
//! | Module | TOML Section | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | `scan` | `[scan]`     | Extensions, exclusions, walk threads |

mod scan;

pub use scan::ScanConfig;
