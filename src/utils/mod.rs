//! Utility modules.

pub mod collate;
pub mod path;
mod plural;

pub use plural::plural_count;
