//! Command-line interface module.

mod args;
pub mod common;
pub mod dims;
mod output;
pub mod scan;

pub use args::{Cli, Commands, DimsArgs, OutputArgs, ScanArgs};
