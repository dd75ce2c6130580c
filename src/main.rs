//! svg-gallery - browse SVG and image assets grouped by folder.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod core;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::GalleryConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = GalleryConfig::load(&cli)?;

    match &cli.command {
        Commands::Scan { args } => cli::scan::run_scan(args, &config),
        Commands::Dims { args } => cli::dims::run_dims(args),
    }
}
