//! Text and JSON rendering of command results.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::args::OutputArgs;
use crate::asset::{Gallery, GalleryKind};
use crate::image::svg::SvgDimensions;
use crate::log;
use crate::logger::paint;

/// Placeholder shown for a file without dimensions.
const NO_DIMENSIONS: &str = "-";

/// Dimensions of one file, as printed by `dims`.
#[derive(Debug, Serialize)]
pub(super) struct DimsRecord {
    pub path: String,
    pub dimensions: Option<SvgDimensions>,
}

impl DimsRecord {
    pub fn new(path: &Path, dimensions: Option<SvgDimensions>) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            dimensions,
        }
    }
}

/// Write `value` as JSON, or `text(color)` otherwise, to stdout or `--output`.
///
/// `color` is false when writing to a file.
pub(super) fn emit<T: Serialize>(
    value: &T,
    text: impl FnOnce(bool) -> String,
    args: &OutputArgs,
) -> Result<()> {
    let formatted = if args.json {
        if args.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        }
    } else {
        text(args.output.is_none())
    };

    write_to(&formatted, args.output.as_ref())
}

fn write_to(formatted: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted.trim_end())?;
        log!("output"; "wrote output to {}", output_path.display());
    } else if !formatted.is_empty() {
        println!("{}", formatted.trim_end());
    }
    Ok(())
}

/// Galleries as an indented listing:
///
/// ```text
/// icons (folder)
///   /work/icons
///     a.svg    W:24px H:24px
/// ```
pub(super) fn render_galleries(galleries: &[Gallery], color: bool) -> String {
    let style = |text: &str, apply: fn(&str) -> String| {
        if color {
            paint(text, Stream::Stdout, apply)
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    for gallery in galleries {
        let kind = match gallery.kind {
            GalleryKind::Files => "(files)",
            GalleryKind::Folder => "(folder)",
        };
        let _ = writeln!(
            out,
            "{} {}",
            style(&gallery.title, |t| t.bold().to_string()),
            style(kind, |t| t.dimmed().to_string())
        );

        if gallery.is_empty() {
            let _ = writeln!(out, "  {}", style("no assets found", |t| t.dimmed().to_string()));
            continue;
        }

        for section in &gallery.sections {
            let _ = writeln!(out, "  {}", style(&section.header, |t| t.cyan().to_string()));
            let width = name_width(section.entries.iter().map(|e| e.display_name.as_str()));
            for entry in &section.entries {
                let label = match entry.label() {
                    l if l.is_empty() => NO_DIMENSIONS.to_string(),
                    l => l,
                };
                let _ = writeln!(
                    out,
                    "    {:<width$}  {}",
                    entry.display_name,
                    style(&label, |t| t.dimmed().to_string())
                );
            }
        }
    }
    out
}

/// One `path  W:.. H:..` line per file.
pub(super) fn render_dims(records: &[DimsRecord]) -> String {
    let width = name_width(records.iter().map(|r| r.path.as_str()));
    let mut out = String::new();
    for record in records {
        let label = record
            .dimensions
            .as_ref()
            .map_or_else(|| NO_DIMENSIONS.to_string(), SvgDimensions::label);
        let _ = writeln!(out, "{:<width$}  {}", record.path, label);
    }
    out
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}
