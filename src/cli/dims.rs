//! `dims` command: intrinsic size of individual SVG files.

use anyhow::Result;
use rayon::prelude::*;

use super::args::DimsArgs;
use super::common::resolve_input_paths;
use super::output::{DimsRecord, emit, render_dims};
use crate::asset::AssetKind;
use crate::debug;
use crate::image::svg;
use crate::log;
use crate::utils::plural_count;

/// Execute dims command
pub fn run_dims(args: &DimsArgs) -> Result<()> {
    let files = resolve_input_paths(&args.files)?;

    let records: Vec<DimsRecord> = files
        .par_iter()
        .map(|path| {
            if !AssetKind::from_path(path).is_svg() {
                debug!("dims"; "{} is not an svg file", path.display());
            }
            DimsRecord::new(path, svg::extract_file(path))
        })
        .collect();

    let sized = records.iter().filter(|r| r.dimensions.is_some()).count();
    log!(
        "dims";
        "{} of {} sized",
        sized,
        plural_count(records.len(), "file")
    );

    emit(&records, |_| render_dims(&records), &args.output)
}
