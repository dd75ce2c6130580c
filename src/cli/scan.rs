//! `scan` command: galleries for folders and file selections.
//!
//! Paths are dispatched the way an "open" action would treat them:
//! recognised image files share one gallery, every folder gets its own.

use std::path::PathBuf;

use anyhow::{Result, bail};

use super::args::ScanArgs;
use super::common::resolve_input_paths;
use super::output::{emit, render_galleries};
use crate::asset::{Gallery, ScanError, ScanOptions, Selection};
use crate::config::GalleryConfig;
use crate::core::shutdown_token;
use crate::log;
use crate::utils::plural_count;

/// Execute scan command
pub fn run_scan(args: &ScanArgs, config: &GalleryConfig) -> Result<()> {
    let mut paths = resolve_input_paths(&args.paths)?;
    if paths.is_empty() {
        paths.push(PathBuf::from("."));
    }

    let filter = config.scan.extension_filter();
    let exclusions = config.scan.exclusion_set();
    let options = ScanOptions::new(config.scan.threads, shutdown_token());

    let selection = Selection::classify(&paths, &filter);
    for (path, reason) in &selection.skipped {
        log!("warning"; "skipping {}: {}", path.display(), reason.as_str());
    }
    if selection.is_empty() {
        bail!("nothing to scan");
    }

    let mut galleries = Vec::with_capacity(selection.folders.len() + 1);
    if !selection.files.is_empty() {
        galleries.push(Gallery::from_files(&selection.files));
    }

    let mut failed = 0;
    for folder in &selection.folders {
        log!("scan"; "scanning {} ({})", folder.display(), filter.active().join(", "));
        match Gallery::from_folder(folder, &filter, &exclusions, &options) {
            Ok(gallery) => galleries.push(gallery),
            Err(ScanError::Cancelled) => bail!(ScanError::Cancelled),
            Err(err) => {
                log!("error"; "{:#}", anyhow::Error::new(err));
                failed += 1;
            }
        }
    }

    let files: usize = galleries.iter().map(Gallery::file_count).sum();
    let sections: usize = galleries.iter().map(|g| g.sections.len()).sum();
    log!(
        "scan";
        "found {} in {}",
        plural_count(files, "file"),
        plural_count(sections, "folder")
    );

    emit(&galleries, |color| render_galleries(&galleries, color), &args.output)?;

    if failed > 0 && galleries.is_empty() {
        bail!("no folder could be scanned");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use std::fs;
    use tempfile::TempDir;

    fn args(paths: Vec<PathBuf>, output: PathBuf) -> ScanArgs {
        ScanArgs {
            paths,
            all: false,
            exclude: Vec::new(),
            threads: None,
            output: OutputArgs {
                json: true,
                output: Some(output),
                ..OutputArgs::default()
            },
        }
    }

    #[test]
    fn test_run_scan_files_and_folders() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let icons = root.join("icons");
        fs::create_dir_all(icons.join("node_modules")).unwrap();
        fs::write(icons.join("a.svg"), r#"<svg width="4" height="2"></svg>"#).unwrap();
        fs::write(icons.join("node_modules/x.svg"), "<svg/>").unwrap();
        fs::write(root.join("photo.png"), "png").unwrap();

        let out = root.join("out.json");
        let args = args(vec![root.join("photo.png"), icons.clone()], out.clone());
        run_scan(&args, &GalleryConfig::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let galleries = json.as_array().unwrap();
        assert_eq!(galleries.len(), 2);

        assert_eq!(galleries[0]["title"], "photo.png");
        assert_eq!(galleries[0]["kind"], "files");

        assert_eq!(galleries[1]["title"], "icons");
        assert_eq!(galleries[1]["kind"], "folder");
        let sections = galleries[1]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 1);
        let entry = &sections[0]["entries"][0];
        assert_eq!(entry["displayName"], "a.svg");
        assert_eq!(entry["dimensions"]["width"], 4.0);
    }

    #[test]
    fn test_run_scan_nothing_usable() {
        let dir = TempDir::new().unwrap();
        let args = args(vec![dir.path().join("missing")], dir.path().join("out.json"));
        assert!(run_scan(&args, &GalleryConfig::default()).is_err());
    }
}
