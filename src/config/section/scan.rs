//! `[scan]` section configuration.
//!
//! Controls which files a folder scan picks up.
//!
//! # Example
//!
//! ```toml
//! [scan]
//! svg_only = true             # Only .svg files (false = every extension below)
//! extensions = ["svg", "png", "jpg", "jpeg", "webp", "gif", "bmp", "ico"]
//! exclude = ["node_modules"]  # Directory names never descended into
//! threads = 0                 # Walker threads (0 = one per core)
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::{
    DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, ExclusionSet, ExtensionFilter, SVG_EXT,
    normalize_extension,
};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Folder scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Show only SVG files when scanning a folder.
    pub svg_only: bool,

    /// Recognised image extensions, with or without a leading dot.
    /// `svg` is always added.
    pub extensions: Vec<String>,

    /// Directory base names skipped at every depth.
    pub exclude: Vec<String>,

    /// Directory-walk worker threads. `0` uses one per core.
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            svg_only: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect(),
            threads: 0,
        }
    }
}

impl ScanConfig {
    pub const FIELD_EXTENSIONS: FieldPath = FieldPath::new("scan.extensions");
    pub const FIELD_EXCLUDE: FieldPath = FieldPath::new("scan.exclude");

    /// Filter built from `extensions` and `svg_only`.
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions, self.svg_only)
    }

    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::new(&self.exclude)
    }

    /// Validate scan settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut has_svg = false;
        for ext in &self.extensions {
            let normalized = normalize_extension(ext);
            if normalized.is_empty() {
                diag.error(Self::FIELD_EXTENSIONS, format!("empty extension `{ext}`"));
            } else if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
                diag.error_with_hint(
                    Self::FIELD_EXTENSIONS,
                    format!("invalid extension `{ext}`"),
                    "use a bare extension such as `png` or `.webp`",
                );
            }
            has_svg |= normalized == SVG_EXT;
        }

        if !has_svg {
            diag.hint(Self::FIELD_EXTENSIONS, "`svg` is always scanned and was added");
        }

        for name in &self.exclude {
            if name.trim().is_empty() {
                diag.error(Self::FIELD_EXCLUDE, "empty directory name");
            } else if name.contains(['/', '\\']) {
                diag.error_with_hint(
                    Self::FIELD_EXCLUDE,
                    format!("`{name}` contains a path separator"),
                    "exclusions match a single directory name, e.g. `node_modules`",
                );
            }
        }
    }
}
