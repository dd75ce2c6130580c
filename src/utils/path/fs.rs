//! Path normalization utilities.
//!
//! Provides consistent path handling across the codebase:
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `display_path` - section header form of a directory path
//! - `base_name` - final component as an owned string

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// let abs = normalize_path(Path::new("./icons"));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render a directory path for a section header.
///
/// The root prefix (a drive letter such as `c:`) is upper-cased so that the
/// same folder always shows the same header regardless of how it was opened.
/// Paths without a prefix are displayed unchanged.
pub fn display_path(path: &Path) -> String {
    let shown = path.to_string_lossy();
    match path.components().next() {
        Some(Component::Prefix(prefix)) => {
            let len = prefix.as_os_str().len();
            match (shown.get(..len), shown.get(len..)) {
                (Some(head), Some(rest)) => format!("{}{}", head.to_uppercase(), rest),
                _ => shown.into_owned(),
            }
        }
        _ => shown.into_owned(),
    }
}

/// Final path component as a string, or the whole path when there is none
/// (e.g. `/`).
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
