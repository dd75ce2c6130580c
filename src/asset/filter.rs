//! Extension and directory-name filters applied while scanning.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use rustc_hash::FxHashSet;

use super::kind::{DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, SVG_EXT, extension_lower};

/// Recognised file extensions with an "SVG only" toggle.
///
/// Extensions are stored lowercased without a leading dot. `svg` is always a
/// member. With `svg_only` set, only `svg` is active regardless of the rest.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: FxHashSet<String>,
    svg_only: bool,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I, svg_only: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: FxHashSet<String> = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        set.insert(SVG_EXT.to_string());
        Self {
            extensions: set,
            svg_only,
        }
    }

    /// Only `.svg` files.
    pub fn svg_only() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied(), true)
    }

    /// Every default image extension.
    pub fn all_images() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied(), false)
    }

    pub const fn is_svg_only(&self) -> bool {
        self.svg_only
    }

    /// Copy of this filter with a different mode.
    pub fn with_svg_only(mut self, svg_only: bool) -> Self {
        self.svg_only = svg_only;
        self
    }

    /// Whether a scan should keep `path` under the current mode.
    pub fn matches(&self, path: &Path) -> bool {
        match extension_lower(path) {
            Some(ext) if self.svg_only => ext == SVG_EXT,
            Some(ext) => self.extensions.contains(&ext),
            None => false,
        }
    }

    /// Whether `path` has any recognised extension, ignoring the mode.
    pub fn is_recognized(&self, path: &Path) -> bool {
        extension_lower(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Active extensions, sorted.
    pub fn active(&self) -> Vec<&str> {
        if self.svg_only {
            return vec![SVG_EXT];
        }
        let mut exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::svg_only()
    }
}

/// Lowercase and strip a leading dot: `".PNG"` -> `"png"`.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Directory base names that are never descended into or reported.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: FxHashSet<OsString>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_os_string())
                .collect(),
        }
    }

    /// Nothing excluded.
    pub fn empty() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }

    pub fn insert(&mut self, name: impl AsRef<OsStr>) {
        self.names.insert(name.as_ref().to_os_string());
    }

    /// Exact base-name match.
    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Whether the final component of `dir` is excluded.
    pub fn excludes(&self, dir: &Path) -> bool {
        dir.file_name().is_some_and(|name| self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_svg_only() {
        let filter = ExtensionFilter::svg_only();
        assert!(filter.matches(Path::new("/x/logo.svg")));
        assert!(filter.matches(Path::new("/x/LOGO.SVG")));
        assert!(!filter.matches(Path::new("/x/photo.png")));
        assert!(!filter.matches(Path::new("/x/README")));
        assert_eq!(filter.active(), vec!["svg"]);
    }

    #[test]
    fn test_filter_all_images() {
        let filter = ExtensionFilter::all_images();
        assert!(filter.matches(Path::new("/x/photo.PNG")));
        assert!(filter.matches(Path::new("/x/photo.jpeg")));
        assert!(filter.matches(Path::new("/x/logo.svg")));
        assert!(!filter.matches(Path::new("/x/notes.txt")));
        assert_eq!(filter.active().len(), DEFAULT_EXTENSIONS.len());
    }

    #[test]
    fn test_filter_always_contains_svg() {
        let filter = ExtensionFilter::new([".PNG", "gif"], false);
        assert!(filter.matches(Path::new("a.svg")));
        assert!(filter.matches(Path::new("a.png")));
        assert!(!filter.matches(Path::new("a.jpg")));
        assert_eq!(filter.active(), vec!["gif", "png", "svg"]);
    }

    #[test]
    fn test_filter_recognized_ignores_mode() {
        let filter = ExtensionFilter::svg_only();
        assert!(!filter.matches(Path::new("a.png")));
        assert!(filter.is_recognized(Path::new("a.png")));
        assert!(filter.clone().with_svg_only(false).matches(Path::new("a.png")));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".SVG"), "svg");
        assert_eq!(normalize_extension(" webp "), "webp");
        assert_eq!(normalize_extension("."), "");
    }

    #[test]
    fn test_exclusion_set() {
        let mut set = ExclusionSet::default();
        assert!(set.excludes(Path::new("/proj/node_modules")));
        assert!(!set.excludes(Path::new("/proj/node_modules_backup")));
        assert!(!set.excludes(Path::new("/proj/src")));

        set.insert(".git");
        assert!(set.contains(OsStr::new(".git")));
        assert_eq!(set.len(), 2);
        assert!(ExclusionSet::empty().is_empty());
    }
}
