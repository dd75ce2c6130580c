//! Directory-keyed grouping of discovered asset paths.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::utils::collate::locale_cmp;

/// Ordered mapping from a directory to the asset files directly inside it.
///
/// Keys are unique. Every path in a group has that group's key as its exact
/// parent. Built fresh per scan and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetGroup {
    groups: Vec<(PathBuf, Vec<PathBuf>)>,
}

impl AssetGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|(_, files)| files.len()).sum()
    }

    /// Files for one directory.
    pub fn get(&self, dir: &Path) -> Option<&[PathBuf]> {
        self.groups
            .iter()
            .find(|(key, _)| key == dir)
            .map(|(_, files)| files.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Path> {
        self.groups.iter().map(|(key, _)| key.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[PathBuf])> {
        self.groups
            .iter()
            .map(|(key, files)| (key.as_path(), files.as_slice()))
    }

    /// All files in group order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.groups
            .iter()
            .flat_map(|(_, files)| files.iter().map(PathBuf::as_path))
    }
}

impl IntoIterator for AssetGroup {
    type Item = (PathBuf, Vec<PathBuf>);
    type IntoIter = std::vec::IntoIter<(PathBuf, Vec<PathBuf>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Serialized as a JSON object keyed by directory, in group order.
impl Serialize for AssetGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (dir, files) in &self.groups {
            let files: Vec<_> = files.iter().map(|f| f.to_string_lossy()).collect();
            map.serialize_entry(&dir.to_string_lossy(), &files)?;
        }
        map.end()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates files by parent directory.
///
/// Keys keep first-appearance order until [`GroupBuilder::build_sorted`]
/// reorders them.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    groups: Vec<(PathBuf, Vec<PathBuf>)>,
    index: FxHashMap<PathBuf, usize>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `file` to the group of `dir`.
    pub fn push(&mut self, dir: &Path, file: PathBuf) {
        match self.index.get(dir) {
            Some(&i) => self.groups[i].1.push(file),
            None => {
                self.index.insert(dir.to_path_buf(), self.groups.len());
                self.groups.push((dir.to_path_buf(), vec![file]));
            }
        }
    }

    /// Whether `file` was already added under `dir`.
    pub fn contains(&self, dir: &Path, file: &Path) -> bool {
        self.index
            .get(dir)
            .is_some_and(|&i| self.groups[i].1.iter().any(|f| f == file))
    }

    /// Groups in first-appearance order.
    pub fn build(self) -> AssetGroup {
        AssetGroup {
            groups: self.groups,
        }
    }

    /// Groups sorted by directory with [`locale_cmp`].
    pub fn build_sorted(self) -> AssetGroup {
        let mut groups = self.groups;
        groups.sort_by(|(a, _), (b, _)| locale_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
        AssetGroup { groups }
    }
}
