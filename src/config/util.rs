//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/project/assets/icons/  ← cwd
/// /home/user/project/gallery.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a/gallery.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("gallery.toml")).unwrap();
        assert_eq!(found, dir.path().join("a/gallery.toml"));
    }

    #[test]
    fn test_find_config_nearest_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("gallery.toml"), "").unwrap();
        fs::write(nested.join("gallery.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("gallery.toml")).unwrap();
        assert_eq!(found, nested.join("gallery.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file_from(dir.path(), &path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("gallery.toml")).unwrap();
        let found = find_config_file_from(dir.path(), Path::new("gallery.toml"));
        // A real config higher up may exist on the host; only the directory is ruled out
        assert_ne!(found, Some(dir.path().join("gallery.toml")));
    }
}
