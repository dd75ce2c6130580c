//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Expand the CLI path list: a lone `-` reads paths from stdin.
pub fn resolve_input_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if paths.len() == 1 && paths[0].as_os_str() == "-" {
        let stdin = io::stdin();
        read_paths(stdin.lock()).context("Failed to read paths from stdin")
    } else {
        Ok(paths.to_vec())
    }
}

/// Read file paths, one per line, skipping blank lines
pub fn read_paths(reader: impl BufRead) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_paths_skips_blank_lines() {
        let input = "a.svg\n\n  icons/b.svg  \r\n\t\n";
        let paths = read_paths(input.as_bytes()).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.svg"), PathBuf::from("icons/b.svg")]);
    }

    #[test]
    fn test_resolve_input_paths_passthrough() {
        let paths = vec![PathBuf::from("a"), PathBuf::from("-")];
        assert_eq!(resolve_input_paths(&paths).unwrap(), paths);
        assert!(resolve_input_paths(&[]).unwrap().is_empty());
    }
}
