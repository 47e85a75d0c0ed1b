// Standard library
use std::path::{Path, PathBuf};

// External crates
use anyhow::Context;

// Internal imports
use crate::error::Result;

pub use bench_platform::platform::{force_linux_path, is_windows};

/// A cross-platform equivalent of `realpath`.
///
/// Paths that do not exist yet are made absolute against the current
/// directory instead of failing.
pub fn portable_realpath(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(_) => Ok(std::path::absolute(path)
            .with_context(|| format!("Failed to get absolute path for {:?}", path))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_realpath_of_missing_file_is_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("not-yet-written.xml");
        let resolved = portable_realpath(&missing).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("not-yet-written.xml"));
    }

    #[test]
    fn test_realpath_resolves_dot_segments() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("results");
        std::fs::create_dir(&nested).unwrap();

        let resolved = portable_realpath(&nested.join("..").join("results")).unwrap();
        assert_eq!(resolved, nested.canonicalize().unwrap());
    }
}
