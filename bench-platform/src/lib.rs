//! Cross-platform abstraction layer for the benchmark harness utilities.
//!
//! This crate provides a clean abstraction over platform-specific operations,
//! eliminating the need for scattered `#[cfg]` conditionals in the helpers.
//! All platform differences are encapsulated in trait implementations.

pub mod providers;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use registry::PlatformRegistry;
pub use traits::{PlatformProvider, ProcessProvider, ProcessSignal};

/// Get the current platform provider
pub fn current() -> std::sync::Arc<dyn PlatformProvider> {
    PlatformRegistry::current()
}

/// Convenience functions for common operations
pub mod platform {
    use super::*;
    use anyhow::Result;
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};

    /// Whether the host OS is Windows-family
    pub fn is_windows() -> bool {
        current().is_windows()
    }

    /// Rewrite backslashes to forward slashes on Windows hosts; identity elsewhere
    pub fn force_linux_path(path: &str) -> String {
        current().force_linux_path(path)
    }

    /// Get the user's home directory
    pub fn home_dir() -> Result<PathBuf> {
        current().home_dir()
    }

    /// Check that `path` is an executable regular file
    pub fn is_executable(path: &Path) -> bool {
        current().is_executable(path)
    }

    /// Split a PATH-style value into its directories
    pub fn split_path_env(path: &OsStr) -> Vec<PathBuf> {
        current().split_path_env(path)
    }

    /// Send `signal` to the process group led by `pid`
    pub fn signal_process_group(pid: u32, signal: ProcessSignal) -> Result<()> {
        current().process().signal_group(pid, signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_platform_respects_home_env() {
        let original_home = env::var("HOME").ok();

        let temp_dir = TempDir::new().unwrap();
        let test_home = temp_dir.path().to_path_buf();

        env::set_var("HOME", &test_home);

        #[cfg(unix)]
        {
            let home = platform::home_dir().unwrap();
            assert_eq!(home, test_home);
        }

        match original_home {
            Some(original) => env::set_var("HOME", original),
            None => env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_force_linux_path_matches_host() {
        let converted = platform::force_linux_path(r"results\run.xml");
        if platform::is_windows() {
            assert_eq!(converted, "results/run.xml");
        } else {
            assert_eq!(converted, r"results\run.xml");
        }
    }
}
