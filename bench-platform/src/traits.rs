//! Core traits for platform abstraction.
//!
//! This module defines the trait interfaces that abstract away platform-specific
//! operations. Each platform implements these traits to provide consistent
//! behavior for the harness helpers across operating systems.

use anyhow::Result;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Portable names for the signals the harness sends to benchmark processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProcessSignal {
    /// Polite termination request (`SIGTERM` on Unix).
    #[default]
    Terminate,
    /// Forced termination (`SIGKILL` on Unix).
    Kill,
    /// Keyboard interrupt (`SIGINT` on Unix).
    Interrupt,
    /// Terminal hangup (`SIGHUP` on Unix).
    Hangup,
}

impl fmt::Display for ProcessSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessSignal::Terminate => "SIGTERM",
            ProcessSignal::Kill => "SIGKILL",
            ProcessSignal::Interrupt => "SIGINT",
            ProcessSignal::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

/// Core platform abstraction trait.
///
/// This trait encapsulates the host-specific operations the harness helpers
/// rely on: host detection, path normalization, PATH handling and
/// executable checks.
pub trait PlatformProvider: Send + Sync {
    /// Get the platform name (e.g., "unix", "windows")
    fn name(&self) -> &'static str;

    /// Whether the host is Windows-family
    fn is_windows(&self) -> bool;

    // === Path Operations ===

    /// Rewrite a path so that it uses forward slashes only
    fn force_linux_path(&self, path: &str) -> String;

    /// Get the user's home directory
    fn home_dir(&self) -> Result<PathBuf>;

    // === Executable Operations ===

    /// Check that `path` is a regular file the current user may execute
    fn is_executable(&self, path: &Path) -> bool;

    /// Split a PATH-style value into its directories, in search order
    fn split_path_env(&self, path: &OsStr) -> Vec<PathBuf>;

    // === Process Operations ===

    /// Get the process provider for this platform
    fn process(&self) -> Box<dyn ProcessProvider>;
}

/// Process execution abstraction trait.
///
/// This trait handles platform-specific process group handling.
pub trait ProcessProvider: Send + Sync {
    /// Prepare a command so the spawned child leads its own process group
    fn prepare_command(&self, cmd: &mut Command) -> Result<()>;

    /// Send `signal` to every process in the group led by `pid`.
    ///
    /// A group that no longer exists is not an error: the processes already
    /// exited before the signal could be delivered.
    fn signal_group(&self, pid: u32, signal: ProcessSignal) -> Result<()>;
}
