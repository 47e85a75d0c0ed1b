//! Unix platform provider implementation.

use crate::providers::shared::SharedPlatformOps;
use crate::traits::{PlatformProvider, ProcessProvider, ProcessSignal};
use anyhow::{Context, Result};
use nix::errno::Errno;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::{access, AccessFlags, Pid};
use std::ffi::OsStr;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Unix platform provider (Linux, macOS and other Unix-like systems)
pub struct UnixPlatform;

impl PlatformProvider for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn is_windows(&self) -> bool {
        false
    }

    // === Path Operations ===

    fn force_linux_path(&self, path: &str) -> String {
        path.to_string()
    }

    fn home_dir(&self) -> Result<PathBuf> {
        self.default_home_dir()
    }

    // === Executable Operations ===

    fn is_executable(&self, path: &Path) -> bool {
        path.is_file() && access(path, AccessFlags::X_OK).is_ok()
    }

    // === Process Operations ===

    fn split_path_env(&self, path: &OsStr) -> Vec<PathBuf> {
        self.default_split_path_env(path)
    }

    fn process(&self) -> Box<dyn ProcessProvider> {
        Box::new(UnixProcessProvider)
    }
}

/// Unix process provider
pub struct UnixProcessProvider;

impl UnixProcessProvider {
    fn to_nix_signal(signal: ProcessSignal) -> Signal {
        match signal {
            ProcessSignal::Terminate => Signal::SIGTERM,
            ProcessSignal::Kill => Signal::SIGKILL,
            ProcessSignal::Interrupt => Signal::SIGINT,
            ProcessSignal::Hangup => Signal::SIGHUP,
        }
    }
}

impl ProcessProvider for UnixProcessProvider {
    fn prepare_command(&self, cmd: &mut Command) -> Result<()> {
        // pgid 0 makes the child the leader of a new group with pgid == pid
        cmd.process_group(0);
        Ok(())
    }

    fn signal_group(&self, pid: u32, signal: ProcessSignal) -> Result<()> {
        let raw = i32::try_from(pid)
            .with_context(|| format!("Process id {} does not fit a pid_t", pid))?;

        match killpg(Pid::from_raw(raw), Self::to_nix_signal(signal)) {
            Ok(()) | Err(Errno::ESRCH) => Ok(()),
            Err(errno) => Err(errno)
                .with_context(|| format!("Failed to send {} to process group {}", signal, pid)),
        }
    }
}
