//! Windows platform provider implementation.

use crate::providers::shared::SharedPlatformOps;
use crate::traits::{PlatformProvider, ProcessProvider, ProcessSignal};
use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::os::windows::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

// taskkill exit code when no process matches the pid
const TASKKILL_NOT_FOUND: i32 = 128;

/// Windows platform provider
pub struct WindowsPlatform;

impl PlatformProvider for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn is_windows(&self) -> bool {
        true
    }

    // === Path Operations ===

    fn force_linux_path(&self, path: &str) -> String {
        path.replace('\\', "/")
    }

    fn home_dir(&self) -> Result<PathBuf> {
        self.default_home_dir()
    }

    // === Executable Operations ===

    fn is_executable(&self, path: &Path) -> bool {
        // Windows has no execute bit; any regular file may be launched
        path.is_file()
    }

    // === Process Operations ===

    fn split_path_env(&self, path: &OsStr) -> Vec<PathBuf> {
        self.default_split_path_env(path)
    }

    fn process(&self) -> Box<dyn ProcessProvider> {
        Box::new(WindowsProcessProvider)
    }
}

/// Windows process provider
pub struct WindowsProcessProvider;

impl ProcessProvider for WindowsProcessProvider {
    fn prepare_command(&self, cmd: &mut Command) -> Result<()> {
        cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
        Ok(())
    }

    fn signal_group(&self, pid: u32, signal: ProcessSignal) -> Result<()> {
        match signal {
            ProcessSignal::Terminate | ProcessSignal::Kill => {}
            other => bail!("{} cannot be delivered to a process tree on Windows", other),
        }

        let output = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/T", "/F"])
            .output()
            .context("Failed to run taskkill")?;

        match output.status.code() {
            Some(0) | Some(TASKKILL_NOT_FOUND) => Ok(()),
            code => bail!(
                "taskkill failed for process tree {} (exit code {:?}): {}",
                pid,
                code,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }
}
