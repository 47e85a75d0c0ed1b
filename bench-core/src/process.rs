//! Child process handles with captured output and process-group signaling.

// Standard library
use std::io;
use std::process::ExitStatus;

// External crates
use bench_platform::ProcessSignal;
use duct::{Expression, Handle};
use tracing::debug;

// Internal imports
use crate::error::{BenchError, Result};
use crate::payload::Payload;

/// Exit status and captured streams of a finished child.
///
/// Streams that were not captured are empty.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: Payload,
    pub stderr: Payload,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` when the child was terminated by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

impl From<&std::process::Output> for CapturedOutput {
    fn from(output: &std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: Payload::Bytes(output.stdout.clone()),
            stderr: Payload::Bytes(output.stderr.clone()),
        }
    }
}

/// Handle to a running child process.
///
/// Non-zero exit codes are reported through [`CapturedOutput`], never as errors.
pub struct ChildProcess {
    handle: Handle,
    pid: u32,
    group_leader: bool,
}

impl ChildProcess {
    /// Start `expression` in the caller's process group.
    pub fn start(expression: &Expression) -> Result<Self> {
        Self::start_inner(expression.unchecked(), false)
    }

    /// Start `expression` as the leader of a new process group, so that
    /// [`ChildProcess::signal_group`] reaches the child and all its descendants.
    pub fn start_group_leader(expression: &Expression) -> Result<Self> {
        let provider = bench_platform::current().process();
        let expression = expression
            .unchecked()
            .before_spawn(move |cmd| provider.prepare_command(cmd).map_err(io::Error::other));
        Self::start_inner(expression, true)
    }

    fn start_inner(expression: Expression, group_leader: bool) -> Result<Self> {
        debug!(command = ?expression, group_leader, "starting child process");
        let handle = expression.start().map_err(|e| {
            BenchError::Command(format!("Failed to start {:?}: {}", expression, e))
        })?;
        let pid = handle.pids().first().copied().ok_or_else(|| {
            BenchError::Command(format!("No process was started for {:?}", expression))
        })?;

        Ok(Self {
            handle,
            pid,
            group_leader,
        })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Block until the child exits.
    pub fn wait_with_output(&self) -> Result<CapturedOutput> {
        let output = self.handle.wait()?;
        Ok(CapturedOutput::from(output))
    }

    /// Non-blocking poll; `None` while the child is still running.
    pub fn try_wait(&self) -> Result<Option<CapturedOutput>> {
        Ok(self.handle.try_wait()?.map(CapturedOutput::from))
    }

    /// Signal the whole process group led by this child.
    ///
    /// A group that already exited counts as delivered.
    pub fn signal_group(&self, signal: ProcessSignal) -> Result<()> {
        if !self.group_leader {
            return Err(BenchError::Unsupported(format!(
                "process {} was not started as a process group leader",
                self.pid
            )));
        }
        kill_process(self.pid, signal)
    }
}

/// Run `expression` to completion without capturing its streams.
pub fn run(expression: &Expression) -> Result<CapturedOutput> {
    ChildProcess::start(expression)?.wait_with_output()
}

/// Run `expression` to completion, capturing stdout and stderr.
pub fn run_captured(expression: &Expression) -> Result<CapturedOutput> {
    run(&expression.stdout_capture().stderr_capture())
}

/// Send `signal` to the process group of `pid`.
///
/// The error raised for a group that no longer exists is swallowed: the
/// processes returned and exited before they could be killed.
pub fn kill_process(pid: u32, signal: ProcessSignal) -> Result<()> {
    debug!(pid, %signal, "signaling process group");
    bench_platform::current()
        .process()
        .signal_group(pid, signal)
        .map_err(|e| BenchError::Signal(format!("{:#}", e)))
}

/// Terminate the process group of `pid` with the default signal.
pub fn kill_process_default(pid: u32) -> Result<()> {
    kill_process(pid, ProcessSignal::default())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use duct::cmd;
    use std::os::unix::process::ExitStatusExt;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_run_captured_collects_streams() {
        let output = run_captured(&cmd!("sh", "-c", "echo out; echo err >&2; exit 3")).unwrap();
        assert_eq!(output.code(), Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout.to_text_lossy(), "out\n");
        assert_eq!(output.stderr.to_text_lossy(), "err\n");
    }

    #[test]
    fn test_run_passes_stdin() {
        let output = run_captured(&cmd!("cat").stdin_bytes("commit message")).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.clone().into_text().unwrap(), "commit message");
    }

    #[test]
    fn test_missing_program_is_command_error() {
        let result = run(&cmd!("definitely-not-a-real-program-4711"));
        assert!(matches!(result, Err(BenchError::Command(_))));
    }

    #[test]
    fn test_signal_group_kills_descendants() {
        let child =
            ChildProcess::start_group_leader(&cmd!("sh", "-c", "sleep 30 & sleep 30; wait"))
                .unwrap();
        thread::sleep(Duration::from_millis(100));
        assert!(child.try_wait().unwrap().is_none());

        child.signal_group(ProcessSignal::Kill).unwrap();
        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.signal(), Some(9));
    }

    #[test]
    fn test_signal_group_requires_leader() {
        let child = ChildProcess::start(&cmd!("true")).unwrap();
        let result = child.signal_group(ProcessSignal::Terminate);
        assert!(matches!(result, Err(BenchError::Unsupported(_))));
        child.wait_with_output().unwrap();
    }

    #[test]
    fn test_kill_exited_process_is_success() {
        let child = ChildProcess::start_group_leader(&cmd!("true")).unwrap();
        child.wait_with_output().unwrap();
        assert!(child.signal_group(ProcessSignal::Terminate).is_ok());
        assert!(kill_process_default(child.pid()).is_ok());
    }
}
