//! Best-effort commit of result files into the enclosing git repository.

use bench_core::platform::portable_realpath;
use bench_core::{bench_out, run, run_captured};
use duct::cmd;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which step ended a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    Committed,
    NotADirectory,
    NotARepository,
    StatusFailed,
    LocalChanges,
    AddFailed,
    CommitFailed,
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed)
    }
}

fn repository_root(base_dir: &Path) -> Option<PathBuf> {
    let output = run_captured(&cmd!("git", "rev-parse", "--show-toplevel").dir(base_dir)).ok()?;
    if !output.success() {
        return None;
    }
    output
        .stdout
        .to_text_lossy()
        .lines()
        .next()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
}

/// Add and commit `files` to the git repository containing `base_dir`.
///
/// Nothing is staged or committed when the repository has changes to tracked
/// files. Every failure is reported on stdout and through the returned
/// outcome; none is raised to the caller.
pub fn add_files_to_git_repository<P: AsRef<Path>>(
    base_dir: impl AsRef<Path>,
    files: &[P],
    description: &str,
) -> CommitOutcome {
    let base_dir = base_dir.as_ref();
    if !base_dir.is_dir() {
        bench_out!("Output path is not a directory, cannot add files to git repository.");
        return CommitOutcome::NotADirectory;
    }

    let Some(git_root) = repository_root(base_dir) else {
        bench_out!(
            "Cannot commit results to repository: git rev-parse failed, perhaps output path is not a git directory?"
        );
        return CommitOutcome::NotARepository;
    };
    debug!(root = %git_root.display(), "found git repository");

    let status = run_captured(
        &cmd!("git", "status", "--porcelain", "--untracked-files=no").dir(&git_root),
    );
    match status {
        Ok(output) if output.success() => {
            if !output.stdout.is_empty() {
                bench_out!("Git repository has local changes, not committing results.");
                return CommitOutcome::LocalChanges;
            }
        }
        Ok(output) => {
            bench_out!("Git status failed! Output was:\n{}", output.stderr.to_text_lossy());
            return CommitOutcome::StatusFailed;
        }
        Err(e) => {
            bench_out!("Git status failed! Output was:\n{}", e);
            return CommitOutcome::StatusFailed;
        }
    }

    let mut add_args: Vec<OsString> = vec!["add".into(), "--".into()];
    add_args.extend(files.iter().map(|file| {
        let file = file.as_ref();
        portable_realpath(file)
            .unwrap_or_else(|_| file.to_path_buf())
            .into_os_string()
    }));
    debug!(files = files.len(), "staging result files");
    if !run(&duct::cmd("git", add_args).dir(&git_root)).is_ok_and(|output| output.success()) {
        bench_out!("Git add failed, will not commit results!");
        return CommitOutcome::AddFailed;
    }

    bench_out!(
        "Committing results files to git repository in {}",
        git_root.display()
    );
    let commit = cmd!("git", "commit", "--file=-", "--quiet")
        .dir(&git_root)
        .stdin_bytes(description.as_bytes().to_vec());
    if !run(&commit).is_ok_and(|output| output.success()) {
        bench_out!("Git commit failed!");
        return CommitOutcome::CommitFailed;
    }

    CommitOutcome::Committed
}
