//! Tests for committing result files into a git repository

use bench_util::{add_files_to_git_repository, CommitOutcome};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Repository with one committed file, or `None` when git is not installed
fn init_repository() -> Option<TempDir> {
    if which::which("git").is_err() {
        return None;
    }

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.email", "bench@example.org"]);
    git(dir, &["config", "user.name", "Bench Harness"]);
    git(dir, &["config", "commit.gpgsign", "false"]);

    fs::write(dir.join("benchmark.xml"), "<benchmark/>\n").unwrap();
    git(dir, &["add", "benchmark.xml"]);
    git(dir, &["commit", "--quiet", "-m", "Add benchmark definition"]);
    Some(temp_dir)
}

fn commit_count(dir: &Path) -> String {
    git(dir, &["rev-list", "--count", "HEAD"]).trim().to_string()
}

#[test]
fn test_commits_results_into_clean_repository() {
    let Some(repo) = init_repository() else {
        return;
    };
    let results = repo.path().join("results");
    fs::create_dir(&results).unwrap();
    let result_file = results.join("run.2026-10-19.results.xml");
    fs::write(&result_file, "<result/>\n").unwrap();

    let outcome = add_files_to_git_repository(&results, &[&result_file], "Results for run 2026-10-19");

    assert_eq!(outcome, CommitOutcome::Committed);
    assert_eq!(commit_count(repo.path()), "2");
    assert_eq!(
        git(repo.path(), &["log", "-1", "--format=%B"]).trim(),
        "Results for run 2026-10-19"
    );
    assert!(git(repo.path(), &["status", "--porcelain"]).is_empty());
}

#[test]
fn test_local_changes_leave_repository_untouched() {
    let Some(repo) = init_repository() else {
        return;
    };
    fs::write(repo.path().join("benchmark.xml"), "<benchmark timelimit=\"60\"/>\n").unwrap();
    let result_file = repo.path().join("results.xml");
    fs::write(&result_file, "<result/>\n").unwrap();

    let outcome = add_files_to_git_repository(repo.path(), &[&result_file], "Results");

    assert_eq!(outcome, CommitOutcome::LocalChanges);
    assert_eq!(commit_count(repo.path()), "1");
    assert!(git(repo.path(), &["diff", "--cached", "--name-only"]).is_empty());
}

#[test]
fn test_untracked_files_do_not_block_commit() {
    let Some(repo) = init_repository() else {
        return;
    };
    fs::write(repo.path().join("scratch.log"), "unrelated").unwrap();
    let result_file = repo.path().join("results.xml");
    fs::write(&result_file, "<result/>\n").unwrap();

    let outcome = add_files_to_git_repository(repo.path(), &[&result_file], "Results");

    assert_eq!(outcome, CommitOutcome::Committed);
    let committed = git(repo.path(), &["show", "--name-only", "--format=", "HEAD"]);
    assert_eq!(committed.trim(), "results.xml");
}

#[test]
fn test_missing_file_fails_at_add() {
    let Some(repo) = init_repository() else {
        return;
    };
    let missing = repo.path().join("never-written.xml");

    let outcome = add_files_to_git_repository(repo.path(), &[&missing], "Results");

    assert_eq!(outcome, CommitOutcome::AddFailed);
    assert_eq!(commit_count(repo.path()), "1");
}

#[test]
fn test_directory_outside_repository() {
    if which::which("git").is_err() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let inside_repo = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(temp_dir.path())
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if inside_repo {
        return;
    }

    let outcome = add_files_to_git_repository(temp_dir.path(), &["results.xml"], "Results");
    assert_eq!(outcome, CommitOutcome::NotARepository);
}
