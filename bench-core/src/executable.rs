//! Executable discovery on the search path.

// Standard library
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

// External crates
use tracing::debug;
use which::which_in;

/// Search `search_path` (a PATH-style list) and then the current directory
/// for an executable named `program`, falling back to `fallback` when that
/// path is itself executable.
///
/// Never terminates the process; returns `None` when nothing was found.
pub fn find_executable_in(
    program: &str,
    search_path: Option<&OsStr>,
    fallback: Option<&Path>,
) -> Option<PathBuf> {
    let platform = bench_platform::current();

    let mut dirs: Vec<PathBuf> = search_path
        .map(|path| platform.split_path_env(path))
        .unwrap_or_default();
    dirs.retain(|dir| !dir.as_os_str().is_empty());
    dirs.push(PathBuf::from("."));

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let found = dirs
        .iter()
        .find_map(|dir| which_in(program, Some(dir), &cwd).ok());
    if let Some(found) = found {
        debug!(program, path = %found.display(), "found executable on search path");
        return Some(found);
    }

    fallback
        .filter(|candidate| platform.is_executable(candidate))
        .map(Path::to_path_buf)
}

/// Look up `program` on `PATH` (plus the current directory).
///
/// When neither the search nor an executable `fallback` succeeds, either
/// terminates the process with a diagnostic (`exit_on_error`) or returns
/// `fallback` unchanged, which may be `None`.
pub fn find_executable(
    program: &str,
    fallback: Option<&Path>,
    exit_on_error: bool,
) -> Option<PathBuf> {
    let search_path = env::var_os("PATH");
    if let Some(found) = find_executable_in(program, search_path.as_deref(), fallback) {
        return Some(found);
    }

    if exit_on_error {
        crate::bench_error!("ERROR: Could not find '{}' executable", program);
        std::process::exit(1);
    }
    fallback.map(Path::to_path_buf)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\necho 1\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_finds_program_on_search_path() {
        let temp_dir = TempDir::new().unwrap();
        write_script(temp_dir.path(), "bench-tool", 0o755);

        let found = find_executable_in("bench-tool", Some(temp_dir.path().as_os_str()), None);
        assert_eq!(found, Some(temp_dir.path().join("bench-tool")));
    }

    #[test]
    fn test_skips_non_executable_files() {
        let temp_dir = TempDir::new().unwrap();
        write_script(temp_dir.path(), "bench-tool", 0o644);

        let found = find_executable_in("bench-tool", Some(temp_dir.path().as_os_str()), None);
        assert_eq!(found, None);
    }

    #[test]
    fn test_executable_fallback() {
        let search_dir = TempDir::new().unwrap();
        let fallback_dir = TempDir::new().unwrap();
        let fallback = write_script(fallback_dir.path(), "tool-fallback", 0o755);

        let found = find_executable_in(
            "missing-tool-4711",
            Some(search_dir.path().as_os_str()),
            Some(&fallback),
        );
        assert_eq!(found, Some(fallback));
    }

    #[test]
    fn test_non_executable_fallback_is_returned_without_exit() {
        let fallback_dir = TempDir::new().unwrap();
        let fallback = write_script(fallback_dir.path(), "tool-fallback", 0o600);

        assert_eq!(
            find_executable_in("missing-tool-4711", None, Some(&fallback)),
            None
        );
        assert_eq!(
            find_executable("missing-tool-4711", Some(&fallback), false),
            Some(fallback)
        );
        assert_eq!(find_executable("missing-tool-4711", None, false), None);
    }

    #[test]
    fn test_search_path_order_and_empty_entries() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_script(second.path(), "bench-tool", 0o755);
        write_script(first.path(), "bench-tool", 0o755);

        let search_path =
            env::join_paths(["", first.path().to_str().unwrap(), second.path().to_str().unwrap()])
                .unwrap();
        let found = find_executable_in("bench-tool", Some(search_path.as_os_str()), None);
        assert_eq!(found, Some(first.path().join("bench-tool")));

        let found = find_executable_in(
            "bench-tool",
            Some(env::join_paths([second.path(), first.path()]).unwrap().as_os_str()),
            None,
        );
        assert_eq!(found, Some(second.path().join("bench-tool")));
    }
}
