//! File name pattern expansion and file utilities.
//!
//! Benchmark definitions reference their input files through patterns
//! relative to the definition file, which may contain `~`, environment
//! variables and shell wildcards.

use bench_core::Result;
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Lexically normalize a path: drop `.` segments and fold `dir/..` pairs.
///
/// The filesystem is not consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` of the root is the root itself
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Expand `~` and `$VAR` / `${VAR}` references. Unknown variables stay as written.
pub fn expand_user_and_vars(input: &str) -> Cow<'_, str> {
    shellexpand::full_with_context_no_errors(
        input,
        || {
            bench_platform::platform::home_dir()
                .ok()
                .and_then(|home| home.to_str().map(str::to_string))
        },
        |name| std::env::var(name).ok(),
    )
}

/// Expand a file name pattern containing wildcards, environment variables etc.
///
/// `pattern` is resolved against `base_dir` unless it is absolute. Returns the
/// matching paths, possibly none; an invalid pattern also yields no matches.
pub fn expand_file_name_pattern(pattern: &str, base_dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let joined = normalize_path(&base_dir.as_ref().join(pattern));
    let joined = joined.to_string_lossy();
    let expanded = expand_user_and_vars(&joined);

    match glob::glob(&expanded) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            debug!(pattern = %expanded, error = %e, "invalid file name pattern");
            Vec::new()
        }
    }
}

/// Append the contents of `source` to `target`, creating `target` if needed.
pub fn append_file_to_file(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let mut source = File::open(source.as_ref())?;
    let mut target = OpenOptions::new()
        .create(true)
        .append(true)
        .open(target.as_ref())?;
    io::copy(&mut source, &mut target)?;
    Ok(())
}

/// The deepest directory containing all `paths`, compared by whole path
/// components. `None` for an empty list.
pub fn common_base_dir<P: AsRef<Path>>(paths: &[P]) -> Option<PathBuf> {
    // a root has no parent and is its own base
    let mut parents = paths.iter().map(|path| {
        let path = path.as_ref();
        path.parent().unwrap_or(path)
    });

    let mut common: Vec<Component<'_>> = parents.next()?.components().collect();
    for parent in parents {
        let shared = common
            .iter()
            .zip(parent.components())
            .take_while(|(a, b)| **a == *b)
            .count();
        common.truncate(shared);
    }

    Some(common.iter().collect())
}
