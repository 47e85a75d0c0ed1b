//! Output helpers for the harness.
//!
//! Diagnostics written here are flushed immediately so that they stay
//! ordered with the output of subprocesses sharing the same terminal.

use std::io::{self, Write};

/// Write `value` followed by `end` to stdout and flush.
///
/// Output errors (closed pipe, full disk) are ignored; diagnostics are best-effort.
pub fn print_out(value: &str, end: &str) {
    let _ = write_flushed(value, end);
}

fn write_flushed(value: &str, end: &str) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    handle.write_all(value.as_bytes())?;
    handle.write_all(end.as_bytes())?;
    handle.flush()
}

#[macro_export]
macro_rules! bench_out {
    () => {
        $crate::output_macros::print_out("", "\n");
    };
    ($($arg:tt)*) => {
        $crate::output_macros::print_out(&format!($($arg)*), "\n");
    };
}

#[macro_export]
macro_rules! bench_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    }
}
