//! Foundation types for the benchmark harness utilities.
//!
//! This crate provides the error type, flushed output helpers, the
//! text/bytes `Payload`, child-process handles and executable discovery
//! shared by the helper crates.

pub mod error;
pub mod executable;
pub mod output_macros;
pub mod payload;
pub mod platform;
pub mod process;
pub mod tracing_init;

pub use bench_platform::ProcessSignal;
pub use error::{BenchError, Result};
pub use executable::{find_executable, find_executable_in};
pub use output_macros::print_out;
pub use payload::{decode, Payload};
pub use process::{
    kill_process, kill_process_default, run, run_captured, CapturedOutput, ChildProcess,
};
