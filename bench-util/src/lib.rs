//! Helper functions for the benchmark harness
//!
//! This crate collects the small, independent utilities the harness calls
//! while preparing and running benchmarks: text and sequence helpers, XML
//! handling for benchmark definitions and results, file name pattern
//! expansion, a best-effort git commit of result files and energy counter
//! sampling. Process and output helpers from `bench-core` are re-exported so
//! callers depend on this crate alone.

pub mod energy;
pub mod file_system;
pub mod git;
pub mod text;
pub mod xml;

// Re-export from bench-core for a single entry point
pub use bench_core::platform::{force_linux_path, is_windows};
pub use bench_core::tracing_init;
pub use bench_core::{
    bench_out, decode, find_executable, find_executable_in, kill_process, kill_process_default,
    print_out, BenchError, CapturedOutput, ChildProcess, Payload, ProcessSignal, Result,
};

pub use energy::{get_energy, EnergyDomain, EnergyReader, EnergySample};
pub use file_system::{append_file_to_file, common_base_dir, expand_file_name_pattern};
pub use git::{add_files_to_git_repository, CommitOutcome};
pub use text::{contains_any, flatten, format_number, is_code, is_comment, remove_all};
pub use xml::{
    get_copy_of_xml_elem, get_list_from_xml, get_options_from_xml, xml_to_string, Element,
    ElementRef,
};

/// Common prelude for harness modules
pub mod prelude {
    pub use crate::energy::{EnergyDomain, EnergyReader};
    pub use crate::xml::{Element, ElementRef};
    pub use bench_core::{BenchError, ProcessSignal, Result};
}
