// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
//
// This file serves as the main library entry point for sha3run, located at the
// root of the source tree. It exports all public modules and types that the
// binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, search, benchmark, report, utils, help

pub mod benchmark;
pub mod core;
pub mod help;
pub mod report;
pub mod search;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchmarkRunner, benchmark};
pub use crate::core::{Digest, Outcome, SearchError, SearchRange, SearchReport, pipeline};
pub use crate::help::display_usage;
pub use crate::report::{Estimate, estimate};
pub use crate::search::{enumerate, partition, search, search_parallel};

pub type Result<T> = std::result::Result<T, SearchError>;

// Changelog:
// - v1.1.0: Exported search_parallel for the in-process worker pool.
// - v1.0.0: Library root with core, search, benchmark, report, utils and help.
