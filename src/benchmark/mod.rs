// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
//
// This file declares the benchmark module, which measures digest pipeline
// throughput once before the search to seed the completion estimate.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: runner

pub mod runner;

// Re-export key benchmark types and functions
pub use runner::{BenchmarkConfig, BenchmarkRunner, MIN_ELAPSED, benchmark};
