// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/mod.rs
// Version: 1.0.0
//
// This file declares the report module: workload and ETA estimation plus the
// stdout lines of a run.
//
// Tree Location:
// - src/report/mod.rs (report module entry point)
// - Submodules: estimate, output

pub mod estimate;
pub mod output;

pub use estimate::{Estimate, estimate};
