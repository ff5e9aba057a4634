// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/mod.rs
// Version: 1.1.0
//
// This file is the module declaration for the search functionality of sha3run,
// located in the search subdirectory. It declares submodules and re-exports
// key types for use throughout the project.
//
// Tree Location:
// - src/search/mod.rs (search module entry point)
// - Submodules: partition, enumerator, controller, workers

pub mod controller;
pub mod enumerator;
pub mod partition;
pub mod workers;

// Re-export key types for convenience
pub use controller::{search, search_with_stop};
pub use enumerator::{Candidates, Odometer, enumerate, expected_count, next_candidate};
pub use partition::{partition, partition_bounds, partition_width};
pub use workers::search_parallel;

// Changelog:
// - v1.1.0: Added workers submodule for in-process threads.
// - v1.0.0: Initial search module with partition, enumerator and controller.
