// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of sha3run,
// located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod error;
pub mod keccak;
pub mod pipeline;
pub mod types;

// Re-export the most commonly used items
pub use error::SearchError;
pub use keccak::{HashMode, hash, keccak256};
pub use pipeline::{DigestPipeline, pipeline};
pub use types::{
    ALPHABET_HIGH, ALPHABET_LOW, ALPHABET_SIZE, Args, BenchmarkResult, DIGEST_LEN, Digest,
    Outcome, SearchRange, SearchReport,
};
