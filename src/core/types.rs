// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
//
// This file defines core data structures for sha3run, located in the core
// subdirectory. It includes the command-line arguments, the alphabet bounds,
// search ranges, digests and the search outcome types.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, hex

use crate::core::error::{Result, SearchError};
use crate::search::partition::partition;
use clap::Parser;
use std::fmt;
use std::time::Duration;

/// First printable ASCII value (space)
pub const ALPHABET_LOW: u16 = 32;

/// One past the last printable ASCII value ('~' is 126)
pub const ALPHABET_HIGH: u16 = 127;

/// Number of symbols each free position iterates over
pub const ALPHABET_SIZE: u64 = (ALPHABET_HIGH - ALPHABET_LOW) as u64;

pub const DIGEST_LEN: usize = 32;

pub const DEFAULT_LENGTH: usize = 5;

pub const DEFAULT_BENCH_SAMPLES: u64 = 1_000_000;

/// Built-in target digest
pub const DEFAULT_TARGET_HEX: &str =
    "5746fe8ae2bf9fb24bcdf4972ea78c0211211e23c376461956d46d8d8a6519ba";

pub type Digest = [u8; DIGEST_LEN];

/// Command-line arguments for sha3run
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sha3run",
    version,
    about = "Partitioned brute-force preimage search over double Keccak-256",
    long_about = "sha3run enumerates every printable-ASCII candidate of a fixed length and\n\
                  stops when keccak256(keccak256(candidate)) equals the target digest.\n\n\
                  The first character range is split between independent instances:\n\
                  start one instance per worker index, by hand, on as many machines as you like.\n\n\
                  Examples:\n\
                    Whole space on one machine: sha3run 1 1\n\
                    Second of eight instances:  sha3run 8 2\n\
                    Shorter candidates:         sha3run 4 1 --length 4 --threads 0"
)]
pub struct Args {
    /// Total number of instances the search is split into
    #[arg(value_name = "THREADS")]
    pub total_workers: u32,

    /// 1-based index of this instance
    #[arg(value_name = "THREAD")]
    pub worker_index: u32,

    /// Candidate length in bytes
    #[arg(
        long,
        default_value_t = DEFAULT_LENGTH,
        value_name = "LEN",
        help = "Candidate length in characters"
    )]
    pub length: usize,

    /// Target digest, 64 hex characters
    #[arg(
        long,
        default_value = DEFAULT_TARGET_HEX,
        value_name = "HEX",
        help = "Target digest as 64 hex characters"
    )]
    pub target: String,

    /// Number of pipeline runs for the startup throughput measurement
    #[arg(
        long,
        default_value_t = DEFAULT_BENCH_SAMPLES,
        value_name = "COUNT",
        help = "Benchmark sample count"
    )]
    pub bench_samples: u64,

    /// Worker threads inside this instance
    /// 0 = auto-detect, 1 = single-threaded sweep
    #[arg(
        short,
        long,
        default_value = "1",
        value_name = "COUNT",
        help = "Number of CPU threads inside this instance (0 = auto-detect)"
    )]
    pub threads: usize,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.total_workers == 0 {
            return Err(SearchError::invalid("total worker count must be at least 1"));
        }
        if self.worker_index == 0 || self.worker_index > self.total_workers {
            return Err(SearchError::invalid(format!(
                "worker index {} is outside 1..={}",
                self.worker_index, self.total_workers
            )));
        }
        if self.length == 0 {
            return Err(SearchError::invalid("candidate length must be at least 1"));
        }
        if self.bench_samples == 0 {
            return Err(SearchError::invalid("benchmark sample count must be at least 1"));
        }
        self.target_digest()?;
        // More workers than first-byte values is rejected before any work starts
        partition(self.total_workers, self.worker_index)?;
        Ok(())
    }

    pub fn target_digest(&self) -> Result<Digest> {
        parse_digest(&self.target)
    }

    /// Resolved in-process thread count
    pub fn thread_count(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}

/// Parse a 64-character hex string into a digest
pub fn parse_digest(hex_str: &str) -> Result<Digest> {
    let bytes = hex::decode(hex_str.trim())
        .map_err(|e| SearchError::invalid(format!("target is not valid hex: {}", e)))?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        SearchError::invalid(format!(
            "target must be {} bytes, got {}",
            DIGEST_LEN,
            b.len()
        ))
    })
}

/// Half-open bounds [start, end) on the first candidate byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    pub start: u16,
    pub end: u16,
}

impl SearchRange {
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start >= end {
            return Err(SearchError::invalid(format!("empty range {}..{}", start, end)));
        }
        if start < ALPHABET_LOW || end > ALPHABET_HIGH {
            return Err(SearchError::invalid(format!(
                "range {}..{} leaves the printable alphabet",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The whole alphabet
    pub fn full() -> Self {
        Self {
            start: ALPHABET_LOW,
            end: ALPHABET_HIGH,
        }
    }

    pub fn width(&self) -> u16 {
        self.end - self.start
    }

    pub fn contains(&self, byte: u8) -> bool {
        (self.start..self.end).contains(&(byte as u16))
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Terminal state of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found { candidate: Vec<u8>, digest: Digest },
    Exhausted { last: Vec<u8> },
    /// Stopped by a sibling worker before finishing its range
    Cancelled { last: Vec<u8> },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }
}

/// Result of one search call
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Candidates digested
    pub visited: u64,
    pub elapsed: Duration,
}

/// Throughput measured at startup; not persisted
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkResult {
    pub samples: u64,
    pub elapsed: Duration,
    /// Pipeline runs per second, always > 0
    pub hashrate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(total: u32, index: u32) -> Args {
        let (total, index) = (total.to_string(), index.to_string());
        Args::parse_from(["sha3run", total.as_str(), index.as_str()])
    }

    #[test]
    fn test_defaults() {
        let a = args(8, 2);
        assert_eq!(a.length, DEFAULT_LENGTH);
        assert_eq!(a.threads, 1);
        assert_eq!(a.bench_samples, DEFAULT_BENCH_SAMPLES);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_index() {
        assert!(args(3, 0).validate().is_err());
        assert!(args(3, 4).validate().is_err());
        assert!(args(0, 1).validate().is_err());
        assert!(args(96, 1).validate().is_err());
        assert!(args(95, 95).validate().is_ok());
    }

    #[test]
    fn test_parse_digest() {
        let d = parse_digest(DEFAULT_TARGET_HEX).unwrap();
        assert_eq!(d[0], 0x57);
        assert_eq!(d[31], 0xba);
        assert!(parse_digest("abcd").is_err());
        assert!(parse_digest("zz").is_err());
    }

    #[test]
    fn test_range_bounds() {
        assert!(SearchRange::new(40, 40).is_err());
        assert!(SearchRange::new(31, 40).is_err());
        assert!(SearchRange::new(32, 128).is_err());
        assert_eq!(SearchRange::full().width(), 95);
    }
}

// Changelog:
// - v1.1.0: Added --threads and the Cancelled outcome for the worker pool.
// - v1.0.0: Initial types: Args, SearchRange, Outcome, BenchmarkResult.
