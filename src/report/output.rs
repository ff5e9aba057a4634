// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/output.rs
// Version: 1.0.1
//
// This file formats the lines an instance prints to stdout. Callers parse this
// text to learn the outcome, so the wording and order are fixed.
//
// Tree Location:
// - src/report/output.rs (stdout report lines)
// - Depends on: core/types, hex

use crate::core::types::{BenchmarkResult, Outcome, SearchRange};
use crate::report::estimate::Estimate;
use std::time::Duration;

pub fn bench_line(result: &BenchmarkResult) -> String {
    format!("Bench: {} hashes per second", result.hashrate as u64)
}

pub fn running_line(worker_index: u32, total_workers: u32) -> String {
    format!("Running thread {} of {}", worker_index, total_workers)
}

pub fn width_line(width: u32) -> String {
    format!("ThreadSize: {}", width)
}

pub fn bounds_lines(range: SearchRange) -> [String; 2] {
    [format!("Start: {}", range.start), format!("End: {}", range.end)]
}

pub fn estimate_lines(estimate: &Estimate) -> [String; 2] {
    [
        format!("Number of hashes to check: {:.6}", estimate.expected_count),
        format!("Estimated time to complete: {:.6} minutes", estimate.eta_minutes()),
    ]
}

pub fn start_lines(length: usize, first: &[u8]) -> [String; 2] {
    [
        format!("Bruteforcing for {} characters", length),
        format!("Starting from ({})", candidate_text(first)),
    ]
}

/// Found block (candidate then hex digest) or the exhaustion line
pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Found { candidate, digest } => vec![
            format!("Found! ({})", candidate_text(candidate)),
            hex::encode(digest),
        ],
        Outcome::Exhausted { last } | Outcome::Cancelled { last } => {
            vec![format!("Nothing found... Ended at ({})", candidate_text(last))]
        }
    }
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Elapsed: {:.6} seconds", elapsed.as_secs_f64())
}

/// Candidate bytes as characters; every byte is printable ASCII
pub fn candidate_text(candidate: &[u8]) -> String {
    candidate.iter().map(|&b| b as char).collect()
}


// Changelog:
// - v1.0.1: Report the real range width for the terminal worker's hash count.
// - v1.0.0: Fixed-order report lines.
