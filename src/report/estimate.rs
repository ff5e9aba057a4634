// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/estimate.rs
// Version: 1.0.0
//
// This file derives the planned workload of a partition and how long it should
// take at the benchmarked rate. The estimate is advisory only.

use crate::core::types::{ALPHABET_SIZE, SearchRange};

/// Planned work for one partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub expected_count: f64,
    pub eta_seconds: f64,
}

impl Estimate {
    pub fn eta_minutes(&self) -> f64 {
        self.eta_seconds / 60.0
    }
}

/// `expected = width * 95^(length-1)`, `eta = expected / rate`
pub fn estimate(range: SearchRange, length: usize, rate: f64) -> Estimate {
    let free = length.saturating_sub(1) as i32;
    let expected_count = range.width() as f64 * (ALPHABET_SIZE as f64).powi(free);
    let eta_seconds = if rate > 0.0 {
        expected_count / rate
    } else {
        f64::INFINITY
    };
    Estimate {
        expected_count,
        eta_seconds,
    }
}
