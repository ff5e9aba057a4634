// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/partition.rs
// Version: 1.0.0
//
// This file splits the first-character range between workers. Every worker
// gets `(high - low) / total` values; the last one also takes the remainder.
//
// Tree Location:
// - src/search/partition.rs (static range assignment)
// - Depends on: core/types

use crate::core::error::{Result, SearchError};
use crate::core::types::{ALPHABET_HIGH, ALPHABET_LOW, SearchRange};

/// Partition of the full printable alphabet
pub fn partition(total_workers: u32, worker_index: u32) -> Result<SearchRange> {
    partition_bounds(total_workers, worker_index, ALPHABET_LOW, ALPHABET_HIGH)
}

/// Contiguous share `worker_index` (1-based) of `[low, high)`
pub fn partition_bounds(
    total_workers: u32,
    worker_index: u32,
    low: u16,
    high: u16,
) -> Result<SearchRange> {
    if total_workers == 0 {
        return Err(SearchError::invalid("total worker count must be at least 1"));
    }
    if worker_index == 0 || worker_index > total_workers {
        return Err(SearchError::invalid(format!(
            "worker index {} is outside 1..={}",
            worker_index, total_workers
        )));
    }
    if low >= high {
        return Err(SearchError::invalid(format!("empty bounds {}..{}", low, high)));
    }

    let span = (high - low) as u32;
    let width = span / total_workers;
    if width == 0 {
        // More workers than values: every partition but the last would be empty
        return Err(SearchError::invalid(format!(
            "{} workers cannot share {} values",
            total_workers, span
        )));
    }

    let start = low as u32 + (worker_index - 1) * width;
    let end = if worker_index == total_workers {
        high as u32
    } else {
        start + width
    };

    Ok(SearchRange {
        start: start as u16,
        end: end as u16,
    })
}

/// Width every non-terminal worker receives
pub fn partition_width(total_workers: u32, low: u16, high: u16) -> u32 {
    if total_workers == 0 {
        return 0;
    }
    (high.saturating_sub(low)) as u32 / total_workers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_worker_covers_everything() {
        assert_eq!(partition(1, 1).unwrap(), SearchRange::full());
    }

    #[test]
    fn test_three_workers() {
        assert_eq!(partition(3, 1).unwrap(), SearchRange { start: 32, end: 63 });
        assert_eq!(partition(3, 2).unwrap(), SearchRange { start: 63, end: 94 });
        assert_eq!(partition(3, 3).unwrap(), SearchRange { start: 94, end: 127 });
        assert_eq!(partition_width(3, 32, 127), 31);
    }

    #[test]
    fn test_too_many_workers() {
        assert!(partition(96, 1).is_err());
        assert!(partition(95, 95).is_ok());
    }
}
