// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/controller.rs
// Version: 1.1.0
//
// This file contains the search hot loop: digest every candidate of a range in
// odometer order and stop at the first one matching the target.
//
// Tree Location:
// - src/search/controller.rs (search controller)
// - Depends on: core/pipeline, search/enumerator

use crate::core::error::Result;
use crate::core::pipeline::DigestPipeline;
use crate::core::types::{Digest, Outcome, SearchRange, SearchReport};
use crate::search::enumerator::Odometer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

const LOG_TARGET: &str = "sha3run::controller";

/// Candidates between two polls of the stop flag
const STOP_POLL_INTERVAL: u64 = 4096;

/// Search `range` with the double Keccak-256 pipeline
pub fn search(range: SearchRange, length: usize, target: &Digest) -> Result<SearchReport> {
    let odometer = Odometer::new(range, length)?;
    Ok(run(odometer, &DigestPipeline::default(), target, None))
}

/// Search that gives up when `stop` is raised, reporting `Outcome::Cancelled`
pub fn search_with_stop(
    range: SearchRange,
    length: usize,
    target: &Digest,
    pipeline: &DigestPipeline,
    stop: &AtomicBool,
) -> Result<SearchReport> {
    let odometer = Odometer::new(range, length)?;
    Ok(run(odometer, pipeline, target, Some(stop)))
}

/// Drive an odometer from its current position to a terminal outcome
pub fn run(
    mut odometer: Odometer,
    pipeline: &DigestPipeline,
    target: &Digest,
    stop: Option<&AtomicBool>,
) -> SearchReport {
    let started = Instant::now();
    let mut visited = 0u64;

    debug!(target: LOG_TARGET,
        "Searching {} from ({})",
        odometer.range(),
        String::from_utf8_lossy(odometer.current())
    );

    loop {
        let digest = pipeline.digest(odometer.current());
        visited += 1;

        if digest == *target {
            info!(target: LOG_TARGET, "💎 Match after {} candidates", visited);
            return SearchReport {
                outcome: Outcome::Found {
                    candidate: odometer.current().to_vec(),
                    digest,
                },
                visited,
                elapsed: started.elapsed(),
            };
        }

        if let Some(stop) = stop {
            if visited % STOP_POLL_INTERVAL == 0 && stop.load(Ordering::Relaxed) {
                debug!(target: LOG_TARGET, "Stop requested after {} candidates", visited);
                return SearchReport {
                    outcome: Outcome::Cancelled {
                        last: odometer.current().to_vec(),
                    },
                    visited,
                    elapsed: started.elapsed(),
                };
            }
        }

        if !odometer.advance() {
            break;
        }
    }

    debug!(target: LOG_TARGET, "Range {} exhausted after {} candidates", odometer.range(), visited);
    SearchReport {
        outcome: Outcome::Exhausted {
            last: odometer.current().to_vec(),
        },
        visited,
        elapsed: started.elapsed(),
    }
}

// Changelog:
// - v1.1.0: Added stop flag polling for the in-process worker pool.
// - v1.0.0: Single-threaded first-match search with visited counter.
