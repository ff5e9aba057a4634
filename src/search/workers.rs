// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/workers.rs
// Version: 1.0.1
//
// This file runs one instance's range on several OS threads. The range is
// re-partitioned so every thread owns a disjoint slice; the only shared state
// is a stop flag raised by the first thread that finds a match.
//
// Tree Location:
// - src/search/workers.rs (in-process worker pool)
// - Depends on: search/partition, search/controller

use crate::core::error::{Result, SearchError};
use crate::core::pipeline::DigestPipeline;
use crate::core::types::{Digest, Outcome, SearchRange, SearchReport};
use crate::search::controller::{search, search_with_stop};
use crate::search::partition::partition_bounds;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info};

const LOG_TARGET: &str = "sha3run::workers";

/// Search `range` with up to `threads` workers. One thread is the plain
/// single-threaded sweep.
pub fn search_parallel(
    range: SearchRange,
    length: usize,
    target: &Digest,
    threads: usize,
) -> Result<SearchReport> {
    let thread_count = effective_threads(range, threads);
    if thread_count == 1 {
        return search(range, length, target);
    }

    info!(target: LOG_TARGET, "🧵 Splitting {} across {} threads", range, thread_count);

    let started = Instant::now();
    let pipeline = DigestPipeline::default();
    let should_stop = Arc::new(AtomicBool::new(false));
    let (report_tx, report_rx): (
        Sender<(u32, Result<SearchReport>)>,
        Receiver<(u32, Result<SearchReport>)>,
    ) = mpsc::channel();

    let mut handles = Vec::with_capacity(thread_count as usize);
    for worker in 1..=thread_count {
        let sub_range = partition_bounds(thread_count, worker, range.start, range.end)?;
        let should_stop = Arc::clone(&should_stop);
        let report_tx = report_tx.clone();
        let target = *target;

        debug!(target: LOG_TARGET, "Thread {}: range {}", worker, sub_range);
        let handle = thread::spawn(move || {
            let report = search_with_stop(sub_range, length, &target, &pipeline, &should_stop);
            if matches!(&report, Ok(r) if r.outcome.is_found()) {
                should_stop.store(true, Ordering::Relaxed);
            }
            let _ = report_tx.send((worker, report));
        });
        handles.push((worker, handle));
    }
    drop(report_tx);

    join_workers(handles, &should_stop)?;

    let mut reports: Vec<(u32, SearchReport)> = Vec::with_capacity(thread_count as usize);
    for (worker, report) in report_rx.iter() {
        reports.push((worker, report?));
    }
    reports.sort_by_key(|(worker, _)| *worker);

    Ok(merge_reports(reports, started.elapsed()))
}

/// Join every worker, even after one has panicked, so none outlives the call.
/// Reports the first panicked worker.
fn join_workers(handles: Vec<(u32, JoinHandle<()>)>, should_stop: &AtomicBool) -> Result<()> {
    let mut panicked = None;
    for (worker, handle) in handles {
        if handle.join().is_err() {
            error!(target: LOG_TARGET, "Thread {} panicked", worker);
            should_stop.store(true, Ordering::Relaxed);
            panicked.get_or_insert(worker);
        } else {
            debug!(target: LOG_TARGET, "Thread {} joined", worker);
        }
    }
    match panicked {
        Some(worker) => Err(SearchError::WorkerPanic { worker }),
        None => Ok(()),
    }
}

/// Threads actually used: at least one, at most one per first-byte value
pub fn effective_threads(range: SearchRange, requested: usize) -> u32 {
    requested.clamp(1, range.width() as usize) as u32
}

/// First match in worker order wins; otherwise the range is exhausted and the
/// last candidate is the terminal worker's
fn merge_reports(reports: Vec<(u32, SearchReport)>, elapsed: std::time::Duration) -> SearchReport {
    let visited = reports.iter().map(|(_, r)| r.visited).sum();

    let found = reports
        .iter()
        .find(|(_, r)| r.outcome.is_found())
        .map(|(_, r)| r.outcome.clone());

    let outcome = match found {
        Some(outcome) => outcome,
        None => {
            let last = reports
                .last()
                .map(|(_, r)| match &r.outcome {
                    Outcome::Exhausted { last } | Outcome::Cancelled { last } => last.clone(),
                    Outcome::Found { candidate, .. } => candidate.clone(),
                })
                .unwrap_or_default();
            Outcome::Exhausted { last }
        }
    };

    SearchReport {
        outcome,
        visited,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_threads() {
        let narrow = SearchRange::new(65, 67).unwrap();
        assert_eq!(effective_threads(narrow, 8), 2);
        assert_eq!(effective_threads(narrow, 0), 1);
        assert_eq!(effective_threads(SearchRange::full(), 4), 4);
    }

    #[test]
    fn test_join_waits_for_siblings_after_panic() {
        let should_stop = Arc::new(AtomicBool::new(false));
        let sibling_done = Arc::new(AtomicBool::new(false));

        let failing = thread::spawn(|| panic!("worker failure"));
        let sibling = {
            let sibling_done = Arc::clone(&sibling_done);
            thread::spawn(move || {
                thread::sleep(std::time::Duration::from_millis(50));
                sibling_done.store(true, Ordering::SeqCst);
            })
        };

        let result = join_workers(vec![(1, failing), (2, sibling)], &should_stop);

        assert_eq!(result, Err(SearchError::WorkerPanic { worker: 1 }));
        assert!(sibling_done.load(Ordering::SeqCst));
        assert!(should_stop.load(Ordering::Relaxed));
    }
}

// Changelog:
// - v1.0.1: Every worker is joined before a panic is reported.
// - v1.0.0: Thread pool over a re-partitioned instance range.
