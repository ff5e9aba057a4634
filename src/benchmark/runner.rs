// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.2
//
// This file measures digest pipeline throughput before the search starts. The
// rate seeds the completion estimate and is discarded afterwards.

use crate::core::error::{Result, SearchError};
use crate::core::pipeline::DigestPipeline;
use crate::core::types::{BenchmarkResult, DEFAULT_BENCH_SAMPLES};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const LOG_TARGET: &str = "sha3run::runner";

/// Floor applied when the clock reports no elapsed time
pub const MIN_ELAPSED: Duration = Duration::from_micros(1);

/// Length of the benchmark input buffer
const BENCH_INPUT_LEN: usize = 5;

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub samples: u64,
    pub pipeline: DigestPipeline,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_BENCH_SAMPLES,
            pipeline: DigestPipeline::default(),
        }
    }
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(samples: u64) -> Self {
        Self {
            config: BenchmarkConfig {
                samples,
                ..BenchmarkConfig::default()
            },
        }
    }

    pub fn with_config(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<BenchmarkResult> {
        let samples = self.config.samples;
        if samples == 0 {
            return Err(SearchError::invalid("benchmark sample count must be at least 1"));
        }

        debug!(target: LOG_TARGET, "🧪 Benchmarking {} pipeline runs", samples);

        let pipeline = self.config.pipeline;
        let mut input = [0u8; BENCH_INPUT_LEN];
        let start_time = Instant::now();
        for i in 0..samples {
            input[0] = i as u8;
            black_box(pipeline.digest(black_box(&input)));
        }
        let mut elapsed = start_time.elapsed();

        if elapsed < MIN_ELAPSED {
            warn!(target: LOG_TARGET,
                "Benchmark clock reported {:?} for {} samples, using {:?}",
                elapsed, samples, MIN_ELAPSED
            );
            elapsed = MIN_ELAPSED;
        }

        let hashrate = samples as f64 / elapsed.as_secs_f64();
        info!(target: LOG_TARGET, "📊 Benchmark: {:.0} H/s over {:.3}s", hashrate, elapsed.as_secs_f64());

        Ok(BenchmarkResult {
            samples,
            elapsed,
            hashrate,
        })
    }
}

/// Measure pipeline throughput over `sample_count` runs
pub fn benchmark(sample_count: u64) -> Result<BenchmarkResult> {
    BenchmarkRunner::new(sample_count).run()
}

// Changelog:
// - v1.0.2: Floor zero elapsed time at 1µs so the rate stays finite.
// - v1.0.1: black_box the input and digest so the loop is not optimised away.
// - v1.0.0: Single-threaded pipeline benchmark.
