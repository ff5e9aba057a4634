// SHA3run - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.1.0
//
// Entry point: benchmark the pipeline, then sweep this instance's partition.
// Usage: sha3run <THREADS> <THREAD> [--length N] [--target HEX] [--threads N]

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use sha3run::{
    SearchError,
    benchmark::benchmark,
    core::{DigestPipeline, HashMode, types::Args},
    help::display_usage,
    report::{estimate, output},
    search::{Odometer, partition, partition_width, search_parallel},
    utils::FormatUtils,
};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "sha3run::main";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                display_usage();
                std::process::exit(1);
            }
        },
    };

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        display_usage();
        std::process::exit(1);
    }

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&args) {
        match err.downcast_ref::<SearchError>() {
            Some(search_err) if search_err.is_usage_error() => {
                eprintln!("❌ Error: {}", search_err);
                display_usage();
                std::process::exit(1);
            }
            _ => {
                error!(target: LOG_TARGET, "💥 Fatal: {:#}", err);
                std::process::exit(2);
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let target = args.target_digest()?;
    let pipeline =
        DigestPipeline::new(256, HashMode::Keccak).context("digest pipeline unavailable")?;
    info!(target: LOG_TARGET,
        "🚀 sha3run: {}-bit {:?} pipeline, target {}",
        pipeline.bits(),
        pipeline.mode(),
        hex::encode(target)
    );

    let bench = benchmark(args.bench_samples)?;
    println!("{}", output::bench_line(&bench));
    info!(target: LOG_TARGET, "⚡ Pipeline rate: {}", FormatUtils::format_hashrate(bench.hashrate));

    println!("{}", output::running_line(args.worker_index, args.total_workers));
    let range = partition(args.total_workers, args.worker_index)?;
    let width = partition_width(
        args.total_workers,
        sha3run::core::ALPHABET_LOW,
        sha3run::core::ALPHABET_HIGH,
    );
    println!("{}", output::width_line(width));
    for line in output::bounds_lines(range) {
        println!("{}", line);
    }

    // Estimate assumes one thread at the benchmarked rate
    let plan = estimate(range, args.length, bench.hashrate);
    for line in output::estimate_lines(&plan) {
        println!("{}", line);
    }
    info!(target: LOG_TARGET,
        "📈 {} candidates, ETA {}",
        FormatUtils::format_number(plan.expected_count),
        FormatUtils::format_eta(plan.eta_seconds)
    );

    let first = Odometer::new(range, args.length)?;
    for line in output::start_lines(args.length, first.current()) {
        println!("{}", line);
    }

    let started = Instant::now();
    let report = search_parallel(range, args.length, &target, args.thread_count())?;
    for line in output::outcome_lines(&report.outcome) {
        println!("{}", line);
    }
    let elapsed = started.elapsed();
    println!("{}", output::elapsed_line(elapsed));

    info!(target: LOG_TARGET,
        "✅ Visited {} candidates in {} ({})",
        report.visited,
        FormatUtils::format_duration(elapsed),
        if report.outcome.is_found() { "found" } else { "exhausted" }
    );

    Ok(())
}

// Changelog:
// - v1.1.0: Added --threads for in-process workers.
// - v1.0.0: Benchmark then single-threaded sweep of one partition.
