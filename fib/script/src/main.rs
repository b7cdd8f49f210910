mod config;
mod logger;
mod runner;

use anyhow::{Context, Result};
use fib_sequence::compute;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, info_span};

use crate::config::{Config, Mode};

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    mode: Mode,
    n: isize,
    runs: u64,
    workers: usize,
    failures: u64,
    setup_secs: f32,
    total_secs: f32,
    avg_secs: f64,
    runs_per_sec: f64,
}

fn main() -> Result<()> {
    logger::setup_logger()?;
    let config = Config::from_env()?;
    info!(?config, "starting");

    // setup
    let it = Instant::now();
    let (seq, pool, mut workload) = {
        let _span = info_span!("setup").entered();
        let seq = compute(config.n).with_context(|| format!("FIB_ARG={}", config.n))?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .context("building worker pool")?;
        let workload = runner::Workload::prepare(&config);
        (seq, pool, workload)
    };
    let setup_secs = it.elapsed().as_secs_f32();

    // timed runs
    let it = Instant::now();
    let failures = {
        let _span = info_span!("run", runs = config.runs, workers = config.workers).entered();
        pool.install(|| workload.run())
    };
    let elapsed = it.elapsed();
    let total_secs = elapsed.as_secs_f32();

    eprintln!("fib({}) = {}", config.n, seq[seq.max_index()]);

    let avg_secs = elapsed.as_secs_f64() / config.runs as f64;
    let stats = Stats {
        program: "fib-sequence",
        mode: config.mode,
        n: config.n,
        runs: config.runs,
        workers: config.workers,
        failures,
        setup_secs,
        total_secs,
        avg_secs,
        runs_per_sec: if avg_secs > 0.0 { avg_secs.recip() } else { 0.0 },
    };

    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
