use std::hint::black_box;

use fib_sequence::{compute, compute_into};
use rayon::prelude::*;
use tracing::warn;

use crate::config::{Config, Mode};

/// The timed loop plus whatever it needs allocated up front.
pub struct Workload {
    config: Config,
    /// One `n + 1` buffer per worker in [`Mode::Buffer`], empty otherwise.
    buffers: Vec<Vec<u64>>,
}

impl Workload {
    pub fn prepare(config: &Config) -> Self {
        let buffers = match config.mode {
            Mode::Alloc => Vec::new(),
            Mode::Buffer => {
                let len = config.n.max(0).unsigned_abs() + 1;
                vec![vec![0u64; len]; config.workers]
            }
        };
        Self {
            config: *config,
            buffers,
        }
    }

    pub fn buffers(&self) -> usize {
        self.buffers.len()
    }

    /// Calls the computation `runs` times on the current rayon pool and
    /// returns how many calls failed.
    pub fn run(&mut self) -> u64 {
        let n = self.config.n;
        let runs = self.config.runs;
        let failed = match self.config.mode {
            Mode::Alloc => (0..runs)
                .into_par_iter()
                .filter(|&run| match compute(black_box(n)) {
                    Ok(seq) => {
                        black_box(seq);
                        false
                    }
                    Err(err) => {
                        warn!(run, %err, "compute failed");
                        true
                    }
                })
                .count(),
            Mode::Buffer => {
                let workers = self.buffers.len() as u64;
                let (share, extra) = (runs / workers, runs % workers);
                self.buffers
                    .par_iter_mut()
                    .enumerate()
                    .map(|(worker, buf)| {
                        let worker = worker as u64;
                        let first = worker * share + worker.min(extra);
                        let count = share + u64::from(worker < extra);
                        (first..first + count)
                            .filter(|&run| match compute_into(black_box(n), buf) {
                                Ok(()) => {
                                    black_box(&buf[..]);
                                    false
                                }
                                Err(err) => {
                                    warn!(run, worker, %err, "compute_into failed");
                                    true
                                }
                            })
                            .count()
                    })
                    .sum()
            }
        };
        failed as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(n: isize, runs: u64, mode: Mode) -> Config {
        Config {
            n,
            runs,
            workers: 2,
            mode,
        }
    }

    fn run_on_pool(config: &Config) -> u64 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .unwrap();
        let mut workload = Workload::prepare(config);
        pool.install(|| workload.run())
    }

    #[test]
    fn test_buffers_allocated_up_front() {
        assert_eq!(Workload::prepare(&config(15, 64, Mode::Buffer)).buffers(), 2);
        assert_eq!(Workload::prepare(&config(15, 64, Mode::Alloc)).buffers(), 0);

        let mut workload = Workload::prepare(&config(15, 10000, Mode::Buffer));
        workload.run();
        assert_eq!(workload.buffers(), 2);
        for buf in &workload.buffers {
            assert_eq!(buf.len(), 16);
            assert_eq!(buf[15], 610);
        }
    }

    #[test]
    fn test_runs_cleanly() {
        assert_eq!(run_on_pool(&config(15, 64, Mode::Alloc)), 0);
        assert_eq!(run_on_pool(&config(15, 64, Mode::Buffer)), 0);
        assert_eq!(run_on_pool(&config(200, 64, Mode::Buffer)), 0);
    }

    #[test]
    fn test_counts_failures() {
        assert_eq!(run_on_pool(&config(-1, 64, Mode::Alloc)), 64);
        // uneven split: 33 + 32
        assert_eq!(run_on_pool(&config(-1, 65, Mode::Buffer)), 65);
        assert_eq!(run_on_pool(&config(-1, 1, Mode::Buffer)), 1);
    }
}
