use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};
use serde::Serialize;

/// Which entry point the timed loop exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `compute`, a fresh allocation per run.
    Alloc,
    /// `compute_into`, one reused buffer per worker.
    Buffer,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alloc" => Ok(Self::Alloc),
            "buffer" => Ok(Self::Buffer),
            other => bail!("unknown mode {other:?}, expected \"alloc\" or \"buffer\""),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub n: isize,
    pub runs: u64,
    pub workers: usize,
    pub mode: Mode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            n: parse_or(&lookup, "FIB_ARG", 15)?,
            runs: parse_or(&lookup, "FIB_RUNS", 10000)?,
            workers: parse_or(&lookup, "FIB_WORKERS", 1)?,
            mode: parse_or(&lookup, "FIB_MODE", Mode::Alloc)?,
        };
        if config.runs == 0 {
            bail!("FIB_RUNS must be at least 1");
        }
        if config.workers == 0 {
            bail!("FIB_WORKERS must be at least 1");
        }
        Ok(config)
    }
}

fn parse_or<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, var: &str, def: T) -> Result<T>
where
    <T as FromStr>::Err: Display,
{
    match lookup(var) {
        Some(s) => s
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("could not parse {var}={s:?}: {e}")),
        None => Ok(def),
    }
}
