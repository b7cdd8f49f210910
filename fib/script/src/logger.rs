use std::{str::FromStr, sync::Once};

use anyhow::{bail, Result};
use tracing_forest::{printer::PrettyPrinter, ForestLayer};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoggerKind {
    Flat,
    Forest,
}

impl FromStr for LoggerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(Self::Flat),
            "forest" => Ok(Self::Forest),
            other => bail!("invalid logger type: {other}"),
        }
    }
}

/// Installs the global subscriber once. Everything goes to stderr; stdout is
/// reserved for the stats line.
///
/// `RUST_LOG` sets the filter (default `off`), `RUST_LOGGER` picks `flat`
/// (default) or `forest` output.
pub fn setup_logger() -> Result<()> {
    let kind = match std::env::var("RUST_LOGGER") {
        Ok(s) => s.parse()?,
        Err(_) => LoggerKind::Flat,
    };

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        match kind {
            LoggerKind::Forest => {
                Registry::default()
                    .with(env_filter)
                    .with(ForestLayer::from(
                        PrettyPrinter::new().writer(std::io::stderr),
                    ))
                    .init();
            }
            LoggerKind::Flat => {
                tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_file(false)
                    .with_target(false)
                    .with_thread_names(false)
                    .with_writer(std::io::stderr)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .finish()
                    .init();
            }
        }
    });
    Ok(())
}
