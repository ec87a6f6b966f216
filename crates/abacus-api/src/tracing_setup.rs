//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either the
//! human-readable or the JSON formatter. Output goes to stderr so that the
//! `calc` command's stdout carries only the result.

use anyhow::anyhow;
use tracing::{Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the filter: `RUST_LOG` (when set) wins over the configured directives.
pub fn build_filter(configured: &str, env_override: Option<String>) -> anyhow::Result<EnvFilter> {
    let directives = env_override.filter(|value| !value.trim().is_empty());
    let filter = match directives {
        Some(value) => EnvFilter::try_new(value)?,
        None => EnvFilter::try_new(configured)?,
    };
    Ok(filter)
}

/// Subscriber for the window before the configuration is loaded, so that
/// warnings raised while loading it are not lost. Warnings and errors only.
pub fn bootstrap_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(make_writer)
        .finish()
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(&config.filter, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    info!(format = ?config.format, "Tracing initialized");
    Ok(())
}
