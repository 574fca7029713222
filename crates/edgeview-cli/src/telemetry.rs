//! Logging setup.
//!
//! Everything goes to stderr so stdout carries only the rendered document.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::LogLevel;

/// Initialize tracing.
///
/// Priority for log level:
/// 1. `--log-level`
/// 2. `RUST_LOG`
/// 3. Default: warn
pub fn init(log_level: Option<LogLevel>) -> Result<()> {
    let filter_layer = match log_level {
        Some(level) => EnvFilter::new(level.as_tracing().as_str()),
        None => EnvFilter::builder()
            .with_default_directive(Level::WARN.into())
            .from_env_lossy(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(())
}
