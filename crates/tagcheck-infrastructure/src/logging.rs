//! Structured logging with tracing
//!
//! Diagnostics go to stderr so the test report on stdout stays readable.
//! `TAGCHECK_LOG` takes an `EnvFilter` directive and wins over the
//! configured level.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use std::path::Path;
use tagcheck_domain::error::{Error, Result};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log which configuration file was applied
///
/// Call after [`init_logging`]; earlier events have no subscriber.
pub fn log_config_loaded(config_path: &Path) {
    info!("Configuration loaded from {}", config_path.display());
}
