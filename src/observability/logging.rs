//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for hosts that don't bring their own
//! - Honor `RUST_LOG`, falling back to a caller-provided directive

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error returned when a global subscriber is already installed.
#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(#[from] tracing_subscriber::util::TryInitError);

/// Install a fmt subscriber filtered by `RUST_LOG` or `default_directive`.
pub fn init_logging(default_directive: &str) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::debug!(default_directive, "Logging initialized");
    Ok(())
}
