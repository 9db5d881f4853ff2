//! Logging setup.
//!
//! One `tracing-subscriber` fmt layer filtered by an `EnvFilter` built from
//! the requested level (`info`, `wkfs_core=debug`, ...).

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber. Call once from `main`.
pub fn init_logging(directives: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| AppError::Logging(format!("invalid log filter {directives:?}: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
