//! Unified error types for WKFS Core.

use serde::Serialize;
use thiserror::Error;
use wkfs_client::ClientError;
use wkfs_types::{ConfigError, DatasetError};

/// Main error type for core operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// WaniKani API call failed.
    #[error("WaniKani API error: {0}")]
    Api(#[from] ClientError),

    /// Translation dataset could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging subscriber could not be installed.
    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for core operations.
pub type AppResult<T> = Result<T, AppError>;
