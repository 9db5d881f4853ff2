//! Translation dataset errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while retrieving the French translation datasets.
///
/// Any of these aborts the run: there is no partial-dataset fallback.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DatasetError {
    /// Host unreachable or transport failure
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Dataset host answered with a non-success status
    #[error("Dataset {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body is not a `{ slug: [string] }` JSON object
    #[error("Malformed dataset {url}: {message}")]
    Malformed { url: String, message: String },

    /// Base URL cannot be joined with a dataset file name
    #[error("Invalid dataset URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
}
