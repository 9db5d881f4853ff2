//! Synchronization errors.
//!
//! These never abort a run; the synchronizer logs them and moves to the
//! next item.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SyncError {
    /// Create failed and no study material id is known for the subject
    #[error("No existing study material recorded for subject {subject_id}")]
    MissingRecord { subject_id: u64 },

    /// Request ceiling reached before a write could be issued
    #[error("Request budget exhausted ({used}/{ceiling})")]
    BudgetExhausted { used: u32, ceiling: u32 },

    /// A write request was rejected or failed in transit
    #[error("Write to {target} failed: {message}")]
    WriteFailed { target: String, message: String },
}
