//! Minimal WaniKani API v2 client.
//!
//! Covers the endpoints the synonym synchronizer needs: the current user,
//! subjects, assignments and study materials (list, create, replace).
//! Collections are followed through `pages.next_url` until exhausted.

mod client;
mod error;
mod types;

pub use client::WaniKaniClient;
pub use error::ClientError;
pub use types::*;
