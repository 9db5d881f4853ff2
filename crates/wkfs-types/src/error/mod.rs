//! Typed error definitions.
//!
//! Every error here is serializable so it can be logged as structured data
//! and compared in tests.

mod config;
mod dataset;
mod sync;

pub use config::ConfigError;
pub use dataset::DatasetError;
pub use sync::SyncError;
