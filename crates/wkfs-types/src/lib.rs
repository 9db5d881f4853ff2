//! # WKFS Types
//!
//! Core types, models, and error definitions for WaniKani French Synonyms.
//!
//! - **`error`** - Typed error hierarchy for datasets, configuration and sync
//! - **`models`** - Domain models (study items, translations, synonym merge, reports)
//!
//! ## Architecture Role
//!
//! `wkfs-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                 wkfs-types (this crate)
//!                        │
//!             ┌──────────┴──────────┐
//!             ▼                     ▼
//!        wkfs-client            wkfs-core
//!             │                     │
//!             └──────────┬──────────┘
//!                        ▼
//!                     wkfs-cli
//! ```

pub mod error;
pub mod models;

pub use error::{ConfigError, DatasetError, SyncError};

pub use models::{
    merge_synonyms, keep_last, AppConfig, ItemFilter, StudyItem, StudyMaterialRef, SubjectKind,
    SyncOutcome, SyncReport, TranslationMap, TranslationSet, MAX_SYNONYMS, REQUEST_CEILING,
};
