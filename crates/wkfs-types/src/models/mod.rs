//! Core domain models.

mod config;
mod report;
mod subject;
mod synonyms;
mod translation;

pub use config::{
    AppConfig, API_REVISION, DEFAULT_API_BASE_URL, DEFAULT_DATASET_BASE_URL, MAX_SYNONYMS,
    REQUEST_CEILING,
};
pub use report::{SyncOutcome, SyncReport};
pub use subject::{ItemFilter, StudyItem, StudyMaterialRef, SubjectKind};
pub use synonyms::{keep_last, merge_synonyms};
pub use translation::{TranslationMap, TranslationSet};
