//! Synonym list merging.
//!
//! WaniKani stores at most [`MAX_SYNONYMS`](super::MAX_SYNONYMS) meaning
//! synonyms per subject. Both the translated candidates and the merged list
//! are truncated from the front, so later entries always win.

mod merge;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests;
#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests_truncation;

pub use merge::{keep_last, merge_synonyms};
