//! French translation datasets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SubjectKind;

/// Slug → ordered French synonym candidates for one subject kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: HashMap<String, Vec<String>>,
}

impl TranslationMap {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(slug, synonyms)| {
                    (slug.into(), synonyms.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// Candidates for `slug`. Empty lists are reported as absent.
    pub fn get(&self, slug: &str) -> Option<&[String]> {
        self.entries
            .get(slug)
            .map(Vec::as_slice)
            .filter(|synonyms| !synonyms.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three datasets loaded for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
    pub radicals: TranslationMap,
    pub kanji: TranslationMap,
    pub vocabulary: TranslationMap,
}

impl TranslationSet {
    pub fn for_kind(&self, kind: SubjectKind) -> &TranslationMap {
        match kind {
            SubjectKind::Radical => &self.radicals,
            SubjectKind::Kanji => &self.kanji,
            SubjectKind::Vocabulary => &self.vocabulary,
        }
    }

    pub fn lookup(&self, kind: SubjectKind, slug: &str) -> Option<&[String]> {
        self.for_kind(kind).get(slug)
    }
}
