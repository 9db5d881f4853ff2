//! Study items as seen by the synchronizer.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// WaniKani subject category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Radical,
    Kanji,
    #[serde(alias = "kana_vocabulary")]
    Vocabulary,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 3] = [Self::Radical, Self::Kanji, Self::Vocabulary];

    /// Name used by the WaniKani API (`object` field and `types` filter).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocabulary => "vocabulary",
        }
    }

    /// Parse an API object name. `kana_vocabulary` folds into vocabulary.
    pub fn from_api(object: &str) -> Option<Self> {
        match object {
            "radical" => Some(Self::Radical),
            "kanji" => Some(Self::Kanji),
            "vocabulary" | "kana_vocabulary" => Some(Self::Vocabulary),
            _ => None,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Existing study material attached to a subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StudyMaterialRef {
    /// Study material id (target of `PUT /study_materials/{id}`)
    pub id: u64,
    /// Current meaning synonyms, in server order
    pub meaning_synonyms: Vec<String>,
}

/// One learnable unit visible to the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyItem {
    /// Subject id
    pub id: u64,
    pub kind: SubjectKind,
    /// Join key against the translation datasets
    pub slug: String,
    pub level: u32,
    /// First meaning listed by WaniKani, used for ordering
    pub primary_meaning: String,
    /// An assignment exists for the subject; locked items are never written
    pub unlocked: bool,
    #[serde(default)]
    pub study_material: Option<StudyMaterialRef>,
}

impl StudyItem {
    /// Current synonyms, empty when no study material exists.
    pub fn existing_synonyms(&self) -> &[String] {
        self.study_material
            .as_ref()
            .map_or(&[], |m| m.meaning_synonyms.as_slice())
    }

    fn sort_label(&self) -> &str {
        match self.kind {
            SubjectKind::Radical => &self.slug,
            SubjectKind::Kanji | SubjectKind::Vocabulary => &self.primary_meaning,
        }
    }

    /// Processing order: level ascending, then label alphabetically
    /// (case-insensitive). Radicals are labelled by slug, everything else by
    /// primary meaning.
    pub fn sync_order(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| {
                self.sort_label()
                    .to_lowercase()
                    .cmp(&other.sort_label().to_lowercase())
            })
            .then_with(|| self.sort_label().cmp(other.sort_label()))
    }
}

/// Which subjects the inventory should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    pub kinds: Vec<SubjectKind>,
    pub min_level: u32,
    pub max_level: u32,
}

impl ItemFilter {
    /// All kinds from level 1 up to `max_level`.
    pub fn up_to_level(max_level: u32) -> Self {
        Self { kinds: SubjectKind::ALL.to_vec(), min_level: 1, max_level }
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> {
        self.min_level..=self.max_level
    }

    pub fn accepts(&self, kind: SubjectKind, level: u32) -> bool {
        self.kinds.contains(&kind) && (self.min_level..=self.max_level).contains(&level)
    }
}
