use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wkfs_types::models::{API_REVISION, DEFAULT_API_BASE_URL};

/// Single resource envelope (`{"id", "object", "data"}`).
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<T> {
    #[serde(default)]
    pub id: Option<u64>,
    pub object: String,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Pages {
    pub next_url: Option<String>,
}

/// Paginated collection envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    pub object: String,
    #[serde(default)]
    pub pages: Pages,
    pub data: Vec<Resource<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
    pub level: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    pub meaning: String,
    pub primary: bool,
    #[serde(default)]
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub level: u32,
    pub slug: String,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub hidden_at: Option<DateTime<Utc>>,
}

impl Subject {
    /// The meaning flagged primary, falling back to the first one listed.
    pub fn primary_meaning(&self) -> Option<&str> {
        self.meanings
            .iter()
            .find(|m| m.primary)
            .or_else(|| self.meanings.first())
            .map(|m| m.meaning.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    pub subject_id: u64,
    pub subject_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudyMaterial {
    pub subject_id: u64,
    pub subject_type: String,
    #[serde(default)]
    pub meaning_synonyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialCreate {
    pub subject_id: u64,
    pub subject_type: String,
    pub meaning_synonyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialUpdate {
    pub meaning_synonyms: Vec<String>,
}

/// Request body wrapper (`{"study_material": {...}}`).
#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialBody<T> {
    pub study_material: T,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: String,
    pub revision: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: String::new(),
            revision: API_REVISION.to_string(),
            timeout_secs: 30,
        }
    }
}
