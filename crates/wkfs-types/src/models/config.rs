//! Application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// WaniKani stores at most eight meaning synonyms per subject.
pub const MAX_SYNONYMS: usize = 8;

/// Outbound requests allowed per run.
pub const REQUEST_CEILING: u32 = 60;

pub const DEFAULT_API_BASE_URL: &str = "https://api.wanikani.com/v2";

pub const DEFAULT_DATASET_BASE_URL: &str =
    "https://raw.githubusercontent.com/lionelpnt/WaniKani-French-Data/master/";

/// Value of the `Wanikani-Revision` header.
pub const API_REVISION: &str = "20170710";

/// Persisted settings. The API token is deliberately not part of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// WaniKani API v2 root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_revision")]
    pub api_revision: String,
    /// Directory holding `radicals.json`, `kanji.json` and `words.json`
    #[serde(default = "default_dataset_base_url")]
    pub dataset_base_url: String,
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: usize,
    /// Write budget for one run (the record index read counts too)
    #[serde(default = "default_request_ceiling")]
    pub request_ceiling: u32,
    /// Radicals are skipped unless enabled
    #[serde(default)]
    pub include_radicals: bool,
    /// Blank every record written during the run once the pass ends
    #[serde(default)]
    pub delete_after_run: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_revision() -> String {
    API_REVISION.to_string()
}

fn default_dataset_base_url() -> String {
    DEFAULT_DATASET_BASE_URL.to_string()
}

fn default_max_synonyms() -> usize {
    MAX_SYNONYMS
}

fn default_request_ceiling() -> u32 {
    REQUEST_CEILING
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_revision: default_api_revision(),
            dataset_base_url: default_dataset_base_url(),
            max_synonyms: MAX_SYNONYMS,
            request_ceiling: REQUEST_CEILING,
            include_radicals: false,
            delete_after_run: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Reject values the platform or the synchronizer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_synonyms == 0 || self.max_synonyms > MAX_SYNONYMS {
            return Err(ConfigError::invalid(
                "max_synonyms",
                format!("must be between 1 and {MAX_SYNONYMS}"),
            ));
        }
        if self.request_ceiling == 0 {
            return Err(ConfigError::invalid("request_ceiling", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("timeout_secs", "must be at least 1"));
        }
        for (field, value) in
            [("api_base_url", &self.api_base_url), ("dataset_base_url", &self.dataset_base_url)]
        {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::invalid(field, "must be an http(s) URL"));
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
