//! French translation datasets.
//!
//! Three static JSON documents (`{ slug: [synonym, ...] }`), one per subject
//! kind, served from a common base URL. Any failure aborts the run.

use std::time::Duration;

use reqwest::Client;
use url::Url;
use wkfs_types::{DatasetError, SubjectKind, TranslationMap, TranslationSet};

pub const RADICALS_FILE: &str = "radicals.json";
pub const KANJI_FILE: &str = "kanji.json";
pub const VOCABULARY_FILE: &str = "words.json";

pub struct DatasetLoader {
    client: Client,
    base_url: Url,
}

impl DatasetLoader {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DatasetError> {
        // Without the trailing slash `join` would replace the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| DatasetError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatasetError::Fetch {
                url: base_url.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, kind: SubjectKind) -> Result<Url, DatasetError> {
        let file = match kind {
            SubjectKind::Radical => RADICALS_FILE,
            SubjectKind::Kanji => KANJI_FILE,
            SubjectKind::Vocabulary => VOCABULARY_FILE,
        };
        self.base_url
            .join(file)
            .map_err(|e| DatasetError::InvalidUrl { url: file.to_string(), message: e.to_string() })
    }

    pub async fn fetch_map(&self, kind: SubjectKind) -> Result<TranslationMap, DatasetError> {
        let url = self.url_for(kind)?;
        let fetch_error =
            |e: reqwest::Error| DatasetError::Fetch { url: url.to_string(), message: e.to_string() };

        let resp = self.client.get(url.clone()).send().await.map_err(fetch_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DatasetError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp.text().await.map_err(fetch_error)?;
        let map: TranslationMap = serde_json::from_str(&body).map_err(|e| {
            DatasetError::Malformed { url: url.to_string(), message: e.to_string() }
        })?;

        tracing::debug!(kind = %kind, entries = map.len(), "Fetched dataset");
        Ok(map)
    }

    /// Fetch all three datasets. The reads are independent and run together.
    pub async fn load_all(&self) -> Result<TranslationSet, DatasetError> {
        let (radicals, kanji, vocabulary) = tokio::try_join!(
            self.fetch_map(SubjectKind::Radical),
            self.fetch_map(SubjectKind::Kanji),
            self.fetch_map(SubjectKind::Vocabulary),
        )?;

        tracing::info!(
            radicals = radicals.len(),
            kanji = kanji.len(),
            vocabulary = vocabulary.len(),
            "Fetched French synonym datasets"
        );

        Ok(TranslationSet { radicals, kanji, vocabulary })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(server: &MockServer, file: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/data/{file}")))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[test]
    fn test_url_for_keeps_base_directory() {
        let loader =
            DatasetLoader::new("https://example.com/repo/master", Duration::from_secs(1)).unwrap();

        assert_eq!(
            loader.url_for(SubjectKind::Vocabulary).unwrap().as_str(),
            "https://example.com/repo/master/words.json"
        );
    }

    #[tokio::test]
    async fn test_load_all_reads_three_files() {
        let server = MockServer::start().await;
        serve(&server, RADICALS_FILE, ResponseTemplate::new(200).set_body_string("{}")).await;
        serve(
            &server,
            KANJI_FILE,
            ResponseTemplate::new(200).set_body_string(r#"{"水": ["eau"]}"#),
        )
        .await;
        serve(
            &server,
            VOCABULARY_FILE,
            ResponseTemplate::new(200).set_body_string(r#"{"水曜日": ["mercredi"], "山": []}"#),
        )
        .await;

        let loader =
            DatasetLoader::new(&format!("{}/data", server.uri()), Duration::from_secs(5)).unwrap();
        let set = loader.load_all().await.unwrap();

        assert!(set.radicals.is_empty());
        assert_eq!(set.kanji.get("水").unwrap(), ["eau"]);
        assert_eq!(set.vocabulary.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_dataset_aborts() {
        let server = MockServer::start().await;
        serve(&server, RADICALS_FILE, ResponseTemplate::new(200).set_body_string("{}")).await;
        serve(&server, KANJI_FILE, ResponseTemplate::new(200).set_body_string("[1, 2]")).await;
        serve(&server, VOCABULARY_FILE, ResponseTemplate::new(200).set_body_string("{}")).await;

        let loader =
            DatasetLoader::new(&format!("{}/data", server.uri()), Duration::from_secs(5)).unwrap();
        let err = loader.load_all().await.unwrap_err();

        assert!(matches!(err, DatasetError::Malformed { ref url, .. } if url.ends_with(KANJI_FILE)));
    }

    #[tokio::test]
    async fn test_missing_dataset_reports_status() {
        let server = MockServer::start().await;
        serve(&server, RADICALS_FILE, ResponseTemplate::new(404)).await;

        let loader =
            DatasetLoader::new(&format!("{}/data", server.uri()), Duration::from_secs(5)).unwrap();
        let err = loader.fetch_map(SubjectKind::Radical).await.unwrap_err();

        assert!(matches!(err, DatasetError::Status { status: 404, .. }));
    }
}
