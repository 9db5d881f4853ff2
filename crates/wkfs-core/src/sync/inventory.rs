//! Study items visible to the current user.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use wkfs_client::WaniKaniClient;
use wkfs_types::{ItemFilter, StudyItem, StudyMaterialRef, SubjectKind};

use crate::error::AppResult;

/// Source of study items. Ordering of the result is not guaranteed.
#[async_trait]
pub trait ItemInventory: Send + Sync {
    async fn list_items(&self, filter: &ItemFilter) -> AppResult<Vec<StudyItem>>;
}

/// Joins subjects, unlocked assignments and study materials from the API.
pub struct WaniKaniInventory<'a> {
    client: &'a WaniKaniClient,
}

impl<'a> WaniKaniInventory<'a> {
    pub fn new(client: &'a WaniKaniClient) -> Self {
        Self { client }
    }
}

fn subject_types(kinds: &[SubjectKind]) -> Vec<&'static str> {
    let mut types = Vec::new();
    for kind in kinds {
        types.push(kind.as_str());
        if *kind == SubjectKind::Vocabulary {
            types.push("kana_vocabulary");
        }
    }
    types
}

#[async_trait]
impl ItemInventory for WaniKaniInventory<'_> {
    async fn list_items(&self, filter: &ItemFilter) -> AppResult<Vec<StudyItem>> {
        let types = subject_types(&filter.kinds);
        let levels: Vec<u32> = filter.levels().collect();

        let subjects = self.client.subjects(&types, &levels).await?;
        let assignments = self.client.assignments(&types, &levels).await?;
        let materials = self.client.study_materials().await?;

        // The assignment query only returns unlocked subjects.
        let unlocked: HashSet<u64> = assignments.into_iter().map(|a| a.data.subject_id).collect();

        let mut by_subject: HashMap<u64, StudyMaterialRef> = HashMap::new();
        for material in materials {
            if let Some(id) = material.id {
                by_subject.insert(
                    material.data.subject_id,
                    StudyMaterialRef { id, meaning_synonyms: material.data.meaning_synonyms },
                );
            }
        }

        let mut items = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let Some(id) = subject.id else { continue };
            let Some(kind) = SubjectKind::from_api(&subject.object) else {
                tracing::debug!(object = %subject.object, "Skipping unknown subject type");
                continue;
            };
            if subject.data.hidden_at.is_some() || !filter.accepts(kind, subject.data.level) {
                continue;
            }

            items.push(StudyItem {
                id,
                kind,
                primary_meaning: subject.data.primary_meaning().unwrap_or_default().to_string(),
                slug: subject.data.slug,
                level: subject.data.level,
                unlocked: unlocked.contains(&id),
                study_material: by_subject.remove(&id),
            });
        }

        tracing::info!(
            subjects = items.len(),
            unlocked = unlocked.len(),
            "Fetched WaniKani items"
        );
        Ok(items)
    }
}

/// Fixed item list, used by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    items: Vec<StudyItem>,
}

impl StaticInventory {
    pub fn new(items: Vec<StudyItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemInventory for StaticInventory {
    async fn list_items(&self, filter: &ItemFilter) -> AppResult<Vec<StudyItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| filter.accepts(item.kind, item.level))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wkfs_client::ClientConfig;
    use wkfs_types::{TranslationMap, TranslationSet};

    use crate::sync::{decide, Decision};

    async fn serve(server: &MockServer, endpoint: &str, data: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "collection",
                "pages": {"next_url": null},
                "data": data
            })))
            .mount(server)
            .await;
    }

    fn subject(id: u64, object: &str, slug: &str, meaning: &str) -> serde_json::Value {
        json!({
            "id": id,
            "object": object,
            "data": {
                "level": 3,
                "slug": slug,
                "meanings": [{"meaning": meaning, "primary": true}]
            }
        })
    }

    #[tokio::test]
    async fn test_kana_vocabulary_joins_words_dataset() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/subjects",
            json!([
                subject(9001, "kana_vocabulary", "おはよう", "Good Morning"),
                subject(9002, "vocabulary", "大人", "Adult"),
            ]),
        )
        .await;
        serve(
            &server,
            "/assignments",
            json!([{"id": 1, "object": "assignment",
                    "data": {"subject_id": 9001, "subject_type": "kana_vocabulary"}}]),
        )
        .await;
        serve(&server, "/study_materials", json!([])).await;

        let client = WaniKaniClient::new(ClientConfig {
            base_url: server.uri(),
            api_token: "test-token".to_string(),
            ..Default::default()
        })
        .unwrap();
        let mut items = WaniKaniInventory::new(&client)
            .list_items(&ItemFilter::up_to_level(3))
            .await
            .unwrap();
        items.sort_by_key(|item| item.id);

        assert_eq!(items.len(), 2);
        let kana = &items[0];
        assert_eq!(kana.kind, SubjectKind::Vocabulary);
        assert_eq!(kana.primary_meaning, "Good Morning");
        assert!(kana.unlocked);
        assert!(!items[1].unlocked, "no assignment means locked");

        let translations = TranslationSet {
            vocabulary: TranslationMap::from_entries([("おはよう", vec!["bonjour"])]),
            ..Default::default()
        };
        assert_eq!(decide(kana, &translations, 8), Decision::Submit(vec!["bonjour".to_string()]));
    }

    #[test]
    fn test_subject_types_include_kana_vocabulary() {
        assert_eq!(
            subject_types(&[SubjectKind::Kanji, SubjectKind::Vocabulary]),
            vec!["kanji", "vocabulary", "kana_vocabulary"]
        );
    }
}
