//! Study material endpoints used by the synchronizer.

use async_trait::async_trait;
use wkfs_client::{ClientError, StudyMaterialCreate, WaniKaniClient};
use wkfs_types::StudyItem;

/// Existing study material as needed by the record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSummary {
    pub record_id: u64,
    pub subject_id: u64,
}

#[async_trait]
pub trait StudyMaterialApi: Send + Sync {
    /// Every study material of the account.
    async fn list_records(&self) -> Result<Vec<RecordSummary>, ClientError>;

    /// Create a study material holding `synonyms` for `item`.
    /// Returns the new record id when the server reports one.
    async fn create_synonyms(
        &self,
        item: &StudyItem,
        synonyms: &[String],
    ) -> Result<Option<u64>, ClientError>;

    /// Replace the full synonym list of an existing record.
    async fn replace_synonyms(&self, record_id: u64, synonyms: &[String])
        -> Result<(), ClientError>;
}

#[async_trait]
impl StudyMaterialApi for WaniKaniClient {
    async fn list_records(&self) -> Result<Vec<RecordSummary>, ClientError> {
        let materials = self.study_materials().await?;
        Ok(materials
            .into_iter()
            .filter_map(|m| {
                m.id.map(|record_id| RecordSummary { record_id, subject_id: m.data.subject_id })
            })
            .collect())
    }

    async fn create_synonyms(
        &self,
        item: &StudyItem,
        synonyms: &[String],
    ) -> Result<Option<u64>, ClientError> {
        let created = self
            .create_study_material(StudyMaterialCreate {
                subject_id: item.id,
                subject_type: item.kind.as_str().to_string(),
                meaning_synonyms: synonyms.to_vec(),
            })
            .await?;
        Ok(created.id)
    }

    async fn replace_synonyms(
        &self,
        record_id: u64,
        synonyms: &[String],
    ) -> Result<(), ClientError> {
        self.update_study_material(record_id, synonyms.to_vec())
            .await
            .map(|_| ())
    }
}
