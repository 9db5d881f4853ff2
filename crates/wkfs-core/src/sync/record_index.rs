//! Subject id → study material id, used when a create is rejected.

use std::collections::HashMap;

use super::api::{RecordSummary, StudyMaterialApi};
use super::governor::RateGovernor;

#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    by_subject: HashMap<u64, u64>,
}

impl RecordIndex {
    pub fn from_records(records: impl IntoIterator<Item = RecordSummary>) -> Self {
        Self {
            by_subject: records
                .into_iter()
                .map(|r| (r.subject_id, r.record_id))
                .collect(),
        }
    }

    /// Read all study materials once. The read takes one request slot.
    ///
    /// A failure leaves the index empty: the run goes on, but the fallback
    /// path has nothing to target.
    pub async fn build<A>(api: &A, governor: &mut RateGovernor) -> Self
    where
        A: StudyMaterialApi + ?Sized,
    {
        if !governor.try_reserve() {
            tracing::warn!("Request budget exhausted before reading study materials");
            return Self::default();
        }

        match api.list_records().await {
            Ok(records) => {
                let index = Self::from_records(records);
                tracing::info!(records = index.len(), "Fetched existing study materials");
                index
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read study materials, conflict recovery disabled");
                Self::default()
            }
        }
    }

    pub fn record_for(&self, subject_id: u64) -> Option<u64> {
        self.by_subject.get(&subject_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_subject.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_subject.is_empty()
    }
}
