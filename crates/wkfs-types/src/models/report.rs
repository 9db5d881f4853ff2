//! Per-item outcomes and the end-of-run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal state reached by one study item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// No assignment: the item is not unlocked yet
    Locked,
    /// The dataset has nothing for this slug
    NoTranslation,
    /// Remote list already equals the merged list
    Unchanged,
    /// Request ceiling reached before the write
    BudgetExhausted,
    /// Create succeeded
    Created { record_id: Option<u64> },
    /// Create failed, blank-then-set on the existing record succeeded
    Recovered { record_id: u64 },
    /// Create failed and recovery did not complete
    RecoveryFailed { reason: String },
    /// Dry run: the list that would have been submitted
    Planned { synonyms: Vec<String> },
}

impl SyncOutcome {
    /// Study material id known to hold a list written during this run.
    pub fn written_record(&self) -> Option<u64> {
        match self {
            Self::Created { record_id } => *record_id,
            Self::Recovered { record_id } => Some(*record_id),
            _ => None,
        }
    }
}

/// Summary of one synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub locked: usize,
    pub no_translation: usize,
    pub unchanged: usize,
    pub budget_exhausted: usize,
    pub created: usize,
    pub recovered: usize,
    pub recovery_failed: usize,
    pub planned: usize,
    /// Records blanked by the delete-after-run pass
    pub cleared: usize,
    pub requests_used: u32,
    pub request_ceiling: u32,
    /// Study material ids written during the run, in write order
    pub written_records: Vec<u64>,
}

impl SyncReport {
    pub fn new(request_ceiling: u32) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            locked: 0,
            no_translation: 0,
            unchanged: 0,
            budget_exhausted: 0,
            created: 0,
            recovered: 0,
            recovery_failed: 0,
            planned: 0,
            cleared: 0,
            requests_used: 0,
            request_ceiling,
            written_records: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Locked => self.locked += 1,
            SyncOutcome::NoTranslation => self.no_translation += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
            SyncOutcome::BudgetExhausted => self.budget_exhausted += 1,
            SyncOutcome::Created { .. } => self.created += 1,
            SyncOutcome::Recovered { .. } => self.recovered += 1,
            SyncOutcome::RecoveryFailed { .. } => self.recovery_failed += 1,
            SyncOutcome::Planned { .. } => self.planned += 1,
        }
        if let Some(id) = outcome.written_record() {
            if !self.written_records.contains(&id) {
                self.written_records.push(id);
            }
        }
    }

    pub fn finish(&mut self, requests_used: u32) {
        self.requests_used = requests_used;
        self.finished_at = Some(Utc::now());
    }

    /// Items that ended with a successful write.
    pub fn writes(&self) -> usize {
        self.created + self.recovered
    }

    pub fn processed(&self) -> usize {
        self.locked
            + self.no_translation
            + self.unchanged
            + self.budget_exhausted
            + self.created
            + self.recovered
            + self.recovery_failed
            + self.planned
    }

    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}
