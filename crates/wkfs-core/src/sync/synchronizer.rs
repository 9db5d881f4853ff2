//! Per-item synonym decision and submission.
//!
//! ```text
//! Locked                 -> skip
//! Unlocked, no dataset   -> skip
//! Unlocked, unchanged    -> skip
//! Unlocked, changed      -> create -> ok: Created
//!                                  -> err: blank + set existing record
//!                                          -> Recovered | RecoveryFailed
//! ```
//!
//! Items are handled one at a time; each request completes before the next
//! one starts, so the write order on the server matches iteration order.

use wkfs_types::{
    merge_synonyms, AppConfig, StudyItem, SubjectKind, SyncError, SyncOutcome, SyncReport,
    TranslationSet, MAX_SYNONYMS,
};

use super::api::StudyMaterialApi;
use super::governor::RateGovernor;
use super::record_index::RecordIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub max_synonyms: usize,
    pub include_radicals: bool,
    /// Decide everything, write nothing
    pub dry_run: bool,
    /// Blank every record written during the run once the pass ends
    pub delete_after_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            max_synonyms: MAX_SYNONYMS,
            include_radicals: false,
            dry_run: false,
            delete_after_run: false,
        }
    }
}

impl SyncOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_synonyms: config.max_synonyms,
            include_radicals: config.include_radicals,
            dry_run: false,
            delete_after_run: config.delete_after_run,
        }
    }
}

/// What to do with one item, before any budget or network concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SyncOutcome),
    /// Complete synonym list to store for the subject
    Submit(Vec<String>),
}

pub fn decide(item: &StudyItem, translations: &TranslationSet, max_synonyms: usize) -> Decision {
    if !item.unlocked {
        return Decision::Skip(SyncOutcome::Locked);
    }

    let Some(translated) = translations.lookup(item.kind, &item.slug) else {
        return Decision::Skip(SyncOutcome::NoTranslation);
    };

    let merged = merge_synonyms(item.existing_synonyms(), translated, max_synonyms);

    match &item.study_material {
        Some(material) if material.meaning_synonyms == merged => {
            Decision::Skip(SyncOutcome::Unchanged)
        }
        _ => Decision::Submit(merged),
    }
}

/// Kanji then vocabulary (radicals first when enabled), each group sorted
/// by level then label.
pub fn order_for_sync(items: Vec<StudyItem>, include_radicals: bool) -> Vec<StudyItem> {
    let kinds: &[SubjectKind] = if include_radicals {
        &[SubjectKind::Radical, SubjectKind::Kanji, SubjectKind::Vocabulary]
    } else {
        &[SubjectKind::Kanji, SubjectKind::Vocabulary]
    };

    let mut ordered = Vec::with_capacity(items.len());
    for kind in kinds {
        let mut group: Vec<StudyItem> = items.iter().filter(|i| i.kind == *kind).cloned().collect();
        group.sort_by(StudyItem::sync_order);
        ordered.extend(group);
    }
    ordered
}

pub struct Synchronizer<'a, A: StudyMaterialApi + ?Sized> {
    api: &'a A,
    translations: &'a TranslationSet,
    index: RecordIndex,
    governor: RateGovernor,
    options: SyncOptions,
}

impl<'a, A: StudyMaterialApi + ?Sized> Synchronizer<'a, A> {
    pub fn new(
        api: &'a A,
        translations: &'a TranslationSet,
        index: RecordIndex,
        governor: RateGovernor,
        options: SyncOptions,
    ) -> Self {
        Self { api, translations, index, governor, options }
    }

    /// Process every item in sync order and summarize the run.
    pub async fn run(&mut self, items: Vec<StudyItem>) -> SyncReport {
        let ordered = order_for_sync(items, self.options.include_radicals);
        let mut report = SyncReport::new(self.governor.ceiling());

        tracing::info!(
            items = ordered.len(),
            dry_run = self.options.dry_run,
            "Synchronizing French synonyms"
        );

        for item in &ordered {
            let outcome = self.sync_item(item).await;
            report.record(&outcome);
        }

        if self.options.delete_after_run && !self.options.dry_run {
            report.cleared = self.clear_records(&report.written_records).await;
        }

        report.finish(self.governor.used());
        tracing::info!(
            requests = report.requests_used,
            ceiling = report.request_ceiling,
            created = report.created,
            recovered = report.recovered,
            "Synchronization complete"
        );
        report
    }

    pub async fn sync_item(&mut self, item: &StudyItem) -> SyncOutcome {
        if self.governor.is_exhausted() {
            tracing::warn!(
                kind = %item.kind,
                slug = %item.slug,
                "Request ceiling reached, skipping. Run again later"
            );
            return SyncOutcome::BudgetExhausted;
        }

        let synonyms = match decide(item, self.translations, self.options.max_synonyms) {
            Decision::Skip(outcome) => {
                log_skip(item, &outcome);
                return outcome;
            }
            Decision::Submit(synonyms) => synonyms,
        };

        if self.options.dry_run {
            tracing::info!(
                kind = %item.kind,
                slug = %item.slug,
                synonyms = %synonyms.join(", "),
                "Would update synonyms"
            );
            return SyncOutcome::Planned { synonyms };
        }

        if !self.governor.try_reserve() {
            tracing::warn!(kind = %item.kind, slug = %item.slug, "Request ceiling reached, skipping");
            return SyncOutcome::BudgetExhausted;
        }
        tracing::info!(
            used = self.governor.used(),
            ceiling = self.governor.ceiling(),
            "Request budget"
        );

        match self.api.create_synonyms(item, &synonyms).await {
            Ok(record_id) => {
                tracing::info!(
                    kind = %item.kind,
                    slug = %item.slug,
                    synonyms = %synonyms.join(", "),
                    "Synonyms created"
                );
                SyncOutcome::Created { record_id }
            }
            Err(e) => {
                tracing::warn!(
                    kind = %item.kind,
                    slug = %item.slug,
                    error = %e,
                    "Create failed, updating existing record"
                );
                self.recover(item, &synonyms).await
            }
        }
    }

    /// Blank the existing record, then store `synonyms` in it.
    ///
    /// The record id comes from the index, or from the inventory when the
    /// index has no entry. Both writes are reserved together so the budget
    /// can never stop the sequence between the blank and the set.
    async fn recover(&mut self, item: &StudyItem, synonyms: &[String]) -> SyncOutcome {
        let record_id = self
            .index
            .record_for(item.id)
            .or_else(|| item.study_material.as_ref().map(|material| material.id));
        let Some(record_id) = record_id else {
            let err = SyncError::MissingRecord { subject_id: item.id };
            tracing::error!(kind = %item.kind, slug = %item.slug, error = %err, "Recovery impossible");
            return SyncOutcome::RecoveryFailed { reason: err.to_string() };
        };

        if !self.governor.try_reserve_many(2) {
            let err = SyncError::BudgetExhausted {
                used: self.governor.used(),
                ceiling: self.governor.ceiling(),
            };
            tracing::warn!(kind = %item.kind, slug = %item.slug, error = %err, "Recovery skipped");
            return SyncOutcome::RecoveryFailed { reason: err.to_string() };
        }

        tracing::info!(record_id, subject_id = item.id, "Replacing existing record");

        if let Err(e) = self.api.replace_synonyms(record_id, &[]).await {
            tracing::error!(record_id, error = %e, "Blanking record failed");
        }

        match self.api.replace_synonyms(record_id, synonyms).await {
            Ok(()) => {
                tracing::info!(kind = %item.kind, slug = %item.slug, "Synonyms updated");
                SyncOutcome::Recovered { record_id }
            }
            Err(e) => {
                let err = SyncError::WriteFailed {
                    target: format!("study_materials/{record_id}"),
                    message: e.to_string(),
                };
                tracing::error!(kind = %item.kind, slug = %item.slug, error = %err, "Update failed");
                SyncOutcome::RecoveryFailed { reason: err.to_string() }
            }
        }
    }

    /// Replace each record with an empty list. Returns how many succeeded.
    async fn clear_records(&mut self, record_ids: &[u64]) -> usize {
        let mut cleared = 0;
        for (done, &record_id) in record_ids.iter().enumerate() {
            if !self.governor.try_reserve() {
                tracing::warn!(
                    remaining = record_ids.len() - done,
                    "Request ceiling reached, records left in place"
                );
                break;
            }
            match self.api.replace_synonyms(record_id, &[]).await {
                Ok(()) => cleared += 1,
                Err(e) => tracing::error!(record_id, error = %e, "Clearing record failed"),
            }
        }
        tracing::info!(cleared, "Deleted synonyms written during this run");
        cleared
    }
}

fn log_skip(item: &StudyItem, outcome: &SyncOutcome) {
    let reason = match outcome {
        SyncOutcome::Locked => "not unlocked yet",
        SyncOutcome::NoTranslation => "no French synonyms",
        SyncOutcome::Unchanged => "same synonyms as before",
        _ => return,
    };
    tracing::info!(kind = %item.kind, slug = %item.slug, "{reason}");
}
