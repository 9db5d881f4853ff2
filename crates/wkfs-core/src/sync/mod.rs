//! French synonym synchronization.
//!
//! Datasets and inventory are read once, the record index is built once,
//! then every study item is processed sequentially against a fixed request
//! budget.

mod api;
mod dataset;
mod governor;
mod inventory;
mod record_index;
mod synchronizer;


pub use api::{RecordSummary, StudyMaterialApi};
pub use dataset::{DatasetLoader, KANJI_FILE, RADICALS_FILE, VOCABULARY_FILE};
pub use governor::RateGovernor;
pub use inventory::{ItemInventory, StaticInventory, WaniKaniInventory};
pub use record_index::RecordIndex;
pub use synchronizer::{decide, order_for_sync, Decision, SyncOptions, Synchronizer};

use wkfs_types::{ItemFilter, SyncReport, TranslationSet};

use crate::error::AppResult;

/// One complete pass: inventory, record index, then every item in order.
///
/// Inventory failures abort; everything after that is logged per item.
pub async fn run_sync<I, A>(
    inventory: &I,
    api: &A,
    translations: &TranslationSet,
    filter: &ItemFilter,
    options: SyncOptions,
    request_ceiling: u32,
) -> AppResult<SyncReport>
where
    I: ItemInventory + ?Sized,
    A: StudyMaterialApi + ?Sized,
{
    let items = inventory.list_items(filter).await?;
    tracing::info!(items = items.len(), "Loaded study items");

    let mut governor = RateGovernor::new(request_ceiling);
    let index = if options.dry_run {
        RecordIndex::default()
    } else {
        RecordIndex::build(api, &mut governor).await
    };

    let mut synchronizer = Synchronizer::new(api, translations, index, governor, options);
    Ok(synchronizer.run(items).await)
}
