//! Wholesale record clearing ahead of regeneration.

use seed_core::{EntityKind, ListStore, StoreError};
use tracing::info;

/// Records deleted per kind during a clear pass.
#[derive(Debug, Clone, Default)]
pub struct ClearReport {
    pub deleted: Vec<(EntityKind, usize)>,
}

impl ClearReport {
    pub fn total(&self) -> usize {
        self.deleted.iter().map(|(_, n)| n).sum()
    }
}

/// Delete every record of every kind, in strict reverse dependency order
/// (activities, appointments, doctors, patients) so a reference target is
/// never removed while referrers still point at it. Kinds without a
/// provisioned collection are skipped.
pub async fn clear_all<S: ListStore>(store: &S) -> Result<ClearReport, StoreError> {
    let mut report = ClearReport::default();
    for kind in EntityKind::CLEARING_ORDER {
        if !store.collection_exists(kind).await? {
            info!("Skipping clear of '{kind}': collection does not exist");
            continue;
        }
        let records = store.list_records(kind).await?;
        for record in &records {
            store.delete_record(kind, &record.id).await?;
        }
        info!("Cleared {} records from '{kind}'", records.len());
        report.deleted.push((kind, records.len()));
    }
    Ok(report)
}
