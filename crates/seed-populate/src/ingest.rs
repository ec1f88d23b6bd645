//! Record ingestion with per-record failure isolation.

use seed_core::{EntityKind, ListStore, SeedRecord};
use tracing::{debug, info, warn};

/// Outcome of ingesting one batch of synthesized records.
#[derive(Debug, Clone, Copy)]
pub struct IngestReport {
    pub kind: EntityKind,
    /// Records submitted to the store.
    pub attempted: usize,
    /// Records the store accepted.
    pub created: usize,
    /// Records the store rejected; the batch continued past them.
    pub failed: usize,
}

impl IngestReport {
    pub fn all_created(&self) -> bool {
        self.failed == 0 && self.created == self.attempted
    }
}

/// Submit each record as an independent create operation.
///
/// A rejected record is logged with its display title and counted; it never
/// aborts the batch. Callers must check the report's counts rather than
/// assume every synthesized record was persisted.
pub async fn ingest<S: ListStore, R: SeedRecord>(store: &S, records: &[R]) -> IngestReport {
    let mut report = IngestReport {
        kind: R::KIND,
        attempted: records.len(),
        created: 0,
        failed: 0,
    };

    for record in records {
        match store.create_record(R::KIND, &record.field_values()).await {
            Ok(id) => {
                debug!("Created {} record {} as {id}", R::KIND, record.title());
                report.created += 1;
            }
            Err(e) => {
                warn!("Failed to create {} record {}: {e}", R::KIND, record.title());
                report.failed += 1;
            }
        }
    }

    info!(
        "Ingested {}: {} of {} records created ({} failed)",
        report.kind, report.created, report.attempted, report.failed
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::provision_all;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_core::{FieldValues, StorageId, StoreError, StoredRecord};
    use seed_core::{FieldDef, ListStore};
    use seed_store_memory::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store double that rejects every n-th create.
    struct FailingStore {
        inner: MemoryStore,
        fail_on: usize,
        creates: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ListStore for FailingStore {
        async fn collection_exists(&self, kind: EntityKind) -> Result<bool, StoreError> {
            self.inner.collection_exists(kind).await
        }
        async fn create_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
            self.inner.create_collection(kind).await
        }
        async fn delete_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
            self.inner.delete_collection(kind).await
        }
        async fn add_field(&self, kind: EntityKind, field: &FieldDef) -> Result<(), StoreError> {
            self.inner.add_field(kind, field).await
        }
        async fn create_record(
            &self,
            kind: EntityKind,
            values: &FieldValues,
        ) -> Result<StorageId, StoreError> {
            let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
            if n == self.fail_on {
                return Err(StoreError::Validation {
                    collection: kind.collection_name(),
                    message: "injected failure".into(),
                });
            }
            self.inner.create_record(kind, values).await
        }
        async fn list_records(&self, kind: EntityKind) -> Result<Vec<StoredRecord>, StoreError> {
            self.inner.list_records(kind).await
        }
        async fn delete_record(&self, kind: EntityKind, id: &StorageId) -> Result<(), StoreError> {
            self.inner.delete_record(kind, id).await
        }
    }

    #[tokio::test]
    async fn test_per_record_failure_does_not_abort_the_batch() {
        let store = FailingStore {
            inner: MemoryStore::new(),
            fail_on: 5,
            creates: AtomicUsize::new(0),
        };
        provision_all(&store).await.unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let patients = seed_generator::patients(&mut rng, 30, Utc::now()).unwrap();
        let report = ingest(&store, &patients).await;

        assert_eq!(report.attempted, 30);
        assert_eq!(report.created, 29);
        assert_eq!(report.failed, 1);
        assert!(!report.all_created());
        assert_eq!(store.inner.record_count(EntityKind::Patient), 29);
    }

    #[tokio::test]
    async fn test_clean_batch_reports_all_created() {
        let store = MemoryStore::new();
        provision_all(&store).await.unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let doctors = seed_generator::doctors(&mut rng, 10);
        let report = ingest(&store, &doctors).await;

        assert_eq!(report.created, 10);
        assert!(report.all_created());
    }
}
