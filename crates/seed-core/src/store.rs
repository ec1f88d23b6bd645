//! The list-store trait the seeding pipeline runs against.

use crate::fields::{FieldDef, FieldValues, StorageId, StoredRecord};
use crate::kind::EntityKind;

/// Errors surfaced by a list-store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Could not reach or authenticate with the store. Fatal for the run.
    #[error("store connection error: {0}")]
    Connection(String),

    /// A query or operation failed at the store. Fatal for the run.
    #[error("store operation failed: {0}")]
    Query(String),

    /// The target collection does not exist.
    #[error("collection '{0}' does not exist")]
    NoSuchCollection(&'static str),

    /// A field definition could not be applied, e.g. a computed formula
    /// referencing a field that has not been added yet.
    #[error("invalid field '{field}' on '{collection}': {message}")]
    InvalidField {
        collection: &'static str,
        field: String,
        message: String,
    },

    /// A record violated required/choice/reference/unique constraints at
    /// create time. Recovered per record by the ingestion runner.
    #[error("validation failed for {collection} record: {message}")]
    Validation {
        collection: &'static str,
        message: String,
    },
}

/// Operations the seeding pipeline needs from a structured-list store.
///
/// Implementations are expected to be synchronous from the caller's
/// perspective: a record created by `create_record` is visible to the next
/// `list_records` call. The write-then-read-back identifier resolution in
/// the synthesizer depends on this.
#[async_trait::async_trait]
pub trait ListStore: Send + Sync {
    /// Whether a collection for this kind exists.
    async fn collection_exists(&self, kind: EntityKind) -> Result<bool, StoreError>;

    /// Create an empty collection for this kind.
    async fn create_collection(&self, kind: EntityKind) -> Result<(), StoreError>;

    /// Destroy the collection and all of its records.
    async fn delete_collection(&self, kind: EntityKind) -> Result<(), StoreError>;

    /// Add a field to the collection. Computed fields require their
    /// dependencies to exist already; reference fields require the target
    /// collection to be provisioned.
    async fn add_field(&self, kind: EntityKind, field: &FieldDef) -> Result<(), StoreError>;

    /// Create a record, returning its store-assigned identifier.
    async fn create_record(
        &self,
        kind: EntityKind,
        values: &FieldValues,
    ) -> Result<StorageId, StoreError>;

    /// All records of the collection, ordered by business identifier, with
    /// computed fields materialized.
    async fn list_records(&self, kind: EntityKind) -> Result<Vec<StoredRecord>, StoreError>;

    /// Delete a single record by storage identifier.
    async fn delete_record(&self, kind: EntityKind, id: &StorageId) -> Result<(), StoreError>;
}
