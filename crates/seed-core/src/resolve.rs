//! Business-identifier to storage-identifier resolution.
//!
//! The store assigns opaque identifiers at insertion time, so dependent
//! kinds cannot link to earlier kinds until their persisted records have
//! been read back. [`ResolvedIds`] is the lookup built from that read-back,
//! passed forward explicitly between pipeline stages.

use crate::fields::{StorageId, StoredRecord};
use crate::kind::EntityKind;
use std::collections::HashMap;

/// Error resolving a business identifier to a storage identifier.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The business identifier was never indexed for this kind.
    #[error("no storage id recorded for {kind} '{business_id}'")]
    Unresolved { kind: EntityKind, business_id: String },

    /// A persisted record is missing its business-identifier field.
    #[error("persisted {kind} record {storage_id} has no '{field}' field")]
    MissingIdField {
        kind: EntityKind,
        storage_id: StorageId,
        field: &'static str,
    },

    /// Two persisted records carry the same business identifier.
    #[error("duplicate business id '{business_id}' among persisted {kind} records")]
    DuplicateId { kind: EntityKind, business_id: String },
}

/// Per-kind map from business identifier to storage identifier.
#[derive(Debug, Clone, Default)]
pub struct ResolvedIds {
    maps: HashMap<EntityKind, HashMap<String, StorageId>>,
}

impl ResolvedIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a persisted record set, mapping each record's business
    /// identifier to its storage identifier.
    ///
    /// Returns the number of entries indexed. Missing or duplicate business
    /// identifiers are errors: a dependent record synthesized against a
    /// broken lookup would carry a dangling or ambiguous reference.
    pub fn index(
        &mut self,
        kind: EntityKind,
        records: &[StoredRecord],
    ) -> Result<usize, ResolveError> {
        let map = self.maps.entry(kind).or_default();
        for record in records {
            let business_id =
                record
                    .text(kind.id_field())
                    .ok_or_else(|| ResolveError::MissingIdField {
                        kind,
                        storage_id: record.id.clone(),
                        field: kind.id_field(),
                    })?;
            if map
                .insert(business_id.to_string(), record.id.clone())
                .is_some()
            {
                return Err(ResolveError::DuplicateId {
                    kind,
                    business_id: business_id.to_string(),
                });
            }
        }
        Ok(map.len())
    }

    /// Resolve a business identifier to its storage identifier.
    pub fn resolve(&self, kind: EntityKind, business_id: &str) -> Result<&StorageId, ResolveError> {
        self.maps
            .get(&kind)
            .and_then(|m| m.get(business_id))
            .ok_or_else(|| ResolveError::Unresolved {
                kind,
                business_id: business_id.to_string(),
            })
    }

    /// Number of indexed entries for a kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.maps.get(&kind).map_or(0, |m| m.len())
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }
}
