//! Relational record synthesis.
//!
//! Phase A generates the base kinds (patients, doctors), which carry no
//! references. After those have been persisted and read back, phase B
//! generates the dependent kinds (appointments, then activities), assigning
//! references by round-robin over the persisted lists and resolving every
//! business identifier through [`ResolvedIds`] before a record is emitted.

mod activities;
mod appointments;
mod doctors;
mod patients;

pub use activities::activities;
pub use appointments::{appointments, APPOINTMENT_MINUTES, SCHEDULING_WINDOW_DAYS};
pub use doctors::doctors;
pub use patients::patients;

use rand::Rng;
use seed_core::{EntityKind, ResolveError, ResolvedIds, StorageId, StoredRecord};

/// Record counts for a generation run.
#[derive(Debug, Clone, Copy)]
pub struct SynthCounts {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub activities: usize,
}

impl Default for SynthCounts {
    fn default() -> Self {
        Self {
            patients: 30,
            doctors: 10,
            appointments: 30,
            activities: 50,
        }
    }
}

/// Uniform draw from a fixed pool.
pub(crate) fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Resolve a persisted record into a reference link plus its display value.
///
/// The storage identifier comes from the lookup map rather than from the
/// record directly: an identifier that was never indexed means the
/// write-then-read-back protocol was violated, which must surface as an
/// error rather than a dangling link.
pub(crate) fn link(
    ids: &ResolvedIds,
    kind: EntityKind,
    record: &StoredRecord,
) -> Result<(StorageId, String), ResolveError> {
    let business_id = record
        .text(kind.id_field())
        .ok_or_else(|| ResolveError::MissingIdField {
            kind,
            storage_id: record.id.clone(),
            field: kind.id_field(),
        })?;
    let storage_id = ids.resolve(kind, business_id)?.clone();
    let display = record
        .text(kind.display_field())
        .unwrap_or(business_id)
        .to_string();
    Ok((storage_id, display))
}

#[cfg(test)]
pub(crate) mod testutil {
    use seed_core::{EntityKind, StorageId, StoredRecord};

    /// Build a persisted-record stand-in with a business id and display value.
    pub fn stored(kind: EntityKind, n: u32, display: &str) -> StoredRecord {
        let business_id = crate::identifier::business_id(kind, n);
        let mut fields = serde_json::Map::new();
        fields.insert(
            kind.display_field().to_string(),
            serde_json::Value::String(display.to_string()),
        );
        // Inserted second so it wins for kinds displayed by their business id.
        fields.insert(
            kind.id_field().to_string(),
            serde_json::Value::String(business_id.clone()),
        );
        StoredRecord {
            id: StorageId(format!("{}:{}", kind.collection_name(), n)),
            fields,
        }
    }
}
