//! Entity kinds and their collection-level metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four entity kinds managed by the seeder.
///
/// The variant order matters: `PROVISIONING_ORDER` follows it because
/// appointments and activities declare reference fields pointing at the
/// earlier kinds, which must already exist in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
    Activity,
}

impl EntityKind {
    /// Dependency order: reference targets before referrers.
    pub const PROVISIONING_ORDER: [EntityKind; 4] = [
        EntityKind::Patient,
        EntityKind::Doctor,
        EntityKind::Appointment,
        EntityKind::Activity,
    ];

    /// Reverse dependency order, used when deleting records so that a
    /// reference target is never removed before its referrers.
    pub const CLEARING_ORDER: [EntityKind; 4] = [
        EntityKind::Activity,
        EntityKind::Appointment,
        EntityKind::Doctor,
        EntityKind::Patient,
    ];

    /// Name of the backing collection for this kind.
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patients",
            EntityKind::Doctor => "doctors",
            EntityKind::Appointment => "appointments",
            EntityKind::Activity => "activities",
        }
    }

    /// Prefix of the human-readable business identifier.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntityKind::Patient => "MRN",
            EntityKind::Doctor => "DOC",
            EntityKind::Appointment => "APP",
            EntityKind::Activity => "ACT",
        }
    }

    /// Zero-padding width of the numeric part of the business identifier.
    pub fn id_width(&self) -> usize {
        match self {
            EntityKind::Patient => 5,
            EntityKind::Doctor => 4,
            EntityKind::Appointment => 6,
            EntityKind::Activity => 6,
        }
    }

    /// Field holding the business identifier.
    pub fn id_field(&self) -> &'static str {
        match self {
            EntityKind::Patient => "patient_id",
            EntityKind::Doctor => "doctor_id",
            EntityKind::Appointment => "appointment_id",
            EntityKind::Activity => "activity_id",
        }
    }

    /// Field shown when another collection references this kind.
    pub fn display_field(&self) -> &'static str {
        match self {
            EntityKind::Patient => "full_name",
            EntityKind::Doctor => "full_name",
            EntityKind::Appointment => "appointment_id",
            EntityKind::Activity => "title",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}
