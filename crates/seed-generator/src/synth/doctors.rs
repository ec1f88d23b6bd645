//! Doctor record synthesis (phase A, no references).

use crate::identifier::business_id;
use crate::pools::{FIRST_NAMES, LAST_NAMES};
use crate::synth::pick;
use rand::Rng;
use seed_core::{Department, DoctorRecord, EntityKind, Specialization};

/// Generate `count` doctor records. Business identifiers are assigned
/// sequentially from 1.
pub fn doctors<R: Rng>(rng: &mut R, count: usize) -> Vec<DoctorRecord> {
    (1..=count as u32)
        .map(|n| {
            let first_name = pick(rng, &FIRST_NAMES).to_string();
            let last_name = pick(rng, &LAST_NAMES).to_string();
            DoctorRecord {
                doctor_id: business_id(EntityKind::Doctor, n),
                email: format!(
                    "{}.{}@clinic.example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                specialization: *pick(rng, Specialization::ALL),
                department: *pick(rng, Department::ALL),
                first_name,
                last_name,
            }
        })
        .collect()
}
