//! Patient record synthesis (phase A, no references).

use crate::error::SynthError;
use crate::identifier::business_id;
use crate::pools::{CITIES, FIRST_NAMES, LAST_NAMES, MEDICAL_HISTORIES, STREETS};
use crate::synth::pick;
use crate::temporal::sample_business_hours;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use seed_core::{EntityKind, Gender, PatientRecord, PatientStatus};

/// Patients must be between 18 and 50 years old at generation time.
const MIN_AGE_YEARS: i64 = 18;
const MAX_AGE_YEARS: i64 = 50;

/// Generate `count` patient records. Business identifiers are assigned
/// sequentially from 1.
pub fn patients<R: Rng>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Result<Vec<PatientRecord>, SynthError> {
    let dob_start = now - Duration::days(MAX_AGE_YEARS * 365);
    let dob_end = now - Duration::days(MIN_AGE_YEARS * 365);

    (1..=count as u32)
        .map(|n| {
            let first_name = pick(rng, &FIRST_NAMES).to_string();
            let last_name = pick(rng, &LAST_NAMES).to_string();
            let date_of_birth = sample_business_hours(rng, dob_start, dob_end)?;
            Ok(PatientRecord {
                patient_id: business_id(EntityKind::Patient, n),
                email: format!(
                    "{}.{}{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    n
                ),
                contact_number: format!(
                    "+1-555-{:03}-{:04}",
                    rng.gen_range(100..1000),
                    rng.gen_range(0..10000)
                ),
                address: format!(
                    "{} {}, {}",
                    rng.gen_range(1..200),
                    pick(rng, &STREETS),
                    pick(rng, &CITIES)
                ),
                medical_history: pick(rng, &MEDICAL_HISTORIES).to_string(),
                gender: *pick(rng, Gender::ALL),
                status: *pick(rng, PatientStatus::ALL),
                first_name,
                last_name,
                date_of_birth,
            })
        })
        .collect()
}
