//! Appointment synthesis (phase B, references patients and doctors).

use crate::error::SynthError;
use crate::identifier::business_id;
use crate::synth::{link, pick};
use crate::temporal::QUARTER_HOURS;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use seed_core::{
    AppointmentRecord, AppointmentStatus, EntityKind, ResolvedIds, ServiceType, StoredRecord,
};
use tracing::warn;

/// Fixed appointment duration.
pub const APPOINTMENT_MINUTES: i64 = 45;

/// Appointments are scheduled within this many days of the run time.
pub const SCHEDULING_WINDOW_DAYS: i64 = 30;

/// Generate `count` appointments, assigning a patient and a doctor to each
/// by round-robin over the persisted lists so every persisted record is
/// referenced at least once when `count` is large enough.
///
/// A record whose reference cannot be resolved is logged and skipped; the
/// rest of the batch continues.
pub fn appointments<R: Rng>(
    rng: &mut R,
    count: usize,
    patients: &[StoredRecord],
    doctors: &[StoredRecord],
    ids: &ResolvedIds,
    now: DateTime<Utc>,
) -> Result<Vec<AppointmentRecord>, SynthError> {
    if patients.is_empty() {
        return Err(SynthError::EmptySource {
            dependent: EntityKind::Appointment,
            source_kind: EntityKind::Patient,
        });
    }
    if doctors.is_empty() {
        return Err(SynthError::EmptySource {
            dependent: EntityKind::Appointment,
            source_kind: EntityKind::Doctor,
        });
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let appointment_id = business_id(EntityKind::Appointment, i as u32 + 1);

        let (patient, patient_name) =
            match link(ids, EntityKind::Patient, &patients[i % patients.len()]) {
                Ok(linked) => linked,
                Err(e) => {
                    warn!("Skipping appointment {appointment_id}: {e}");
                    continue;
                }
            };
        let (doctor, doctor_name) = match link(ids, EntityKind::Doctor, &doctors[i % doctors.len()])
        {
            Ok(linked) => linked,
            Err(e) => {
                warn!("Skipping appointment {appointment_id}: {e}");
                continue;
            }
        };

        let start_time = sample_start(rng, now);
        let service_type = *pick(rng, ServiceType::ALL);
        let status = *pick(
            rng,
            if start_time < now {
                AppointmentStatus::PAST_POOL
            } else {
                AppointmentStatus::FUTURE_POOL
            },
        );

        out.push(AppointmentRecord {
            notes: format!("{service_type} for {patient_name} with {doctor_name}."),
            end_time: start_time + Duration::minutes(APPOINTMENT_MINUTES),
            urgent: rng.gen_range(1..=10) <= 2,
            appointment_id,
            start_time,
            service_type,
            status,
            patient,
            doctor,
        });
    }
    Ok(out)
}

/// Start time sampled uniformly over the next `SCHEDULING_WINDOW_DAYS` days:
/// any hour of the day at quarter-hour granularity. Unlike activity
/// timestamps, no business-hour constraint applies here.
fn sample_start<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let day = rng.gen_range(0..SCHEDULING_WINDOW_DAYS);
    let hour = rng.gen_range(0..24);
    let minute = QUARTER_HOURS[rng.gen_range(0..QUARTER_HOURS.len())];
    let date = now.date_naive() + Duration::days(day);
    date.and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc())
}
