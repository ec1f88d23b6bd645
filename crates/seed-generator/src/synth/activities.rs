//! Care-journey activity synthesis (phase B, second dependent tier).

use crate::error::SynthError;
use crate::identifier::business_id;
use crate::synth::{link, pick};
use crate::temporal::sample_business_hours;
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use seed_core::{
    ActivityPriority, ActivityRecord, ActivityType, EntityKind, ResolvedIds, StoredRecord,
};
use seed_core::ActivityDuration;
use tracing::warn;

/// Activity timestamps are sampled from this fixed historical window,
/// independent of the run time.
fn activity_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(2025, 1, 5, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let end = Utc
        .with_ymd_and_hms(2025, 6, 27, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    (start, end)
}

/// Generate `count` activities, assigning an appointment, a patient, and a
/// doctor to each via three independent round-robin cursors driven by the
/// shared loop index. Keeping the cursors independent (rather than a joint
/// draw) preserves even coverage of each source list.
pub fn activities<R: Rng>(
    rng: &mut R,
    count: usize,
    appointments: &[StoredRecord],
    patients: &[StoredRecord],
    doctors: &[StoredRecord],
    ids: &ResolvedIds,
) -> Result<Vec<ActivityRecord>, SynthError> {
    for (source, records) in [
        (EntityKind::Appointment, appointments),
        (EntityKind::Patient, patients),
        (EntityKind::Doctor, doctors),
    ] {
        if records.is_empty() {
            return Err(SynthError::EmptySource {
                dependent: EntityKind::Activity,
                source_kind: source,
            });
        }
    }

    let (window_start, window_end) = activity_window();
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let activity_id = business_id(EntityKind::Activity, i as u32 + 1);

        let linked = link(ids, EntityKind::Appointment, &appointments[i % appointments.len()])
            .and_then(|appointment| {
                let patient = link(ids, EntityKind::Patient, &patients[i % patients.len()])?;
                let doctor = link(ids, EntityKind::Doctor, &doctors[i % doctors.len()])?;
                Ok((appointment, patient, doctor))
            });
        let ((appointment, appointment_label), (patient, patient_name), (doctor, _)) = match linked
        {
            Ok(linked) => linked,
            Err(e) => {
                warn!("Skipping activity {activity_id}: {e}");
                continue;
            }
        };

        let activity_time = sample_business_hours(rng, window_start, window_end)?;
        let activity_type = *pick(rng, ActivityType::ALL);
        let priority = *pick(rng, ActivityPriority::ALL);
        let duration = *pick(rng, ActivityDuration::ALL);

        out.push(ActivityRecord {
            notes: format!(
                "{activity_type} for {patient_name}, linked to {appointment_label}; expected duration {} minutes.",
                duration.minutes()
            ),
            doctor: Some(doctor),
            activity_id,
            activity_time,
            activity_type,
            priority,
            duration,
            patient,
            appointment,
        });
    }
    Ok(out)
}
