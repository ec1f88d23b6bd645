//! In-memory record types produced by the synthesizer.
//!
//! Each record type knows how to lower itself into the [`FieldValues`] map
//! submitted to the store. Computed fields (`full_name`, `title`) are never
//! set here; the store derives them from the schema formulas so display
//! values cannot drift from their source fields.

use crate::enums::*;
use crate::fields::{FieldValue, FieldValues, StorageId};
use crate::kind::EntityKind;
use chrono::{DateTime, Utc};

/// A synthesized record that can be submitted to the store.
pub trait SeedRecord {
    /// Collection this record belongs to.
    const KIND: EntityKind;

    /// Human-readable label used when logging per-record failures.
    fn title(&self) -> String;

    /// Field values as submitted to the store (computed fields excluded).
    fn field_values(&self) -> FieldValues;
}

#[derive(Debug, Clone)]
pub struct PatientRecord {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub gender: Gender,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub medical_history: String,
    pub status: PatientStatus,
}

impl SeedRecord for PatientRecord {
    const KIND: EntityKind = EntityKind::Patient;

    fn title(&self) -> String {
        format!("{} ({} {})", self.patient_id, self.first_name, self.last_name)
    }

    fn field_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("patient_id".into(), FieldValue::Text(self.patient_id.clone()));
        values.insert("first_name".into(), FieldValue::Text(self.first_name.clone()));
        values.insert("last_name".into(), FieldValue::Text(self.last_name.clone()));
        values.insert("date_of_birth".into(), FieldValue::DateTime(self.date_of_birth));
        values.insert("gender".into(), FieldValue::Text(self.gender.as_str().into()));
        values.insert(
            "contact_number".into(),
            FieldValue::Text(self.contact_number.clone()),
        );
        values.insert("email".into(), FieldValue::Text(self.email.clone()));
        values.insert("address".into(), FieldValue::Text(self.address.clone()));
        values.insert(
            "medical_history".into(),
            FieldValue::Text(self.medical_history.clone()),
        );
        values.insert("status".into(), FieldValue::Text(self.status.as_str().into()));
        values
    }
}

#[derive(Debug, Clone)]
pub struct DoctorRecord {
    pub doctor_id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: Specialization,
    pub email: String,
    pub department: Department,
}

impl SeedRecord for DoctorRecord {
    const KIND: EntityKind = EntityKind::Doctor;

    fn title(&self) -> String {
        format!("{} (Dr. {} {})", self.doctor_id, self.first_name, self.last_name)
    }

    fn field_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("doctor_id".into(), FieldValue::Text(self.doctor_id.clone()));
        values.insert("first_name".into(), FieldValue::Text(self.first_name.clone()));
        values.insert("last_name".into(), FieldValue::Text(self.last_name.clone()));
        values.insert(
            "specialization".into(),
            FieldValue::Text(self.specialization.as_str().into()),
        );
        values.insert("email".into(), FieldValue::Text(self.email.clone()));
        values.insert(
            "department".into(),
            FieldValue::Text(self.department.as_str().into()),
        );
        values
    }
}

#[derive(Debug, Clone)]
pub struct AppointmentRecord {
    pub appointment_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
    pub urgent: bool,
    pub notes: String,
    pub patient: StorageId,
    pub doctor: StorageId,
}

impl SeedRecord for AppointmentRecord {
    const KIND: EntityKind = EntityKind::Appointment;

    fn title(&self) -> String {
        format!("{} ({})", self.appointment_id, self.service_type)
    }

    fn field_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert(
            "appointment_id".into(),
            FieldValue::Text(self.appointment_id.clone()),
        );
        values.insert("start_time".into(), FieldValue::DateTime(self.start_time));
        values.insert("end_time".into(), FieldValue::DateTime(self.end_time));
        values.insert(
            "service_type".into(),
            FieldValue::Text(self.service_type.as_str().into()),
        );
        values.insert("status".into(), FieldValue::Text(self.status.as_str().into()));
        values.insert("urgent".into(), FieldValue::Bool(self.urgent));
        values.insert("notes".into(), FieldValue::Text(self.notes.clone()));
        values.insert("patient".into(), FieldValue::Reference(self.patient.clone()));
        values.insert("doctor".into(), FieldValue::Reference(self.doctor.clone()));
        values
    }
}

#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub activity_id: String,
    pub activity_time: DateTime<Utc>,
    pub activity_type: ActivityType,
    pub priority: ActivityPriority,
    pub duration: ActivityDuration,
    pub notes: String,
    pub patient: StorageId,
    pub doctor: Option<StorageId>,
    pub appointment: StorageId,
}

impl SeedRecord for ActivityRecord {
    const KIND: EntityKind = EntityKind::Activity;

    fn title(&self) -> String {
        format!("{} ({})", self.activity_id, self.activity_type)
    }

    fn field_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("activity_id".into(), FieldValue::Text(self.activity_id.clone()));
        values.insert("activity_time".into(), FieldValue::DateTime(self.activity_time));
        values.insert(
            "activity_type".into(),
            FieldValue::Text(self.activity_type.as_str().into()),
        );
        values.insert(
            "priority".into(),
            FieldValue::Text(self.priority.as_str().into()),
        );
        values.insert(
            "duration_minutes".into(),
            FieldValue::Text(self.duration.as_str().into()),
        );
        values.insert("notes".into(), FieldValue::Text(self.notes.clone()));
        values.insert("patient".into(), FieldValue::Reference(self.patient.clone()));
        if let Some(doctor) = &self.doctor {
            values.insert("doctor".into(), FieldValue::Reference(doctor.clone()));
        }
        values.insert(
            "appointment".into(),
            FieldValue::Reference(self.appointment.clone()),
        );
        values
    }
}
