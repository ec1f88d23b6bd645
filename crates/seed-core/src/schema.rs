//! Declared schema for each of the four collections.
//!
//! Field order within a schema is load-bearing for provisioning:
//! the business-identifier field comes first (unique, indexed, required),
//! then scalar/choice/free-text fields, then computed fields (whose formulas
//! only reference fields declared before them), then reference fields.

use crate::enums::*;
use crate::fields::{FieldDef, Formula, FormulaTerm};
use crate::kind::EntityKind;

/// A collection's full declared field set, in provisioning order.
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    pub kind: EntityKind,
    pub fields: Vec<FieldDef>,
}

impl CollectionSchema {
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn full_name(prefix: Option<&str>) -> Formula {
    let mut terms = Vec::new();
    if let Some(p) = prefix {
        terms.push(FormulaTerm::Literal(p.to_string()));
    }
    terms.push(FormulaTerm::Field("first_name".into()));
    terms.push(FormulaTerm::Literal(" ".into()));
    terms.push(FormulaTerm::Field("last_name".into()));
    Formula::concat(terms)
}

/// The declared schema for the given entity kind.
pub fn collection_schema(kind: EntityKind) -> CollectionSchema {
    let fields = match kind {
        EntityKind::Patient => vec![
            FieldDef::text("patient_id").required().unique(),
            FieldDef::text("first_name").required(),
            FieldDef::text("last_name").required(),
            FieldDef::datetime("date_of_birth").required(),
            FieldDef::choice("gender", Gender::labels()).required(),
            FieldDef::text("contact_number").required(),
            FieldDef::text("email").required(),
            FieldDef::text("address").required(),
            FieldDef::text("medical_history").required(),
            FieldDef::choice("status", PatientStatus::labels()).required(),
            FieldDef::computed("full_name", full_name(None)),
        ],
        EntityKind::Doctor => vec![
            FieldDef::text("doctor_id").required().unique(),
            FieldDef::text("first_name").required(),
            FieldDef::text("last_name").required(),
            FieldDef::choice("specialization", Specialization::labels()).required(),
            FieldDef::text("email").required(),
            FieldDef::choice("department", Department::labels()).required(),
            FieldDef::computed("full_name", full_name(Some("Dr. "))),
        ],
        EntityKind::Appointment => vec![
            FieldDef::text("appointment_id").required().unique(),
            FieldDef::datetime("start_time").required(),
            FieldDef::datetime("end_time").required(),
            FieldDef::choice("service_type", ServiceType::labels()).required(),
            FieldDef::choice("status", AppointmentStatus::labels()).required(),
            FieldDef::boolean("urgent").required(),
            FieldDef::text("notes").required(),
            FieldDef::reference("patient", EntityKind::Patient).required(),
            FieldDef::reference("doctor", EntityKind::Doctor).required(),
        ],
        EntityKind::Activity => vec![
            FieldDef::text("activity_id").required().unique(),
            FieldDef::datetime("activity_time").required(),
            FieldDef::choice("activity_type", ActivityType::labels()).required(),
            FieldDef::choice("priority", ActivityPriority::labels()).required(),
            FieldDef::choice("duration_minutes", ActivityDuration::labels()).required(),
            FieldDef::text("notes").required(),
            FieldDef::computed(
                "title",
                Formula::concat(vec![
                    FormulaTerm::Field("activity_type".into()),
                    FormulaTerm::Literal(" - ".into()),
                    FormulaTerm::Field("priority".into()),
                ]),
            ),
            FieldDef::reference("patient", EntityKind::Patient).required(),
            FieldDef::reference("doctor", EntityKind::Doctor),
            FieldDef::reference("appointment", EntityKind::Appointment).required(),
        ],
    };
    CollectionSchema { kind, fields }
}
