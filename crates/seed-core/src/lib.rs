//! Core types for the clinic-seed pipeline.
//!
//! This crate defines the four-entity data model (patients, doctors,
//! appointments, care-journey activities), the declared schema for each
//! backing collection, the [`ListStore`] trait the pipeline runs against,
//! and the [`ResolvedIds`] lookup that links dependent records to the
//! storage identifiers of previously persisted ones.

pub mod enums;
pub mod fields;
pub mod kind;
pub mod records;
pub mod resolve;
pub mod schema;
pub mod store;

// Re-exports for convenience
pub use enums::{
    ActivityDuration, ActivityPriority, ActivityType, AppointmentStatus, Department, Gender,
    PatientStatus, ServiceType, Specialization,
};
pub use fields::{
    FieldDef, FieldType, FieldValue, FieldValues, Formula, FormulaTerm, StorageId, StoredRecord,
};
pub use kind::EntityKind;
pub use records::{ActivityRecord, AppointmentRecord, DoctorRecord, PatientRecord, SeedRecord};
pub use resolve::{ResolveError, ResolvedIds};
pub use schema::{collection_schema, CollectionSchema};
pub use store::{ListStore, StoreError};
