//! Relational synthetic-data generation for clinic-seed.
//!
//! This crate produces internally-consistent records for the four entity
//! kinds. Base kinds (patients, doctors) are generated from fixed value
//! pools; dependent kinds (appointments, activities) are generated only
//! after the base records have been persisted and read back, so every
//! reference resolves to a storage identifier that actually exists.
//!
//! # Pipeline
//!
//! ```text
//! patients/doctors ──persist──▶ list_records ──▶ ResolvedIds
//!                                                    │
//!                              appointments ◀────────┤ (round-robin links)
//!                                  │                 │
//!                               persist ──▶ list_records
//!                                                    │
//!                                activities ◀────────┘ (three cursors)
//! ```
//!
//! All sampling goes through a caller-supplied [`rand::Rng`]; seeding it
//! (`StdRng::seed_from_u64`) makes runs reproducible.

pub mod error;
pub mod identifier;
pub mod pools;
pub mod synth;
pub mod temporal;

// Re-exports for convenience
pub use error::SynthError;
pub use identifier::business_id;
pub use synth::{activities, appointments, doctors, patients, SynthCounts};
pub use temporal::sample_business_hours;
