//! Schema provisioning and record ingestion for clinic-seed.
//!
//! [`provision_all`] guarantees the four collections exist with the declared
//! field sets (destructively recreating any that already exist), [`ingest`]
//! submits synthesized records one at a time with per-record failure
//! isolation, and [`clear_all`] wipes records in reverse dependency order.

pub mod clear;
pub mod ingest;
pub mod provision;

pub use clear::{clear_all, ClearReport};
pub use ingest::{ingest, IngestReport};
pub use provision::{provision_all, provision_collection};
