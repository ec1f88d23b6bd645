//! Error types for the synthesizer.

use chrono::{DateTime, Utc};
use seed_core::EntityKind;

/// Errors that can occur while synthesizing records.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// The sampled date range is empty or inverted.
    #[error("date range is empty: start {start} is not before end {end}")]
    EmptyDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A round-robin source collection has no persisted records.
    ///
    /// Fatal for the dependent kind: assigning references by index modulo
    /// zero is undefined, so synthesis must not proceed.
    #[error("cannot synthesize {dependent}: no persisted {source_kind} records to assign")]
    EmptySource {
        dependent: EntityKind,
        source_kind: EntityKind,
    },
}
