//! Business-identifier formatting.

use seed_core::EntityKind;

/// Format the business identifier for the `n`-th record of a kind.
///
/// Identifiers are the kind's prefix followed by `n` zero-padded to the
/// kind's width (`MRN00001`, `DOC0001`, `APP000001`, `ACT000001`).
/// Sequence numbers wider than the padding simply widen the digits; they
/// are never truncated or wrapped, so the mapping stays injective.
pub fn business_id(kind: EntityKind, n: u32) -> String {
    format!("{}{:0width$}", kind.id_prefix(), n, width = kind.id_width())
}
