//! Field definitions and record field values.
//!
//! A collection's schema is an ordered list of [`FieldDef`]s; records are
//! written as [`FieldValues`] maps and read back as [`StoredRecord`]s carrying
//! the store-assigned [`StorageId`].

use crate::kind::EntityKind;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier assigned by the backing store when a record is
/// persisted. Used only for reference-field linking and deletion, never
/// shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageId(pub String);

impl StorageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single field value as submitted to the store.
///
/// Computed fields never appear here: the store derives them from the
/// schema's formula at record-construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    DateTime(DateTime<Utc>),
    Bool(bool),
    /// Link to a record of another kind by its storage identifier.
    Reference(StorageId),
}

impl FieldValue {
    /// The string form used when a formula references this field.
    pub fn as_display_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Reference(id) => id.0.clone(),
        }
    }
}

/// Field values keyed by field name. Ordered so renders are deterministic.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// One term of a computed-field formula.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaTerm {
    /// Substitute the named field's value.
    Field(String),
    /// A literal fragment, inserted verbatim.
    Literal(String),
}

/// A computed-field derivation: the concatenation of its terms.
///
/// Formulas are pure and may only reference fields defined earlier in the
/// schema, which is what lets the provisioner add computed fields after
/// their dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula(pub Vec<FormulaTerm>);

impl Formula {
    /// Concatenation of a field, a literal separator, and another field.
    /// Covers every computed field in the schema.
    pub fn concat(terms: Vec<FormulaTerm>) -> Self {
        Formula(terms)
    }

    /// Names of the fields this formula depends on.
    pub fn field_refs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|t| match t {
            FormulaTerm::Field(name) => Some(name.as_str()),
            FormulaTerm::Literal(_) => None,
        })
    }

    /// Evaluate the formula against a record's field values.
    ///
    /// Returns `None` when a referenced field is absent from the record.
    pub fn evaluate(&self, values: &FieldValues) -> Option<String> {
        let mut out = String::new();
        for term in &self.0 {
            match term {
                FormulaTerm::Literal(s) => out.push_str(s),
                FormulaTerm::Field(name) => {
                    out.push_str(&values.get(name)?.as_display_text());
                }
            }
        }
        Some(out)
    }
}

/// The type of a declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Text,
    DateTime,
    Bool,
    /// Free text constrained to a closed pool of values.
    Choice { choices: Vec<String> },
    /// Derived from other fields; never settable directly.
    Computed { formula: Formula },
    /// Link to another collection, displayed via that collection's
    /// `display_field`.
    Reference {
        target: EntityKind,
        display_field: String,
    },
}

/// A single field declaration within a collection schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Unique fields are also indexed by the store.
    pub unique: bool,
}

impl FieldDef {
    fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            unique: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    pub fn choice(name: impl Into<String>, choices: Vec<String>) -> Self {
        Self::new(name, FieldType::Choice { choices })
    }

    pub fn computed(name: impl Into<String>, formula: Formula) -> Self {
        Self::new(name, FieldType::Computed { formula })
    }

    pub fn reference(name: impl Into<String>, target: EntityKind) -> Self {
        Self::new(
            name,
            FieldType::Reference {
                display_field: target.display_field().to_string(),
                target,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A record as read back from the store: its storage identifier plus a JSON
/// view of its fields (computed fields included).
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: StorageId,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl StoredRecord {
    /// Text value of a field, if present and textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }
}
