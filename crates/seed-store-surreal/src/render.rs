//! SurrealQL rendering for schema and record statements.

use chrono::SecondsFormat;
use seed_core::{
    EntityKind, FieldDef, FieldType, FieldValue, FieldValues, Formula, FormulaTerm, StorageId,
};

/// Escape a string for inclusion in a single-quoted SurrealQL literal.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

fn quoted(s: &str) -> String {
    format!("'{}'", escape(s))
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => quoted(s),
        FieldValue::DateTime(dt) => {
            format!("d'{}'", dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Reference(id) => render_reference(id),
    }
}

/// Render a storage identifier (`table:raw`) as a record-id expression.
fn render_reference(id: &StorageId) -> String {
    match id.as_str().split_once(':') {
        Some((table, raw)) => format!("type::thing({}, {})", quoted(table), quoted(raw)),
        None => quoted(id.as_str()),
    }
}

/// Render field values as a `CONTENT { ... }` object literal.
pub fn render_content(values: &FieldValues) -> String {
    let fields: Vec<String> = values
        .iter()
        .map(|(name, value)| format!("{name}: {}", render_value(value)))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

/// Render a computed-field formula as a SurrealQL expression over sibling
/// fields.
fn formula_expression(formula: &Formula) -> String {
    let terms: Vec<String> = formula
        .0
        .iter()
        .map(|term| match term {
            FormulaTerm::Field(name) => name.clone(),
            FormulaTerm::Literal(s) => quoted(s),
        })
        .collect();
    format!("string::concat({})", terms.join(", "))
}

fn wrap_optional(base: &str, required: bool) -> String {
    if required {
        base.to_string()
    } else {
        format!("option<{base}>")
    }
}

/// The `DEFINE FIELD` statement for a field definition.
pub fn define_field_statement(kind: EntityKind, field: &FieldDef) -> String {
    let table = kind.collection_name();
    let name = &field.name;
    match &field.field_type {
        FieldType::Text => format!(
            "DEFINE FIELD {name} ON {table} TYPE {};",
            wrap_optional("string", field.required)
        ),
        FieldType::DateTime => format!(
            "DEFINE FIELD {name} ON {table} TYPE {};",
            wrap_optional("datetime", field.required)
        ),
        FieldType::Bool => format!(
            "DEFINE FIELD {name} ON {table} TYPE {};",
            wrap_optional("bool", field.required)
        ),
        FieldType::Choice { choices } => {
            let pool: Vec<String> = choices.iter().map(|c| quoted(c)).collect();
            let assert = if field.required {
                format!("$value INSIDE [{}]", pool.join(", "))
            } else {
                format!("$value == NONE OR $value INSIDE [{}]", pool.join(", "))
            };
            format!(
                "DEFINE FIELD {name} ON {table} TYPE {} ASSERT {assert};",
                wrap_optional("string", field.required)
            )
        }
        FieldType::Computed { formula } => format!(
            "DEFINE FIELD {name} ON {table} TYPE string VALUE {};",
            formula_expression(formula)
        ),
        // The display-field binding has no DDL counterpart here: the record
        // link itself is what SurrealDB presents, and readers fetch the
        // target's display field through it.
        FieldType::Reference { target, .. } => format!(
            "DEFINE FIELD {name} ON {table} TYPE {};",
            wrap_optional(&format!("record<{}>", target.collection_name()), field.required)
        ),
    }
}

/// The UNIQUE index statement backing a unique field.
pub fn unique_index_statement(kind: EntityKind, field: &FieldDef) -> String {
    let table = kind.collection_name();
    format!(
        "DEFINE INDEX idx_{table}_{name} ON {table} FIELDS {name} UNIQUE;",
        name = field.name
    )
}

/// Extract a storage identifier from a record id as it appears in a JSON
/// response row. Depending on the SDK path this is either a plain
/// `"table:raw"` string or a `{ "tb": ..., "id": ... }` object.
pub fn thing_to_storage_id(value: &serde_json::Value) -> Option<StorageId> {
    match value {
        serde_json::Value::String(s) => Some(StorageId(s.clone())),
        serde_json::Value::Object(obj) => {
            let tb = obj.get("tb")?.as_str()?;
            let raw = match obj.get("id")? {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Object(inner) => inner
                    .get("String")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)?,
                other => other.to_string(),
            };
            Some(StorageId(format!("{tb}:{raw}")))
        }
        _ => None,
    }
}
