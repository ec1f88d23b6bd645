//! In-memory implementation of the clinic-seed list store.
//!
//! Implements the full store contract — schema bookkeeping, required/choice/
//! reference/unique validation, and computed-field evaluation — so the
//! pipeline and its tests can run without a server. Also backs `--dry-run`.

use async_trait::async_trait;
use seed_core::{
    EntityKind, FieldDef, FieldType, FieldValue, FieldValues, ListStore, StorageId, StoreError,
    StoredRecord,
};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Collection {
    fields: Vec<FieldDef>,
    records: Vec<(StorageId, FieldValues)>,
}

impl Collection {
    fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// In-memory list store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<EntityKind, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<EntityKind, Collection>> {
        // No operation holds the lock across a panic boundary worth
        // preserving; recover the inner value rather than poisoning forever.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of records currently stored for a kind (testing convenience).
    pub fn record_count(&self, kind: EntityKind) -> usize {
        self.lock().get(&kind).map_or(0, |c| c.records.len())
    }
}

fn validation(kind: EntityKind, message: impl Into<String>) -> StoreError {
    StoreError::Validation {
        collection: kind.collection_name(),
        message: message.into(),
    }
}

fn invalid_field(kind: EntityKind, field: &str, message: impl Into<String>) -> StoreError {
    StoreError::InvalidField {
        collection: kind.collection_name(),
        field: field.to_string(),
        message: message.into(),
    }
}

fn to_json(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        other => serde_json::Value::String(other.as_display_text()),
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn collection_exists(&self, kind: EntityKind) -> Result<bool, StoreError> {
        Ok(self.lock().contains_key(&kind))
    }

    async fn create_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
        let mut collections = self.lock();
        if collections.contains_key(&kind) {
            return Err(StoreError::Query(format!(
                "collection '{kind}' already exists"
            )));
        }
        collections.insert(kind, Collection::default());
        Ok(())
    }

    async fn delete_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
        self.lock()
            .remove(&kind)
            .map(|_| ())
            .ok_or(StoreError::NoSuchCollection(kind.collection_name()))
    }

    async fn add_field(&self, kind: EntityKind, field: &FieldDef) -> Result<(), StoreError> {
        let mut collections = self.lock();

        match &field.field_type {
            FieldType::Computed { formula } => {
                let collection = collections
                    .get(&kind)
                    .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;
                for dep in formula.field_refs() {
                    if collection.get_field(dep).is_none() {
                        return Err(invalid_field(
                            kind,
                            &field.name,
                            format!("formula references undefined field '{dep}'"),
                        ));
                    }
                }
            }
            FieldType::Reference { target, .. } => {
                if !collections.contains_key(target) {
                    return Err(invalid_field(
                        kind,
                        &field.name,
                        format!("reference target '{target}' is not provisioned"),
                    ));
                }
            }
            _ => {}
        }

        let collection = collections
            .get_mut(&kind)
            .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;
        if collection.get_field(&field.name).is_some() {
            return Err(invalid_field(kind, &field.name, "field already exists"));
        }
        collection.fields.push(field.clone());
        Ok(())
    }

    async fn create_record(
        &self,
        kind: EntityKind,
        values: &FieldValues,
    ) -> Result<StorageId, StoreError> {
        let mut collections = self.lock();

        let mut record = values.clone();
        {
            let collection = collections
                .get(&kind)
                .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;

            for name in values.keys() {
                match collection.get_field(name) {
                    None => {
                        return Err(validation(kind, format!("no such field '{name}'")));
                    }
                    Some(def) if matches!(def.field_type, FieldType::Computed { .. }) => {
                        return Err(validation(
                            kind,
                            format!("computed field '{name}' cannot be set directly"),
                        ));
                    }
                    Some(_) => {}
                }
            }

            for def in &collection.fields {
                let value = values.get(&def.name);
                match (&def.field_type, value) {
                    (FieldType::Computed { formula }, _) => {
                        let computed = formula.evaluate(values).ok_or_else(|| {
                            validation(
                                kind,
                                format!("cannot compute '{}': missing dependency", def.name),
                            )
                        })?;
                        record.insert(def.name.clone(), FieldValue::Text(computed));
                    }
                    (_, None) => {
                        if def.required {
                            return Err(validation(
                                kind,
                                format!("required field '{}' is missing", def.name),
                            ));
                        }
                    }
                    (FieldType::Text, Some(FieldValue::Text(_))) => {}
                    (FieldType::DateTime, Some(FieldValue::DateTime(_))) => {}
                    (FieldType::Bool, Some(FieldValue::Bool(_))) => {}
                    (FieldType::Choice { choices }, Some(FieldValue::Text(text))) => {
                        if !choices.contains(text) {
                            return Err(validation(
                                kind,
                                format!("'{text}' is not a valid choice for '{}'", def.name),
                            ));
                        }
                    }
                    (FieldType::Reference { target, .. }, Some(FieldValue::Reference(id))) => {
                        let target_exists = collections
                            .get(target)
                            .map_or(false, |c| c.records.iter().any(|(rid, _)| rid == id));
                        if !target_exists {
                            return Err(validation(
                                kind,
                                format!("reference '{}' points at missing {target} record {id}", def.name),
                            ));
                        }
                    }
                    (_, Some(other)) => {
                        return Err(validation(
                            kind,
                            format!("wrong value type for field '{}': {other:?}", def.name),
                        ));
                    }
                }

                if def.unique {
                    if let Some(new_value) = values.get(&def.name) {
                        let duplicate = collection
                            .records
                            .iter()
                            .any(|(_, existing)| existing.get(&def.name) == Some(new_value));
                        if duplicate {
                            return Err(validation(
                                kind,
                                format!("duplicate value for unique field '{}'", def.name),
                            ));
                        }
                    }
                }
            }
        }

        let id = StorageId(format!(
            "{}:{}",
            kind.collection_name(),
            Uuid::new_v4().simple()
        ));
        let collection = collections
            .get_mut(&kind)
            .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;
        collection.records.push((id.clone(), record));
        Ok(id)
    }

    async fn list_records(&self, kind: EntityKind) -> Result<Vec<StoredRecord>, StoreError> {
        let collections = self.lock();
        let collection = collections
            .get(&kind)
            .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;

        let mut records: Vec<StoredRecord> = collection
            .records
            .iter()
            .map(|(id, values)| {
                let fields = values
                    .iter()
                    .map(|(name, value)| (name.clone(), to_json(value)))
                    .collect();
                StoredRecord {
                    id: id.clone(),
                    fields,
                }
            })
            .collect();

        let id_field = kind.id_field();
        records.sort_by(|a, b| a.text(id_field).cmp(&b.text(id_field)));
        Ok(records)
    }

    async fn delete_record(&self, kind: EntityKind, id: &StorageId) -> Result<(), StoreError> {
        let mut collections = self.lock();
        let collection = collections
            .get_mut(&kind)
            .ok_or(StoreError::NoSuchCollection(kind.collection_name()))?;
        let before = collection.records.len();
        collection.records.retain(|(rid, _)| rid != id);
        if collection.records.len() == before {
            return Err(StoreError::Query(format!(
                "no {kind} record with id {id}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use seed_core::{collection_schema, Formula, FormulaTerm};

    async fn provisioned(kind: EntityKind, store: &MemoryStore) {
        store.create_collection(kind).await.unwrap();
        for field in collection_schema(kind).fields {
            store.add_field(kind, &field).await.unwrap();
        }
    }

    fn patient_values(n: u32) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("patient_id".into(), FieldValue::Text(format!("MRN{n:05}")));
        values.insert("first_name".into(), FieldValue::Text("Ada".into()));
        values.insert("last_name".into(), FieldValue::Text("Lovelace".into()));
        values.insert("date_of_birth".into(), FieldValue::DateTime(Utc::now()));
        values.insert("gender".into(), FieldValue::Text("Female".into()));
        values.insert("contact_number".into(), FieldValue::Text("+1-555-101-2020".into()));
        values.insert("email".into(), FieldValue::Text("ada@example.com".into()));
        values.insert("address".into(), FieldValue::Text("1 Oak Street, Springfield".into()));
        values.insert(
            "medical_history".into(),
            FieldValue::Text("No significant prior history.".into()),
        );
        values.insert("status".into(), FieldValue::Text("New".into()));
        values
    }

    #[tokio::test]
    async fn test_computed_field_is_materialized() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;

        store
            .create_record(EntityKind::Patient, &patient_values(1))
            .await
            .unwrap();

        let records = store.list_records(EntityKind::Patient).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("full_name"), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_computed_field_cannot_be_set_directly() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;

        let mut values = patient_values(1);
        values.insert("full_name".into(), FieldValue::Text("Impostor".into()));
        let err = store
            .create_record(EntityKind::Patient, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_missing_required_field_fails_validation() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;

        let mut values = patient_values(1);
        values.remove("email");
        let err = store
            .create_record(EntityKind::Patient, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_invalid_choice_fails_validation() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;

        let mut values = patient_values(1);
        values.insert("status".into(), FieldValue::Text("Abducted".into()));
        let err = store
            .create_record(EntityKind::Patient, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_business_id_fails_validation() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;

        store
            .create_record(EntityKind::Patient, &patient_values(1))
            .await
            .unwrap();
        let err = store
            .create_record(EntityKind::Patient, &patient_values(1))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_dangling_reference_fails_validation() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;
        provisioned(EntityKind::Doctor, &store).await;
        provisioned(EntityKind::Appointment, &store).await;

        let mut values = FieldValues::new();
        values.insert("appointment_id".into(), FieldValue::Text("APP000001".into()));
        values.insert("start_time".into(), FieldValue::DateTime(Utc::now()));
        values.insert("end_time".into(), FieldValue::DateTime(Utc::now()));
        values.insert("service_type".into(), FieldValue::Text("Lab Work".into()));
        values.insert("status".into(), FieldValue::Text("Scheduled".into()));
        values.insert("urgent".into(), FieldValue::Bool(false));
        values.insert("notes".into(), FieldValue::Text("n/a".into()));
        values.insert(
            "patient".into(),
            FieldValue::Reference(StorageId("patients:missing".into())),
        );
        values.insert(
            "doctor".into(),
            FieldValue::Reference(StorageId("doctors:missing".into())),
        );

        let err = store
            .create_record(EntityKind::Appointment, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_computed_field_requires_existing_dependencies() {
        let store = MemoryStore::new();
        store.create_collection(EntityKind::Patient).await.unwrap();

        let field = FieldDef::computed(
            "full_name",
            Formula::concat(vec![
                FormulaTerm::Field("first_name".into()),
                FormulaTerm::Literal(" ".into()),
                FormulaTerm::Field("last_name".into()),
            ]),
        );
        let err = store
            .add_field(EntityKind::Patient, &field)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { .. }));
    }

    #[tokio::test]
    async fn test_reference_field_requires_provisioned_target() {
        let store = MemoryStore::new();
        store
            .create_collection(EntityKind::Appointment)
            .await
            .unwrap();

        let field = FieldDef::reference("patient", EntityKind::Patient).required();
        let err = store
            .add_field(EntityKind::Appointment, &field)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { .. }));
    }

    #[tokio::test]
    async fn test_delete_collection_drops_records() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;
        store
            .create_record(EntityKind::Patient, &patient_values(1))
            .await
            .unwrap();

        store.delete_collection(EntityKind::Patient).await.unwrap();
        assert!(!store.collection_exists(EntityKind::Patient).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_records_orders_by_business_id() {
        let store = MemoryStore::new();
        provisioned(EntityKind::Patient, &store).await;
        store
            .create_record(EntityKind::Patient, &patient_values(2))
            .await
            .unwrap();
        store
            .create_record(EntityKind::Patient, &patient_values(1))
            .await
            .unwrap();

        let records = store.list_records(EntityKind::Patient).await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.text("patient_id")).collect();
        assert_eq!(ids, vec![Some("MRN00001"), Some("MRN00002")]);
    }
}
