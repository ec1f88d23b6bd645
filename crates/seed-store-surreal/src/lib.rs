//! SurrealDB-backed implementation of the clinic-seed list store.
//!
//! Collections map to SCHEMAFULL tables, choice fields to `ASSERT $value
//! INSIDE [...]` constraints, computed fields to `DEFINE FIELD ... VALUE`
//! expressions (so the database derives them and they can never be set
//! directly), reference fields to `record<target>` links, and unique
//! business identifiers to UNIQUE indexes.

mod render;

use async_trait::async_trait;
use render::{
    define_field_statement, render_content, thing_to_storage_id, unique_index_statement,
};
use seed_core::{
    EntityKind, FieldDef, FieldValues, ListStore, StorageId, StoreError, StoredRecord,
};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

/// SurrealDB list store.
pub struct SurrealStore {
    client: Surreal<Any>,
}

impl SurrealStore {
    /// Wrap an existing connection (already signed in and namespaced).
    pub fn new(client: Surreal<Any>) -> Self {
        Self { client }
    }

    /// Connect to a SurrealDB endpoint, authenticate as root, and select
    /// the namespace/database to seed.
    pub async fn connect(
        endpoint: &str,
        username: &str,
        password: &str,
        namespace: &str,
        database: &str,
    ) -> Result<Self, StoreError> {
        // Convert http:// to ws:// for WebSocket connection
        let ws_endpoint = endpoint
            .replace("http://", "ws://")
            .replace("https://", "wss://");

        tracing::debug!("Connecting to SurrealDB at {}", ws_endpoint);

        let client = surrealdb::engine::any::connect(&ws_endpoint)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        client
            .signin(surrealdb::opt::auth::Root { username, password })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        client
            .use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying Surreal client.
    pub fn inner(&self) -> &Surreal<Any> {
        &self.client
    }

    async fn execute(&self, sql: &str) -> Result<surrealdb::Response, StoreError> {
        tracing::debug!("Executing: {sql}");
        self.client
            .query(sql)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[async_trait]
impl ListStore for SurrealStore {
    async fn collection_exists(&self, kind: EntityKind) -> Result<bool, StoreError> {
        let mut result = self.execute("INFO FOR DB;").await?;
        let info: Option<serde_json::Value> = result
            .take(0)
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if let Some(info) = info {
            if let Some(tables) = info.get("tables").and_then(|t| t.as_object()) {
                return Ok(tables.contains_key(kind.collection_name()));
            }
        }
        Ok(false)
    }

    async fn create_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
        self.execute(&format!(
            "DEFINE TABLE {} SCHEMAFULL;",
            kind.collection_name()
        ))
        .await?
        .check()
        .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn delete_collection(&self, kind: EntityKind) -> Result<(), StoreError> {
        self.execute(&format!("REMOVE TABLE {};", kind.collection_name()))
            .await?
            .check()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn add_field(&self, kind: EntityKind, field: &FieldDef) -> Result<(), StoreError> {
        self.execute(&define_field_statement(kind, field))
            .await?
            .check()
            .map_err(|e| StoreError::InvalidField {
                collection: kind.collection_name(),
                field: field.name.clone(),
                message: e.to_string(),
            })?;

        if field.unique {
            self.execute(&unique_index_statement(kind, field))
                .await?
                .check()
                .map_err(|e| StoreError::InvalidField {
                    collection: kind.collection_name(),
                    field: field.name.clone(),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }

    async fn create_record(
        &self,
        kind: EntityKind,
        values: &FieldValues,
    ) -> Result<StorageId, StoreError> {
        let sql = format!(
            "CREATE {} CONTENT {};",
            kind.collection_name(),
            render_content(values)
        );
        let mut result = self.execute(&sql).await?;

        // A constraint violation surfaces as a statement error on take.
        let created: Option<serde_json::Value> =
            result.take(0).map_err(|e| StoreError::Validation {
                collection: kind.collection_name(),
                message: e.to_string(),
            })?;

        created
            .as_ref()
            .and_then(|record| record.get("id"))
            .and_then(thing_to_storage_id)
            .ok_or_else(|| StoreError::Query(format!(
                "store returned no id for created {kind} record"
            )))
    }

    async fn list_records(&self, kind: EntityKind) -> Result<Vec<StoredRecord>, StoreError> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY {} ASC;",
            kind.collection_name(),
            kind.id_field()
        );
        let mut result = self.execute(&sql).await?;
        let rows: Vec<serde_json::Value> = result
            .take(0)
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let serde_json::Value::Object(mut fields) = row else {
                return Err(StoreError::Query(format!(
                    "unexpected non-object row in {kind}"
                )));
            };
            let id = fields
                .remove("id")
                .as_ref()
                .and_then(thing_to_storage_id)
                .ok_or_else(|| {
                    StoreError::Query(format!("record in {kind} has no usable id"))
                })?;
            records.push(StoredRecord { id, fields });
        }
        Ok(records)
    }

    async fn delete_record(&self, kind: EntityKind, id: &StorageId) -> Result<(), StoreError> {
        let raw = id
            .as_str()
            .split_once(':')
            .map(|(_, raw)| raw)
            .unwrap_or(id.as_str());
        let sql = format!(
            "DELETE type::thing('{}', '{}');",
            kind.collection_name(),
            render::escape(raw)
        );
        self.execute(&sql)
            .await?
            .check()
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::{collection_schema, FieldValue};

    async fn mem_store() -> SurrealStore {
        let client = surrealdb::engine::any::connect("mem://")
            .await
            .expect("embedded engine");
        client
            .use_ns("test")
            .use_db("test")
            .await
            .expect("namespace selection");
        SurrealStore::new(client)
    }

    async fn provision(store: &SurrealStore, kind: EntityKind) {
        store.create_collection(kind).await.unwrap();
        for field in collection_schema(kind).fields {
            store.add_field(kind, &field).await.unwrap();
        }
    }

    fn doctor_values(n: u32) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("doctor_id".into(), FieldValue::Text(format!("DOC{n:04}")));
        values.insert("first_name".into(), FieldValue::Text("Gregory".into()));
        values.insert("last_name".into(), FieldValue::Text("Wilson".into()));
        values.insert("specialization".into(), FieldValue::Text("Neurology".into()));
        values.insert(
            "email".into(),
            FieldValue::Text("g.wilson@clinic.example.com".into()),
        );
        values.insert("department".into(), FieldValue::Text("Diagnostics".into()));
        values
    }

    #[tokio::test]
    async fn test_collection_lifecycle() {
        let store = mem_store().await;
        assert!(!store.collection_exists(EntityKind::Doctor).await.unwrap());

        provision(&store, EntityKind::Doctor).await;
        assert!(store.collection_exists(EntityKind::Doctor).await.unwrap());

        store.delete_collection(EntityKind::Doctor).await.unwrap();
        assert!(!store.collection_exists(EntityKind::Doctor).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_and_list_materializes_computed_full_name() {
        let store = mem_store().await;
        provision(&store, EntityKind::Doctor).await;

        let id = store
            .create_record(EntityKind::Doctor, &doctor_values(1))
            .await
            .unwrap();
        assert!(id.as_str().starts_with("doctors:"));

        let records = store.list_records(EntityKind::Doctor).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("doctor_id"), Some("DOC0001"));
        assert_eq!(records[0].text("full_name"), Some("Dr. Gregory Wilson"));
    }

    #[tokio::test]
    async fn test_invalid_choice_is_rejected() {
        let store = mem_store().await;
        provision(&store, EntityKind::Doctor).await;

        let mut values = doctor_values(1);
        values.insert("department".into(), FieldValue::Text("Cafeteria".into()));
        let err = store
            .create_record(EntityKind::Doctor, &values)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_business_id_is_rejected() {
        let store = mem_store().await;
        provision(&store, EntityKind::Doctor).await;

        store
            .create_record(EntityKind::Doctor, &doctor_values(1))
            .await
            .unwrap();
        let err = store
            .create_record(EntityKind::Doctor, &doctor_values(1))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_record() {
        let store = mem_store().await;
        provision(&store, EntityKind::Doctor).await;

        let id = store
            .create_record(EntityKind::Doctor, &doctor_values(1))
            .await
            .unwrap();
        store.delete_record(EntityKind::Doctor, &id).await.unwrap();
        assert!(store
            .list_records(EntityKind::Doctor)
            .await
            .unwrap()
            .is_empty());
    }
}
