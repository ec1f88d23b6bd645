//! Schema provisioning: idempotent create-or-recreate of the four
//! collections.
//!
//! A collection that already exists is destroyed and rebuilt rather than
//! migrated. The seeder owns only sample data, so losing prior records is
//! the intended trade against field-schema drift across runs.

use seed_core::{collection_schema, EntityKind, ListStore, StoreError};
use tracing::{debug, info};

/// Ensure the collection for `kind` exists with exactly the declared field
/// set, destroying any existing collection first.
///
/// Fields are added in schema order: business identifier, scalar/choice
/// fields, computed fields (after their dependencies), reference fields
/// (after their target collections — see [`provision_all`]).
pub async fn provision_collection<S: ListStore>(
    store: &S,
    kind: EntityKind,
) -> Result<(), StoreError> {
    if store.collection_exists(kind).await? {
        info!("Collection '{kind}' already exists, recreating it");
        store.delete_collection(kind).await?;
    }
    store.create_collection(kind).await?;

    let schema = collection_schema(kind);
    for field in &schema.fields {
        debug!("Adding field '{}' to '{kind}'", field.name);
        store.add_field(kind, field).await?;
    }

    info!(
        "Provisioned collection '{kind}' with {} fields",
        schema.fields.len()
    );
    Ok(())
}

/// Provision all four collections in dependency order, so that reference
/// fields always bind to an already-provisioned target.
pub async fn provision_all<S: ListStore>(store: &S) -> Result<(), StoreError> {
    for kind in EntityKind::PROVISIONING_ORDER {
        provision_collection(store, kind).await?;
    }
    Ok(())
}
