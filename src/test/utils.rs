// Test utilities shared across unit tests
// Only compiled when running tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use crate::stores::VolunteerStore;
use crate::types::dto::volunteer::VolunteerPayload;

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a test database and a store backed by it
pub async fn setup_test_store() -> (DatabaseConnection, Arc<VolunteerStore>) {
    let db = setup_test_db().await;
    let store = Arc::new(VolunteerStore::new(db.clone()));
    (db, store)
}

/// A fully valid volunteer payload for tests to start from
pub fn sample_payload() -> VolunteerPayload {
    VolunteerPayload {
        name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: "ana@x.org".to_string(),
        cpf: "123".to_string(),
        birth_date: "1990-01-01".to_string(),
        phone_number: "+550000".to_string(),
        volunteer_type: "medical".to_string(),
        crm: "12345".to_string(),
        area: "cardiology".to_string(),
        state: "SP".to_string(),
        availability: "weekends".to_string(),
        notes: None,
    }
}
