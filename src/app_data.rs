use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::stores::VolunteerStore;

/// Centralized application data following the main-owned stores pattern
///
/// The database connection is opened once in main.rs, wrapped here, and the
/// resulting `Arc<AppData>` is passed explicitly into the API constructors.
/// No request handler reaches for global state.
pub struct AppData {
    pub db: DatabaseConnection,
    pub volunteer_store: Arc<VolunteerStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The connection should be established and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Initializing AppData");

        let volunteer_store = Arc::new(VolunteerStore::new(db.clone()));

        Self {
            db,
            volunteer_store,
        }
    }
}
