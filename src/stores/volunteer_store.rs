use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::volunteer::{self, Entity as Volunteer};
use crate::types::dto::volunteer::VolunteerPayload;

/// VolunteerStore manages volunteer records in the database
///
/// The store owns identifier assignment (UUID v4 at insert) and keeps the
/// mutating operations conditional on the row still existing, so callers
/// never do a separate existence check before an update or delete.
pub struct VolunteerStore {
    db: DatabaseConnection,
}

impl VolunteerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all volunteer records, in whatever order the database returns them
    pub async fn list(&self) -> Result<Vec<volunteer::Model>, InternalError> {
        Volunteer::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_volunteers", e))
    }

    /// Fetch a single record by identifier
    pub async fn find_by_id(&self, id: &str) -> Result<Option<volunteer::Model>, InternalError> {
        Volunteer::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_volunteer", e))
    }

    /// Insert a new volunteer record, assigning its identifier
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record, including the generated id
    /// * `Err(InternalError)` - UniqueViolation on duplicate email, Database otherwise
    pub async fn create(
        &self,
        payload: VolunteerPayload,
    ) -> Result<volunteer::Model, InternalError> {
        let now = Utc::now().timestamp();

        let record = volunteer::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(payload.name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            cpf: Set(payload.cpf),
            birth_date: Set(payload.birth_date),
            phone_number: Set(payload.phone_number),
            volunteer_type: Set(payload.volunteer_type),
            crm: Set(payload.crm),
            area: Set(payload.area),
            state: Set(payload.state),
            availability: Set(payload.availability),
            notes: Set(payload.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        record
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_volunteer", e))
    }

    /// Replace every mutable field of an existing record
    ///
    /// Runs a single conditional UPDATE keyed on the identifier; a zero
    /// affected-row count means the record does not exist, with no separate
    /// existence check racing against concurrent deletes. The identifier and
    /// creation timestamp are never touched.
    pub async fn update(
        &self,
        id: &str,
        payload: VolunteerPayload,
    ) -> Result<volunteer::Model, InternalError> {
        let changes = volunteer::ActiveModel {
            name: Set(payload.name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            cpf: Set(payload.cpf),
            birth_date: Set(payload.birth_date),
            phone_number: Set(payload.phone_number),
            volunteer_type: Set(payload.volunteer_type),
            crm: Set(payload.crm),
            area: Set(payload.area),
            state: Set(payload.state),
            availability: Set(payload.availability),
            notes: Set(payload.notes),
            updated_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        let result = Volunteer::update_many()
            .set(changes)
            .filter(volunteer::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_volunteer", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::NotFound(id.to_string()));
        }

        // Reload for the response body. A concurrent delete landing between
        // the update and this read reports as not found.
        self.find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::NotFound(id.to_string()))
    }

    /// Remove a record, returning its last known state
    ///
    /// The delete itself is conditional on the identifier; if another request
    /// removed the row after our read, the zero affected-row count still maps
    /// to not found.
    pub async fn delete(&self, id: &str) -> Result<volunteer::Model, InternalError> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| InternalError::NotFound(id.to_string()))?;

        let result = Volunteer::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_volunteer", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::NotFound(id.to_string()));
        }

        Ok(existing)
    }
}
