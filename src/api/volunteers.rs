use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use std::sync::Arc;

use crate::AppData;
use crate::errors::VolunteerError;
use crate::services::VolunteerValidator;
use crate::stores::VolunteerStore;
use crate::types::dto::volunteer::{
    CreateVolunteerResponse, Volunteer, VolunteerListResponse, VolunteerPayload,
};

/// Volunteer registration API endpoints
pub struct VolunteerApi {
    volunteer_store: Arc<VolunteerStore>,
    validator: VolunteerValidator,
}

impl VolunteerApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            volunteer_store: Arc::clone(&app_data.volunteer_store),
            validator: VolunteerValidator::new(),
        }
    }
}

/// API tags for volunteer endpoints
#[derive(Tags)]
enum ApiTags {
    /// Volunteer registration endpoints
    Volunteers,
}

#[OpenApi]
impl VolunteerApi {
    /// List all registered volunteers
    #[oai(path = "/users", method = "get", tag = "ApiTags::Volunteers")]
    async fn list_volunteers(&self) -> Result<Json<VolunteerListResponse>, VolunteerError> {
        let records = self
            .volunteer_store
            .list()
            .await
            .map_err(VolunteerError::from_internal_error)?;

        Ok(Json(VolunteerListResponse {
            users: records.into_iter().map(Volunteer::from).collect(),
        }))
    }

    /// Register a new volunteer
    ///
    /// The payload is validated before any persistence call; the store assigns
    /// the identifier.
    #[oai(path = "/users", method = "post", tag = "ApiTags::Volunteers")]
    async fn create_volunteer(
        &self,
        body: Json<VolunteerPayload>,
    ) -> Result<CreateVolunteerResponse, VolunteerError> {
        self.validator
            .validate(&body.0)
            .map_err(VolunteerError::validation_failed)?;

        self.volunteer_store
            .create(body.0)
            .await
            .map_err(VolunteerError::from_internal_error)?;

        Ok(CreateVolunteerResponse::Created)
    }

    /// Replace a volunteer record
    ///
    /// Full replacement: every field must be supplied, including unchanged
    /// ones. Validated with the same rules as create.
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Volunteers")]
    async fn update_volunteer(
        &self,
        id: Path<String>,
        body: Json<VolunteerPayload>,
    ) -> Result<Json<Volunteer>, VolunteerError> {
        self.validator
            .validate(&body.0)
            .map_err(VolunteerError::validation_failed)?;

        let updated = self
            .volunteer_store
            .update(&id.0, body.0)
            .await
            .map_err(VolunteerError::from_internal_error)?;

        Ok(Json(updated.into()))
    }

    /// Remove a volunteer record
    ///
    /// Returns the removed record's last known state.
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Volunteers")]
    async fn delete_volunteer(&self, id: Path<String>) -> Result<Json<Volunteer>, VolunteerError> {
        let removed = self
            .volunteer_store
            .delete(&id.0)
            .await
            .map_err(VolunteerError::from_internal_error)?;

        Ok(Json(removed.into()))
    }
}
