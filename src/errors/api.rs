use crate::errors::internal::InternalError;
use crate::services::volunteer_validator::ValidationError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Per-field detail for a rejected payload
#[derive(Object, Debug)]
pub struct FieldErrorDetail {
    /// Wire name of the offending field
    pub field: String,

    /// Why the field was rejected
    pub reason: String,
}

/// Error response for payloads that fail validation
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// All fields that failed, with reasons
    pub fields: Vec<FieldErrorDetail>,
}

/// Volunteer endpoint error types
#[derive(ApiResponse, Debug)]
pub enum VolunteerError {
    /// Payload failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// No volunteer record with the given identifier
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Email already registered to another volunteer
    #[oai(status = 409)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl VolunteerError {
    /// Create a ValidationFailed error from validator output
    pub fn validation_failed(err: ValidationError) -> Self {
        VolunteerError::ValidationFailed(Json(ValidationErrorResponse {
            error: "validation_failed".to_string(),
            message: "Request payload failed validation".to_string(),
            status_code: 400,
            fields: err
                .fields
                .into_iter()
                .map(|f| FieldErrorDetail {
                    field: f.field,
                    reason: f.reason,
                })
                .collect(),
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        VolunteerError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Volunteer not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        VolunteerError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "A volunteer with this email is already registered".to_string(),
            status_code: 409,
        }))
    }

    /// Convert InternalError to VolunteerError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::NotFound(id) => {
                tracing::debug!("Volunteer not found: {}", id);
                Self::not_found()
            }
            InternalError::UniqueViolation { constraint } => {
                tracing::warn!("Unique constraint violated: {}", constraint);
                Self::duplicate_email()
            }
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        VolunteerError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            VolunteerError::ValidationFailed(json) => json.0.message.clone(),
            VolunteerError::NotFound(json) => json.0.message.clone(),
            VolunteerError::DuplicateEmail(json) => json.0.message.clone(),
            VolunteerError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for VolunteerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
