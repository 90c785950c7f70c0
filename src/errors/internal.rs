use thiserror::Error;

/// Internal error type for store operations
///
/// Not exposed via API - endpoints must convert to VolunteerError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("No volunteer record with id {0}")]
    NotFound(String),

    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },
}

impl InternalError {
    /// Wrap a SeaORM error from a named store operation
    ///
    /// Unique constraint violations are recognized here so that callers can
    /// surface them as a client error instead of a generic server error.
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        match source.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(constraint)) => {
                InternalError::UniqueViolation { constraint }
            }
            _ => InternalError::Database {
                operation: operation.to_string(),
                source,
            },
        }
    }
}
