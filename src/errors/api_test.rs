use crate::errors::{InternalError, VolunteerError};
use crate::services::volunteer_validator::{FieldError, ValidationError};
use sea_orm::DbErr;

#[test]
fn test_database_error_converts_to_internal_server_error() {
    let db_err = DbErr::Conn(sea_orm::RuntimeErr::Internal("connection lost".to_string()));
    let internal_err = InternalError::database("list_volunteers", db_err);
    let api_err = VolunteerError::from_internal_error(internal_err);

    assert_eq!(api_err.message(), "An internal error occurred");
}

#[test]
fn test_not_found_converts_correctly() {
    let internal_err = InternalError::NotFound("some-id".to_string());
    let api_err = VolunteerError::from_internal_error(internal_err);

    assert_eq!(api_err.message(), "Volunteer not found");
    assert!(matches!(api_err, VolunteerError::NotFound(_)));
}

#[test]
fn test_unique_violation_converts_to_duplicate_email() {
    let internal_err = InternalError::UniqueViolation {
        constraint: "volunteers.email".to_string(),
    };
    let api_err = VolunteerError::from_internal_error(internal_err);

    assert!(matches!(api_err, VolunteerError::DuplicateEmail(_)));
    assert_eq!(
        api_err.message(),
        "A volunteer with this email is already registered"
    );
}

#[test]
fn test_validation_failed_carries_field_details() {
    let validation_err = ValidationError {
        fields: vec![
            FieldError {
                field: "area".to_string(),
                reason: "must not be empty".to_string(),
            },
            FieldError {
                field: "email".to_string(),
                reason: "must be a valid email address".to_string(),
            },
        ],
    };
    let api_err = VolunteerError::validation_failed(validation_err);

    match api_err {
        VolunteerError::ValidationFailed(json) => {
            assert_eq!(json.0.status_code, 400);
            assert_eq!(json.0.fields.len(), 2);
            assert_eq!(json.0.fields[0].field, "area");
            assert_eq!(json.0.fields[1].field, "email");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_generic_database_error_message_does_not_leak_detail() {
    let db_err = DbErr::Custom("secret table layout info".to_string());
    let internal_err = InternalError::database("update_volunteer", db_err);
    let api_err = VolunteerError::from_internal_error(internal_err);

    assert!(!api_err.message().contains("secret"));
}
