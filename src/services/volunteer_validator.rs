use thiserror::Error;

use crate::types::dto::volunteer::VolunteerPayload;

/// A single field rejected by the validator
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Wire name of the field (camelCase, as the client sent it)
    pub field: String,
    pub reason: String,
}

/// Validation failure carrying every rejected field
#[derive(Error, Debug)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

/// Volunteer payload validator
///
/// Enforces the input contract shared by create and update: every required
/// field non-blank, email conforming to address grammar. Runs before any
/// persistence call and never partially applies a write.
///
/// Presence and primitive-type checks already happen at deserialization, so
/// this layer only deals with values that parsed but are still unacceptable
/// (blank strings, malformed addresses).
pub struct VolunteerValidator;

impl VolunteerValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a payload against all field rules
    ///
    /// Collects every failing field rather than stopping at the first, so the
    /// response can report all of them at once.
    pub fn validate(&self, payload: &VolunteerPayload) -> Result<(), ValidationError> {
        let mut fields = Vec::new();

        let required = [
            ("name", payload.name.as_str()),
            ("lastName", payload.last_name.as_str()),
            ("email", payload.email.as_str()),
            ("cpf", payload.cpf.as_str()),
            ("birthDate", payload.birth_date.as_str()),
            ("phoneNumber", payload.phone_number.as_str()),
            ("volunteerType", payload.volunteer_type.as_str()),
            ("crm", payload.crm.as_str()),
            ("area", payload.area.as_str()),
            ("state", payload.state.as_str()),
            ("availability", payload.availability.as_str()),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                fields.push(FieldError {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if !payload.email.trim().is_empty() && !is_valid_email(&payload.email) {
            fields.push(FieldError {
                field: "email".to_string(),
                reason: "must be a valid email address".to_string(),
            });
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

impl Default for VolunteerValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a string against a pragmatic email grammar
///
/// Requires exactly one `@` separating a non-empty local part from a dotted
/// domain with non-empty labels, and no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
