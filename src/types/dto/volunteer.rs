use poem_openapi::{ApiResponse, Object};

use crate::types::db::volunteer;

/// Request model for registering or replacing a volunteer
///
/// Used by both create and update so that the two endpoints enforce the
/// same input contract.
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct VolunteerPayload {
    /// First name
    #[oai(validator(min_length = 1))]
    pub name: String,

    /// Last name
    #[oai(validator(min_length = 1))]
    pub last_name: String,

    /// Contact email, unique across all volunteers
    #[oai(validator(min_length = 1))]
    pub email: String,

    /// National identifier (format not validated beyond presence)
    #[oai(validator(min_length = 1))]
    pub cpf: String,

    /// Birth date as text, e.g. "1990-01-01"
    #[oai(validator(min_length = 1))]
    pub birth_date: String,

    /// Contact phone number
    #[oai(validator(min_length = 1))]
    pub phone_number: String,

    /// Volunteer category tag, e.g. "medical"
    #[oai(validator(min_length = 1))]
    pub volunteer_type: String,

    /// Professional registration number
    #[oai(validator(min_length = 1))]
    pub crm: String,

    /// Field of expertise
    #[oai(validator(min_length = 1))]
    pub area: String,

    /// Geographic/administrative region
    #[oai(validator(min_length = 1))]
    pub state: String,

    /// Free-form schedule description
    #[oai(validator(min_length = 1))]
    pub availability: String,

    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Response model representing a stored volunteer record
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct Volunteer {
    /// Unique identifier (UUID), assigned at creation
    pub id: String,

    pub name: String,
    pub last_name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: String,
    pub phone_number: String,
    pub volunteer_type: String,
    pub crm: String,
    pub area: String,
    pub state: String,
    pub availability: String,
    pub notes: Option<String>,

    /// Creation time (Unix seconds)
    pub created_at: i64,

    /// Last modification time (Unix seconds)
    pub updated_at: i64,
}

impl From<volunteer::Model> for Volunteer {
    fn from(record: volunteer::Model) -> Self {
        Self {
            id: record.id,
            name: record.name,
            last_name: record.last_name,
            email: record.email,
            cpf: record.cpf,
            birth_date: record.birth_date,
            phone_number: record.phone_number,
            volunteer_type: record.volunteer_type,
            crm: record.crm,
            area: record.area,
            state: record.state,
            availability: record.availability,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Response model for listing all volunteers
#[derive(Object, Debug)]
pub struct VolunteerListResponse {
    /// All stored volunteer records, in store order
    pub users: Vec<Volunteer>,
}

/// API response for the create endpoint
#[derive(ApiResponse)]
pub enum CreateVolunteerResponse {
    /// Volunteer record persisted
    #[oai(status = 201)]
    Created,
}
