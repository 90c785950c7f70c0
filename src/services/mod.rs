// Services layer - Business logic
pub mod volunteer_validator;

pub use volunteer_validator::{ValidationError, VolunteerValidator};
