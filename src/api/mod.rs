// API layer - HTTP endpoints
pub mod health;
pub mod volunteers;

pub use health::HealthApi;
pub use volunteers::VolunteerApi;
