// Stores layer - Data access and repository pattern
pub mod volunteer_store;

pub use volunteer_store::VolunteerStore;
