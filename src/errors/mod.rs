// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::VolunteerError;
pub use internal::InternalError;

#[cfg(test)]
mod api_test;
