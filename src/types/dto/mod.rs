pub mod common;
pub mod volunteer;
