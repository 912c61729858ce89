//! Profiles

pub mod errors;
pub mod records;
mod repository;

pub use errors::ProfilesRepositoryError;
pub use repository::*;
