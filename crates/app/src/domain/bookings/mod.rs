//! Bookings

pub mod data;
pub mod errors;
pub mod planning;
pub mod records;
mod repository;
pub mod service;

pub use errors::BookingsServiceError;
pub use service::*;
