//! Treatments
//!
//! Bookable treatments live in the `services` table.

pub mod records;
pub(crate) mod repository;
