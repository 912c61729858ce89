//! Bliss Domain Concerns

pub mod bookings;
pub mod hotels;
pub mod profiles;
pub mod treatments;
