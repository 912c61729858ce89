//! Bliss
//!
//! Pricing for The Bliss at Home spa and massage bookings: scales a treatment's
//! 60 minute standard and hotel-partner prices to the requested session length.

pub mod durations;
pub mod money;
pub mod price_sheet;
pub mod prelude;
pub mod pricing;
