//! Bliss prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    durations::{DurationError, StandardDuration},
    money::baht,
    price_sheet::{PriceSheet, PriceSheetError},
    pricing::{PricingInput, PricingResult, calculate_price, final_price, multiplier},
};
