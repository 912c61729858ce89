//! Duration Pricing
//!
//! Treatments are priced per 60 minutes. Longer or shorter sessions scale the
//! 60 minute price pair (standard and hotel-partner) by a duration multiplier.
//! The 90 and 120 minute tiers are fixed constants taken from the published
//! price list (690 / 990 / 1280 baht); they are not derived from a formula.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::money::baht;

/// Length of the reference session all base prices are quoted for.
pub const BASE_DURATION_MINUTES: u32 = 60;

const NINETY_MINUTES: u32 = 90;
const ONE_TWENTY_MINUTES: u32 = 120;

const SIXTY: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Multiplier for the 90 minute tier (1.435).
pub const NINETY_MINUTE_MULTIPLIER: Decimal = Decimal::from_parts(1435, 0, 0, false, 3);

/// Multiplier for the 120 minute tier (1.855).
pub const ONE_TWENTY_MINUTE_MULTIPLIER: Decimal = Decimal::from_parts(1855, 0, 0, false, 3);

/// Multiplier added per extra hour beyond 120 minutes (0.4).
pub const EXTRA_HOUR_MULTIPLIER: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Decimal places the multiplier is rounded to before it is applied.
const MULTIPLIER_DECIMAL_PLACES: u32 = 3;

/// Inputs for a single price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    /// Standard customer price for 60 minutes.
    pub base_price_60min: Decimal,

    /// Hotel-partner price for 60 minutes. Expected to be at most the base price.
    pub hotel_price_60min: Decimal,

    /// Requested session length in minutes.
    pub duration_minutes: u32,
}

impl PricingInput {
    /// Create a new pricing input.
    pub fn new(base_price_60min: Decimal, hotel_price_60min: Decimal, duration_minutes: u32) -> Self {
        Self {
            base_price_60min,
            hotel_price_60min,
            duration_minutes,
        }
    }

    /// Calculate the scaled prices for this input.
    pub fn calculate(&self) -> PricingResult {
        calculate_price(
            self.base_price_60min,
            self.hotel_price_60min,
            self.duration_minutes,
        )
    }
}

/// Scaled prices for a requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Requested session length in minutes.
    pub duration_minutes: u32,

    /// Standard 60 minute price the result was derived from.
    pub base_price_60min: Decimal,

    /// Hotel-partner 60 minute price the result was derived from.
    pub hotel_price_60min: Decimal,

    /// Applied multiplier, rounded to 3 decimal places.
    pub multiplier: Decimal,

    /// Standard price for the requested duration, in whole baht.
    pub final_base_price: Decimal,

    /// Hotel-partner price for the requested duration, in whole baht.
    pub final_hotel_price: Decimal,
}

impl PricingResult {
    /// Standard price as Thai Baht.
    pub fn final_base_money(&self) -> Money<'static, Currency> {
        baht(self.final_base_price)
    }

    /// Hotel-partner price as Thai Baht.
    pub fn final_hotel_money(&self) -> Money<'static, Currency> {
        baht(self.final_hotel_price)
    }
}

/// Raw (unrounded) multiplier for a session length.
///
/// - 60, 90 and 120 minutes use the fixed tier constants.
/// - Below 60 minutes the price scales linearly (`minutes / 60`).
/// - Above 120 minutes each extra hour adds [`EXTRA_HOUR_MULTIPLIER`].
/// - Lengths between two tiers are interpolated linearly between them.
pub fn multiplier(duration_minutes: u32) -> Decimal {
    match duration_minutes {
        BASE_DURATION_MINUTES => Decimal::ONE,
        NINETY_MINUTES => NINETY_MINUTE_MULTIPLIER,
        ONE_TWENTY_MINUTES => ONE_TWENTY_MINUTE_MULTIPLIER,
        minutes if minutes < BASE_DURATION_MINUTES => Decimal::from(minutes) / SIXTY,
        minutes if minutes > ONE_TWENTY_MINUTES => {
            let extra_hours = Decimal::from(minutes - ONE_TWENTY_MINUTES) / SIXTY;

            ONE_TWENTY_MINUTE_MULTIPLIER + extra_hours * EXTRA_HOUR_MULTIPLIER
        }
        minutes if minutes < NINETY_MINUTES => interpolate(
            minutes,
            (BASE_DURATION_MINUTES, Decimal::ONE),
            (NINETY_MINUTES, NINETY_MINUTE_MULTIPLIER),
        ),
        minutes => interpolate(
            minutes,
            (NINETY_MINUTES, NINETY_MINUTE_MULTIPLIER),
            (ONE_TWENTY_MINUTES, ONE_TWENTY_MINUTE_MULTIPLIER),
        ),
    }
}

/// Multiplier rounded to 3 decimal places, as reported and applied.
pub fn rounded_multiplier(duration_minutes: u32) -> Decimal {
    multiplier(duration_minutes)
        .round_dp_with_strategy(MULTIPLIER_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Scale a 60 minute price to the given duration, rounded to whole baht.
pub fn final_price(price: Decimal, duration_minutes: u32) -> Decimal {
    apply_multiplier(price, rounded_multiplier(duration_minutes))
}

/// Calculate standard and hotel-partner prices for a duration.
///
/// Inputs are not validated: the hotel price is not checked against the base
/// price and negative prices scale like any other value.
pub fn calculate_price(
    base_price_60min: Decimal,
    hotel_price_60min: Decimal,
    duration_minutes: u32,
) -> PricingResult {
    let multiplier = rounded_multiplier(duration_minutes);

    PricingResult {
        duration_minutes,
        base_price_60min,
        hotel_price_60min,
        multiplier,
        final_base_price: apply_multiplier(base_price_60min, multiplier),
        final_hotel_price: apply_multiplier(hotel_price_60min, multiplier),
    }
}

/// Multiply and round half away from zero on the exact decimal product.
fn apply_multiplier(price: Decimal, multiplier: Decimal) -> Decimal {
    price
        .saturating_mul(multiplier)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn interpolate(minutes: u32, (from, low): (u32, Decimal), (to, high): (u32, Decimal)) -> Decimal {
    let span = Decimal::from(to - from);
    let offset = Decimal::from(minutes - from);

    low + (high - low) * offset / span
}
