//! Treatment Records

use bliss::prelude::{PricingResult, StandardDuration, calculate_price};
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Treatment UUID
pub type TreatmentUuid = TypedUuid<TreatmentRecord>;

/// Treatment Record
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentRecord {
    pub uuid: TreatmentUuid,
    pub name: String,
    pub base_price_60min: Decimal,
    pub hotel_price_60min: Decimal,
    pub is_active: bool,
}

impl TreatmentRecord {
    /// Price this treatment for a session length.
    #[must_use]
    pub fn price(&self, duration: StandardDuration) -> PricingResult {
        calculate_price(
            self.base_price_60min,
            self.hotel_price_60min,
            duration.minutes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_follow_duration_multiplier() {
        let treatment = TreatmentRecord {
            uuid: TreatmentUuid::new(),
            name: "Thai Massage".to_string(),
            base_price_60min: Decimal::from(690),
            hotel_price_60min: Decimal::from(550),
            is_active: true,
        };

        let price = treatment.price(StandardDuration::Ninety);

        assert_eq!(price.duration_minutes, 90);
        assert_eq!(price.final_base_price, Decimal::from(990));
        assert_eq!(price.final_hotel_price, Decimal::from(789));
    }
}
