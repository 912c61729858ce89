//! Price Quote Handler

use bliss::prelude::{PricingResult, calculate_price};
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// Price of a treatment for one session length.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Quote {
    pub duration_minutes: u32,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub multiplier: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub base_price_60min: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub hotel_price_60min: Decimal,

    /// Customer price in baht.
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub final_base_price: Decimal,

    /// Hotel-partner price in baht.
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub final_hotel_price: Decimal,

    /// ISO 4217 currency code.
    pub currency: String,
}

impl From<PricingResult> for Quote {
    fn from(result: PricingResult) -> Self {
        Self {
            currency: result.final_base_money().currency().iso_alpha_code.to_string(),
            duration_minutes: result.duration_minutes,
            multiplier: result.multiplier,
            base_price_60min: result.base_price_60min,
            hotel_price_60min: result.hotel_price_60min,
            final_base_price: result.final_base_price,
            final_hotel_price: result.final_hotel_price,
        }
    }
}

/// Quote Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    pub success: bool,
    pub data: Quote,
}

fn parse_price(name: &str, value: Option<String>) -> Result<Decimal, ApiError> {
    let value = value.ok_or_else(|| ApiError::validation(format!("{name} is required")))?;

    let price = value
        .trim()
        .parse::<Decimal>()
        .map_err(|_ignored| ApiError::validation(format!("{name} must be a number")))?;

    if price.is_sign_negative() {
        return Err(ApiError::validation(format!("{name} cannot be negative")));
    }

    Ok(price)
}

fn parse_duration(value: Option<String>) -> Result<u32, ApiError> {
    value
        .ok_or_else(|| ApiError::validation("duration is required"))?
        .trim()
        .parse::<u32>()
        .map_err(|_ignored| ApiError::validation("duration must be a whole number of minutes"))
}

/// Price Quote Handler
///
/// Prices a 60 minute base and hotel rate for any session length.
#[endpoint(
    tags("pricing"),
    summary = "Quote a treatment price for a duration",
    responses(
        (status_code = StatusCode::OK, description = "Quote"),
    ),
)]
pub(crate) async fn handler(
    base: QueryParam<String, false>,
    hotel: QueryParam<String, false>,
    duration: QueryParam<String, false>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let base = parse_price("base", base.into_inner())?;
    let hotel = parse_price("hotel", hotel.into_inner())?;
    let duration = parse_duration(duration.into_inner())?;

    Ok(Json(QuoteResponse {
        success: true,
        data: calculate_price(base, hotel, duration).into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        catcher::Catcher,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{
        config::AppEnvironment,
        errors::{ErrorCode, ErrorEnvelope, error_envelope},
        test_helpers::strict_state,
    };

    use super::*;

    fn make_service() -> Service {
        let router = Router::new()
            .hoop(inject(strict_state(AppEnvironment::Development)))
            .push(Router::with_path("api/pricing/quote").get(handler));

        Service::new(router).catcher(Catcher::default().hoop(error_envelope))
    }

    #[tokio::test]
    async fn quotes_ninety_minutes() -> TestResult {
        let mut res =
            TestClient::get("http://example.com/api/pricing/quote?base=690&hotel=550&duration=90")
                .send(&make_service())
                .await;

        let body: QuoteResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.data.duration_minutes, 90);
        assert_eq!(body.data.multiplier, Decimal::new(1435, 3));
        assert_eq!(body.data.final_base_price, Decimal::from(990));
        assert_eq!(body.data.final_hotel_price, Decimal::from(789));
        assert_eq!(body.data.currency, "THB");

        Ok(())
    }

    #[tokio::test]
    async fn missing_duration_is_a_validation_error() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/pricing/quote?base=690&hotel=550")
            .send(&make_service())
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error.code, ErrorCode::ValidationError);
        assert_eq!(body.error.message, "duration is required");

        Ok(())
    }

    #[tokio::test]
    async fn unparsable_price_is_a_validation_error() -> TestResult {
        let mut res =
            TestClient::get("http://example.com/api/pricing/quote?base=cheap&hotel=550&duration=60")
                .send(&make_service())
                .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error.message, "base must be a number");

        Ok(())
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert!(parse_price("hotel", Some("-1".to_string())).is_err());
    }
}
