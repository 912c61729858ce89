//! Price Sheet
//!
//! A treatment's prices across several session lengths, as shown on the
//! admin and customer price lists.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    durations::StandardDuration,
    pricing::{PricingResult, calculate_price},
};

/// Errors that can occur while writing a price sheet.
#[derive(Debug, Error)]
pub enum PriceSheetError {
    /// Writing to the output failed.
    #[error("failed to write price sheet")]
    IO(#[source] io::Error),
}

/// Prices for one treatment at several durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSheet {
    rows: Vec<PricingResult>,
}

impl PriceSheet {
    /// Calculate a sheet for the given durations, in the order given.
    pub fn new(
        base_price_60min: Decimal,
        hotel_price_60min: Decimal,
        durations: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            rows: durations
                .into_iter()
                .map(|minutes| calculate_price(base_price_60min, hotel_price_60min, minutes))
                .collect(),
        }
    }

    /// Calculate a sheet for every offered duration.
    pub fn standard(base_price_60min: Decimal, hotel_price_60min: Decimal) -> Self {
        Self::new(
            base_price_60min,
            hotel_price_60min,
            StandardDuration::ALL.map(StandardDuration::minutes),
        )
    }

    /// Calculated rows.
    pub fn rows(&self) -> &[PricingResult] {
        &self.rows
    }

    /// Render the sheet as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), PriceSheetError> {
        let mut builder = Builder::default();

        builder.push_record(["Duration", "Multiplier", "Standard", "Hotel"]);

        for row in &self.rows {
            builder.push_record([
                format!("{} min", row.duration_minutes),
                format!("{:.3}", row.multiplier),
                format!("{}", row.final_base_money()),
                format!("{}", row.final_hotel_money()),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}").map_err(PriceSheetError::IO)
    }
}
