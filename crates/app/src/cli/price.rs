use std::io;

use bliss::prelude::PriceSheet;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct PriceArgs {
    /// Standard 60 minute price in baht
    #[arg(long)]
    base: Decimal,

    /// Hotel-partner 60 minute price in baht
    #[arg(long)]
    hotel: Decimal,

    /// Session lengths in minutes; the offered durations when omitted
    #[arg(long = "duration")]
    durations: Vec<u32>,
}

impl PriceArgs {
    fn sheet(&self) -> PriceSheet {
        if self.durations.is_empty() {
            PriceSheet::standard(self.base, self.hotel)
        } else {
            PriceSheet::new(self.base, self.hotel, self.durations.iter().copied())
        }
    }
}

pub(crate) fn run(args: &PriceArgs) -> Result<(), String> {
    if args.base.is_sign_negative() || args.hotel.is_sign_negative() {
        return Err("prices cannot be negative".to_string());
    }

    args.sheet()
        .write_to(io::stdout().lock())
        .map_err(|error| format!("failed to print price sheet: {error}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: PriceArgs,
    }

    #[test]
    fn defaults_to_offered_durations() -> TestResult {
        let harness = Harness::try_parse_from(["price", "--base", "690", "--hotel", "550"])?;

        let minutes: Vec<u32> = harness
            .args
            .sheet()
            .rows()
            .iter()
            .map(|row| row.duration_minutes)
            .collect();

        assert_eq!(minutes, vec![60, 90, 120]);

        Ok(())
    }

    #[test]
    fn custom_durations_are_kept() -> TestResult {
        let harness = Harness::try_parse_from([
            "price", "--base", "1000", "--hotel", "800", "--duration", "30", "--duration", "180",
        ])?;

        let multipliers: Vec<Decimal> = harness
            .args
            .sheet()
            .rows()
            .iter()
            .map(|row| row.multiplier)
            .collect();

        assert_eq!(multipliers, vec![Decimal::new(5, 1), Decimal::new(2255, 3)]);

        Ok(())
    }

    #[test]
    fn negative_prices_are_rejected() -> TestResult {
        let harness = Harness::try_parse_from(["price", "--base=-1", "--hotel", "550"])?;

        assert!(run(&harness.args).is_err());

        Ok(())
    }
}
