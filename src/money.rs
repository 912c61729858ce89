//! Money

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Wrap an amount as Thai Baht.
pub fn baht(amount: Decimal) -> Money<'static, iso::Currency> {
    Money::from_decimal(amount, iso::THB)
}
