//! Currency rounding shared by every formula.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds an amount to exactly two decimal places, midpoint away from zero.
///
/// The result always has a scale of two, so `0` becomes `0.00`.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("416.66665").unwrap()).to_string(), "416.67");
/// assert_eq!(round_currency(Decimal::from_str("-0.005").unwrap()).to_string(), "-0.01");
/// assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Rounds the outcome of checked arithmetic to currency.
///
/// `None` (an overflow) and values too large to carry two decimal places are
/// reported as `InvalidArgument` against `field`.
pub(crate) fn checked_currency(value: Option<Decimal>, field: &str) -> EngineResult<Decimal> {
    value
        .map(round_currency)
        .filter(|amount| amount.scale() == 2)
        .ok_or_else(|| EngineError::invalid_argument(field, "amount out of range"))
}
