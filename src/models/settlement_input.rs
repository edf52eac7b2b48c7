//! Settlement input model.
//!
//! This module defines the [`SettlementInput`] record the calculator consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee data a settlement is computed from.
///
/// Dates are kept as the raw `DD/MM/YYYY` text the caller supplied; the
/// calculator parses them and reports a `ParseError` when they are malformed.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::SettlementInput;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     exit_reason: "renuncia".to_string(),
///     base_salary: Decimal::from(2_000_000),
///     employment_start_date: "01/01/2023".to_string(),
///     last_vacation_date: "01/06/2023".to_string(),
///     accrued_vacation_days: 15,
/// };
/// assert_eq!(input.accrued_vacation_days, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Free-text reason for leaving (resignation, dismissal...). Not used by any formula.
    #[serde(default)]
    pub exit_reason: String,
    /// Monthly base salary in pesos.
    pub base_salary: Decimal,
    /// The date employment started, as `DD/MM/YYYY`.
    pub employment_start_date: String,
    /// The date of the last vacation, as `DD/MM/YYYY`.
    pub last_vacation_date: String,
    /// Vacation days accumulated and not yet taken.
    pub accrued_vacation_days: i64,
}
