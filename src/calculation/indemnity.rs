//! Indemnity calculation functionality.
//!
//! This module computes the indemnity paid for the days left in the final
//! month of employment, measured against a 30-day payroll month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::date_parsing::parse_settlement_date;
use super::rounding::{checked_currency, round_currency};

/// Days in a payroll month.
pub const PAYROLL_MONTH_DAYS: i64 = 30;

/// The result of an indemnity calculation, including intermediates and audit step.
#[derive(Debug, Clone)]
pub struct IndemnityResult {
    /// The indemnity, rounded to two decimal places.
    pub amount: Decimal,
    /// The parsed start date.
    pub start_date: NaiveDate,
    /// The parsed end date.
    pub end_date: NaiveDate,
    /// Inclusive day count between start and end. Informational only; it
    /// does not enter the payout.
    pub total_days: i64,
    /// `30 - day_of_month(end_date)`. Negative on the 31st.
    pub remaining_days_in_month: i64,
    /// Monthly salary divided by 30, unrounded.
    pub daily_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the indemnity for the remainder of the final month.
///
/// The payout is `round(base_salary / 30 * (30 - day_of_month(end_date)), 2)`.
/// Only the end date's day-of-month drives the amount. An end date on the
/// 31st yields one negative day and therefore a negative indemnity; this is
/// not clamped.
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary
/// * `start_date` - Employment start date as `DD/MM/YYYY`
/// * `end_date` - End date as `DD/MM/YYYY`
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// - `InvalidArgument` if `base_salary` is negative (checked before parsing)
///   or so large that the payout overflows the `Decimal` range
/// - `ParseError` if either date is malformed
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_indemnity;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_indemnity(Decimal::from(2_000_000), "01/01/2023", "01/06/2023", 1).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("1933333.33").unwrap());
/// assert_eq!(result.remaining_days_in_month, 29);
/// ```
pub fn calculate_indemnity(
    base_salary: Decimal,
    start_date: &str,
    end_date: &str,
    step_number: u32,
) -> EngineResult<IndemnityResult> {
    if base_salary < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "base_salary",
            format!("must not be negative, got {}", base_salary),
        ));
    }

    let start = parse_settlement_date(start_date)?;
    let end = parse_settlement_date(end_date)?;

    let total_days = (end - start).num_days() + 1;
    let remaining_days_in_month = PAYROLL_MONTH_DAYS - i64::from(end.day());
    let daily_rate = base_salary / Decimal::from(PAYROLL_MONTH_DAYS);
    let amount = checked_currency(
        daily_rate.checked_mul(Decimal::from(remaining_days_in_month)),
        "base_salary",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "indemnity".to_string(),
        rule_name: "Indemnity".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "start_date": start.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "remaining_days_in_month": remaining_days_in_month,
            "daily_rate": round_currency(daily_rate).to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} / {} x ({} - {}) days = ${}",
            base_salary.normalize(),
            PAYROLL_MONTH_DAYS,
            PAYROLL_MONTH_DAYS,
            end.day(),
            amount
        ),
    };

    Ok(IndemnityResult {
        amount,
        start_date: start,
        end_date: end,
        total_days,
        remaining_days_in_month,
        daily_rate,
        audit_step,
    })
}
