//! Severance fund (cesantías) and severance fund interest calculations.
//!
//! The fund accrues one month of salary per 360 days worked; the interest
//! on it accrues at 12% a year over the same 360-day basis.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::checked_currency;

/// Days in a payroll year.
pub const PAYROLL_YEAR_DAYS: Decimal = Decimal::from_parts(360, 0, 0, false, 0);

/// Annual interest rate on the severance fund (12%).
pub const SEVERANCE_FUND_INTEREST_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// The result of a severance fund calculation.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// The severance fund contribution, rounded to two decimal places.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of a severance fund interest calculation.
#[derive(Debug, Clone)]
pub struct SeveranceFundInterestResult {
    /// The interest, rounded to two decimal places.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn check_days(accrued_days: i64) -> EngineResult<()> {
    if accrued_days < 0 {
        return Err(EngineError::invalid_argument(
            "accrued_days",
            format!("days worked must not be negative, got {}", accrued_days),
        ));
    }
    Ok(())
}

/// Calculates the severance fund contribution: `salary x days / 360`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `accrued_days` is negative, or if the
/// product overflows the `Decimal` range.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_severance_fund;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_severance_fund(Decimal::from(2_000_000), 15, 3).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("83333.33").unwrap());
/// ```
pub fn calculate_severance_fund(
    monthly_salary: Decimal,
    accrued_days: i64,
    step_number: u32,
) -> EngineResult<SeveranceFundResult> {
    check_days(accrued_days)?;

    let amount = checked_currency(
        monthly_salary
            .checked_mul(Decimal::from(accrued_days))
            .and_then(|product| product.checked_div(PAYROLL_YEAR_DAYS)),
        "base_salary",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "Severance Fund".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "accrued_days": accrued_days
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days / {} = ${}",
            monthly_salary.normalize(),
            accrued_days,
            PAYROLL_YEAR_DAYS,
            amount
        ),
    };

    Ok(SeveranceFundResult { amount, audit_step })
}

/// Calculates interest on the severance fund: `fund x days x 0.12 / 360`.
///
/// `severance_fund` is the already-rounded fund amount.
///
/// # Errors
///
/// Returns `InvalidArgument` if `severance_fund` or `accrued_days` is
/// negative, or if the product overflows the `Decimal` range.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_severance_fund_interest;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fund = Decimal::from_str("83333.33").unwrap();
/// let result = calculate_severance_fund_interest(fund, 15, 4).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("416.67").unwrap());
/// ```
pub fn calculate_severance_fund_interest(
    severance_fund: Decimal,
    accrued_days: i64,
    step_number: u32,
) -> EngineResult<SeveranceFundInterestResult> {
    if severance_fund < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "severance_fund",
            format!("severance fund must not be negative, got {}", severance_fund),
        ));
    }
    check_days(accrued_days)?;

    let amount = checked_currency(
        severance_fund
            .checked_mul(Decimal::from(accrued_days))
            .and_then(|product| product.checked_mul(SEVERANCE_FUND_INTEREST_RATE))
            .and_then(|product| product.checked_div(PAYROLL_YEAR_DAYS)),
        "severance_fund",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_fund_interest".to_string(),
        rule_name: "Severance Fund Interest".to_string(),
        input: serde_json::json!({
            "severance_fund": severance_fund.to_string(),
            "accrued_days": accrued_days,
            "annual_rate": SEVERANCE_FUND_INTEREST_RATE.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} / {} = ${}",
            severance_fund,
            accrued_days,
            SEVERANCE_FUND_INTEREST_RATE,
            PAYROLL_YEAR_DAYS,
            amount
        ),
    };

    Ok(SeveranceFundInterestResult { amount, audit_step })
}
