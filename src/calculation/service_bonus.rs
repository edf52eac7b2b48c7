//! Service bonus (prima de servicios) calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::checked_currency;
use super::severance_fund::PAYROLL_YEAR_DAYS;

/// Service bonus factor. Kept at the four-digit literal 0.0833, not 1/12.
pub const SERVICE_BONUS_FACTOR: Decimal = Decimal::from_parts(833, 0, 0, false, 4);

/// The result of a service bonus calculation.
#[derive(Debug, Clone)]
pub struct ServiceBonusResult {
    /// The service bonus, rounded to two decimal places.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the service bonus: `salary x days x 0.0833 / 360`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `accrued_days` is negative, or if the
/// product overflows the `Decimal` range.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_service_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_service_bonus(Decimal::from(2_000_000), 15, 5).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("6941.67").unwrap());
/// ```
pub fn calculate_service_bonus(
    monthly_salary: Decimal,
    accrued_days: i64,
    step_number: u32,
) -> EngineResult<ServiceBonusResult> {
    if accrued_days < 0 {
        return Err(EngineError::invalid_argument(
            "accrued_days",
            format!("days worked must not be negative, got {}", accrued_days),
        ));
    }

    let amount = checked_currency(
        monthly_salary
            .checked_mul(Decimal::from(accrued_days))
            .and_then(|product| product.checked_mul(SERVICE_BONUS_FACTOR))
            .and_then(|product| product.checked_div(PAYROLL_YEAR_DAYS)),
        "base_salary",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_bonus".to_string(),
        rule_name: "Service Bonus".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "accrued_days": accrued_days,
            "factor": SERVICE_BONUS_FACTOR.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} / {} = ${}",
            monthly_salary.normalize(),
            accrued_days,
            SERVICE_BONUS_FACTOR,
            PAYROLL_YEAR_DAYS,
            amount
        ),
    };

    Ok(ServiceBonusResult { amount, audit_step })
}
