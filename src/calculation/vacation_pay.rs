//! Vacation pay calculation functionality.
//!
//! Accrued, untaken vacation days are paid at `salary x days / 720`.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::checked_currency;

/// Divisor applied to `salary x days` for vacation pay.
pub const VACATION_PAY_DIVISOR: Decimal = Decimal::from_parts(720, 0, 0, false, 0);

/// The result of a vacation pay calculation.
#[derive(Debug, Clone)]
pub struct VacationPayResult {
    /// The vacation pay, rounded to two decimal places.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for accrued vacation days.
///
/// # Errors
///
/// Returns `InvalidArgument` if `accrued_days` is negative, or if the
/// product overflows the `Decimal` range.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_vacation_pay(Decimal::from(2_000_000), 15, 2).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("41666.67").unwrap());
/// ```
pub fn calculate_vacation_pay(
    monthly_salary: Decimal,
    accrued_days: i64,
    step_number: u32,
) -> EngineResult<VacationPayResult> {
    if accrued_days < 0 {
        return Err(EngineError::invalid_argument(
            "accrued_days",
            format!("accrued vacation days must not be negative, got {}", accrued_days),
        ));
    }

    let amount = checked_currency(
        monthly_salary
            .checked_mul(Decimal::from(accrued_days))
            .and_then(|product| product.checked_div(VACATION_PAY_DIVISOR)),
        "base_salary",
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
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
            VACATION_PAY_DIVISOR,
            amount
        ),
    };

    Ok(VacationPayResult { amount, audit_step })
}
