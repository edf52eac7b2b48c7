//! Withholding tax (retención en la fuente) calculation functionality.
//!
//! The rule is a step function over the taxable amount with two fixed peso
//! thresholds. Inside the middle bracket the amount is converted to tax units
//! ("UVT"), reduced by 95 units, taxed at 19%, and 10 units are added back.
//! Nothing is withheld above the upper threshold: the bracket table has no
//! top bracket.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::rounding::round_currency;

/// Taxable amounts up to and including this value are exempt.
pub const WITHHOLDING_EXEMPT_THRESHOLD: Decimal = Decimal::from_parts(42412, 0, 0, false, 0);

/// Upper limit (inclusive) of the only taxed bracket.
pub const WITHHOLDING_UPPER_THRESHOLD: Decimal = Decimal::from_parts(636132, 0, 0, false, 0);

/// Tax units deducted from the taxable income.
pub const WITHHOLDING_BASE_DEDUCTION_UVT: Decimal = Decimal::from_parts(95, 0, 0, false, 0);

/// Marginal rate applied to the taxable base (19%).
pub const WITHHOLDING_MARGINAL_RATE: Decimal = Decimal::from_parts(19, 0, 0, false, 2);

/// Tax units added on top of the marginal tax.
pub const WITHHOLDING_FIXED_UVT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// The bracket a taxable amount fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithholdingBracket {
    /// At or below the exempt threshold.
    Exempt,
    /// Inside the taxed bracket.
    Marginal,
    /// Above the upper threshold, where no bracket is defined.
    Unbracketed,
}

/// The result of a withholding calculation.
#[derive(Debug, Clone)]
pub(crate) struct WithholdingResult {
    /// The amount withheld, rounded to two decimal places.
    pub amount: Decimal,
    /// The bracket the taxable amount fell into.
    pub bracket: WithholdingBracket,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the withholding on a taxable amount.
///
/// The thresholds are fixed peso amounts and do not scale with
/// `tax_unit_value`. Within the taxed bracket the formula is
/// `round((taxable / uvt - 95) x uvt x 0.19 + 10 x uvt, 2)`, evaluated as
/// `(taxable - 95 x uvt) x 0.19 + 10 x uvt` so no division enters the amount.
///
/// `tax_unit_value` must lie in `(0, MAX_TAX_UNIT_VALUE]`, which
/// [`crate::config::CalculatorConfig`] guarantees for every caller.
pub(crate) fn calculate_withholding(
    taxable_amount: Decimal,
    tax_unit_value: Decimal,
    step_number: u32,
) -> WithholdingResult {
    let (bracket, base_pesos, amount, reasoning) = if taxable_amount <= WITHHOLDING_EXEMPT_THRESHOLD {
        (
            WithholdingBracket::Exempt,
            None,
            round_currency(Decimal::ZERO),
            format!(
                "${} is at or below the exempt threshold of ${} - nothing withheld",
                taxable_amount, WITHHOLDING_EXEMPT_THRESHOLD
            ),
        )
    } else if taxable_amount <= WITHHOLDING_UPPER_THRESHOLD {
        let base_pesos = taxable_amount - WITHHOLDING_BASE_DEDUCTION_UVT * tax_unit_value;
        let amount = round_currency(
            base_pesos * WITHHOLDING_MARGINAL_RATE + WITHHOLDING_FIXED_UVT * tax_unit_value,
        );
        (
            WithholdingBracket::Marginal,
            Some(base_pesos),
            amount,
            format!(
                "(${} / {} - {}) UVT x {} x {} + {} UVT = ${}",
                taxable_amount,
                tax_unit_value,
                WITHHOLDING_BASE_DEDUCTION_UVT,
                tax_unit_value,
                WITHHOLDING_MARGINAL_RATE,
                WITHHOLDING_FIXED_UVT,
                amount
            ),
        )
    } else {
        (
            WithholdingBracket::Unbracketed,
            None,
            round_currency(Decimal::ZERO),
            format!(
                "${} exceeds ${} and no bracket is defined above it - nothing withheld",
                taxable_amount, WITHHOLDING_UPPER_THRESHOLD
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding".to_string(),
        rule_name: "Withholding Tax".to_string(),
        input: serde_json::json!({
            "taxable_amount": taxable_amount.to_string(),
            "tax_unit_value": tax_unit_value.to_string()
        }),
        output: serde_json::json!({
            "bracket": bracket,
            "base_pesos": base_pesos.map(|pesos| pesos.to_string()),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    WithholdingResult {
        amount,
        bracket,
        audit_step,
    }
}
