//! Settlement result models.
//!
//! This module contains the [`SettlementResult`] figures, the
//! [`SettlementReport`] wrapper returned by the HTTP API and the audit types
//! that record how every figure was derived.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The seven figures of a settlement.
///
/// Every amount carries exactly two decimal places.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::SettlementResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = SettlementResult {
///     indemnity: Decimal::from_str("1933333.33").unwrap(),
///     vacation_pay: Decimal::from_str("41666.67").unwrap(),
///     severance_fund: Decimal::from_str("83333.33").unwrap(),
///     severance_fund_interest: Decimal::from_str("416.67").unwrap(),
///     service_bonus: Decimal::from_str("6941.67").unwrap(),
///     withholding: Decimal::from_str("0.00").unwrap(),
///     net_total: Decimal::from_str("2065691.67").unwrap(),
/// };
/// assert_eq!(result.gross_total(), Decimal::from_str("2065691.67").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Indemnity for the remaining days of the final month.
    pub indemnity: Decimal,
    /// Pay for accrued, untaken vacation days.
    pub vacation_pay: Decimal,
    /// Severance fund contribution (cesantías).
    pub severance_fund: Decimal,
    /// Interest on the severance fund.
    pub severance_fund_interest: Decimal,
    /// Service bonus (prima de servicios).
    pub service_bonus: Decimal,
    /// Withholding tax on the gross total.
    pub withholding: Decimal,
    /// Gross total minus withholding.
    pub net_total: Decimal,
}

impl SettlementResult {
    /// Returns the sum of the five components before withholding.
    pub fn gross_total(&self) -> Decimal {
        self.indemnity
            + self.vacation_pay
            + self.severance_fund
            + self.severance_fund_interest
            + self.service_bonus
    }
}

impl fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Indemnización: {}", self.indemnity)?;
        writeln!(f, "Vacaciones: {}", self.vacation_pay)?;
        writeln!(f, "Cesantías: {}", self.severance_fund)?;
        writeln!(f, "Intereses sobre cesantías: {}", self.severance_fund_interest)?;
        writeln!(f, "Prima de servicios: {}", self.service_bonus)?;
        writeln!(f, "Retención en la fuente: {}", self.withholding)?;
        write!(f, "Total a pagar: {}", self.net_total)
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs or outcomes that look suspicious but never change
/// any figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A settlement result together with its provenance.
///
/// This is what the HTTP API returns: the figures, the configuration they
/// were computed under, and an audit trace of every formula applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The exit reason supplied with the input, carried through unchanged.
    pub exit_reason: String,
    /// The tax unit value the withholding was computed with.
    pub tax_unit_value: Decimal,
    /// The settlement figures.
    pub result: SettlementResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
