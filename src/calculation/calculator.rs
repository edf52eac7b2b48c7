//! The settlement calculator.
//!
//! [`SettlementCalculator`] composes the individual formulas into a full
//! settlement: five independent components, withholding on their sum, and
//! the net total.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, SettlementInput, SettlementReport, SettlementResult,
};

use super::indemnity::{IndemnityResult, calculate_indemnity};
use super::rounding::checked_currency;
use super::service_bonus::calculate_service_bonus;
use super::severance_fund::{calculate_severance_fund, calculate_severance_fund_interest};
use super::vacation_pay::calculate_vacation_pay;
use super::withholding::{WITHHOLDING_UPPER_THRESHOLD, WithholdingBracket, calculate_withholding};

/// Computes settlements under a fixed configuration.
///
/// The calculator holds no state besides its configuration, so one instance
/// can be shared by every caller.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::SettlementCalculator;
/// use liquidacion_engine::models::SettlementInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = SettlementCalculator::default();
/// let input = SettlementInput {
///     exit_reason: "renuncia".to_string(),
///     base_salary: Decimal::from(2_000_000),
///     employment_start_date: "01/01/2023".to_string(),
///     last_vacation_date: "01/06/2023".to_string(),
///     accrued_vacation_days: 15,
/// };
///
/// let result = calculator.compute_all(&input).unwrap();
/// assert_eq!(result.net_total, Decimal::from_str("2065691.67").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettlementCalculator {
    config: CalculatorConfig,
}

/// Every intermediate of one settlement run.
struct Breakdown {
    result: SettlementResult,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl SettlementCalculator {
    /// Creates a calculator with the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Creates a calculator with a custom tax unit value.
    ///
    /// Returns `InvalidArgument` if the value is not positive.
    pub fn with_tax_unit_value(tax_unit_value: Decimal) -> EngineResult<Self> {
        Ok(Self::new(CalculatorConfig::new(tax_unit_value)?))
    }

    /// Returns the calculator's configuration.
    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    /// Returns the tax unit value used for withholding.
    pub fn tax_unit_value(&self) -> Decimal {
        self.config.tax_unit_value()
    }

    /// Indemnity for the remainder of the final month.
    ///
    /// See [`calculate_indemnity`] for the formula.
    pub fn indemnity(
        &self,
        base_salary: Decimal,
        start_date: &str,
        end_date: &str,
    ) -> EngineResult<Decimal> {
        Ok(calculate_indemnity(base_salary, start_date, end_date, 1)?.amount)
    }

    /// Pay for accrued vacation days.
    pub fn vacation_pay(&self, monthly_salary: Decimal, accrued_days: i64) -> EngineResult<Decimal> {
        Ok(calculate_vacation_pay(monthly_salary, accrued_days, 1)?.amount)
    }

    /// Severance fund contribution.
    pub fn severance_fund(
        &self,
        monthly_salary: Decimal,
        accrued_days: i64,
    ) -> EngineResult<Decimal> {
        Ok(calculate_severance_fund(monthly_salary, accrued_days, 1)?.amount)
    }

    /// Interest on a severance fund amount.
    pub fn severance_fund_interest(
        &self,
        severance_fund: Decimal,
        accrued_days: i64,
    ) -> EngineResult<Decimal> {
        Ok(calculate_severance_fund_interest(severance_fund, accrued_days, 1)?.amount)
    }

    /// Service bonus.
    pub fn service_bonus(&self, monthly_salary: Decimal, accrued_days: i64) -> EngineResult<Decimal> {
        Ok(calculate_service_bonus(monthly_salary, accrued_days, 1)?.amount)
    }

    /// Withholding on a taxable amount under this calculator's tax unit value.
    ///
    /// Amounts up to 42412 are exempt and amounts above 636132 fall in the
    /// bracket gap; both withhold nothing. The thresholds do not scale with
    /// the tax unit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use liquidacion_engine::calculation::SettlementCalculator;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let calculator = SettlementCalculator::default();
    ///
    /// assert_eq!(calculator.withholding(Decimal::from(42412)), Decimal::ZERO);
    /// assert_eq!(
    ///     calculator.withholding(Decimal::from(636132)),
    ///     Decimal::from_str("-194735.17").unwrap()
    /// );
    /// assert_eq!(calculator.withholding(Decimal::from(636133)), Decimal::ZERO);
    /// ```
    pub fn withholding(&self, taxable_amount: Decimal) -> Decimal {
        calculate_withholding(taxable_amount, self.tax_unit_value(), 1).amount
    }

    /// Computes all seven settlement figures.
    ///
    /// The last vacation date is the end date of the indemnity. Interest is
    /// computed on the rounded severance fund.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a negative salary or day count, or a salary so
    ///   large that a figure overflows the `Decimal` range
    /// - `ParseError` for a malformed date
    pub fn compute_all(&self, input: &SettlementInput) -> EngineResult<SettlementResult> {
        Ok(self.run(input)?.result)
    }

    /// Computes the settlement together with its audit trace.
    ///
    /// Figures are identical to [`Self::compute_all`]; the report adds an
    /// audit step per formula and warnings for suspicious inputs or outcomes.
    pub fn compute_report(&self, input: &SettlementInput) -> EngineResult<SettlementReport> {
        let start_time = Instant::now();
        let breakdown = self.run(input)?;
        let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

        Ok(SettlementReport {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            exit_reason: input.exit_reason.clone(),
            tax_unit_value: self.tax_unit_value(),
            result: breakdown.result,
            audit_trace: AuditTrace {
                steps: breakdown.steps,
                warnings: breakdown.warnings,
                duration_us,
            },
        })
    }

    fn run(&self, input: &SettlementInput) -> EngineResult<Breakdown> {
        let salary = input.base_salary;
        let days = input.accrued_vacation_days;

        let indemnity = calculate_indemnity(
            salary,
            &input.employment_start_date,
            &input.last_vacation_date,
            1,
        )?;
        let vacation_pay = calculate_vacation_pay(salary, days, 2)?;
        let severance_fund = calculate_severance_fund(salary, days, 3)?;
        let interest = calculate_severance_fund_interest(severance_fund.amount, days, 4)?;
        let service_bonus = calculate_service_bonus(salary, days, 5)?;

        let gross_total = checked_currency(
            [
                vacation_pay.amount,
                severance_fund.amount,
                interest.amount,
                service_bonus.amount,
            ]
            .into_iter()
            .try_fold(indemnity.amount, |total, amount| total.checked_add(amount)),
            "base_salary",
        )?;
        let withholding = calculate_withholding(gross_total, self.tax_unit_value(), 6);
        let net_total = checked_currency(gross_total.checked_sub(withholding.amount), "base_salary")?;

        let result = SettlementResult {
            indemnity: indemnity.amount,
            vacation_pay: vacation_pay.amount,
            severance_fund: severance_fund.amount,
            severance_fund_interest: interest.amount,
            service_bonus: service_bonus.amount,
            withholding: withholding.amount,
            net_total,
        };

        debug!(
            base_salary = %salary,
            accrued_days = days,
            gross_total = %gross_total,
            withholding = %withholding.amount,
            net_total = %net_total,
            "Computed settlement"
        );

        let mut warnings = indemnity_warnings(&indemnity);
        match withholding.bracket {
            WithholdingBracket::Unbracketed => warnings.push(AuditWarning {
                code: "WITHHOLDING_BRACKET_GAP".to_string(),
                message: format!(
                    "Taxable amount ${} exceeds ${}; no withholding bracket is defined above it",
                    gross_total, WITHHOLDING_UPPER_THRESHOLD
                ),
                severity: "high".to_string(),
            }),
            WithholdingBracket::Marginal if withholding.amount < Decimal::ZERO => {
                warnings.push(AuditWarning {
                    code: "NEGATIVE_WITHHOLDING".to_string(),
                    message: format!(
                        "Withholding formula produced ${}, which increases the net total",
                        withholding.amount
                    ),
                    severity: "high".to_string(),
                })
            }
            _ => {}
        }

        let steps = vec![
            indemnity.audit_step,
            vacation_pay.audit_step,
            severance_fund.audit_step,
            interest.audit_step,
            service_bonus.audit_step,
            withholding.audit_step,
        ];

        Ok(Breakdown {
            result,
            steps,
            warnings,
        })
    }
}

fn indemnity_warnings(indemnity: &IndemnityResult) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if indemnity.remaining_days_in_month < 0 {
        warnings.push(AuditWarning {
            code: "NEGATIVE_REMAINING_DAYS".to_string(),
            message: format!(
                "End date {} falls after day 30, giving {} remaining days and a negative indemnity",
                indemnity.end_date, indemnity.remaining_days_in_month
            ),
            severity: "medium".to_string(),
        });
    }

    if indemnity.end_date < indemnity.start_date {
        warnings.push(AuditWarning {
            code: "VACATION_BEFORE_START".to_string(),
            message: format!(
                "Last vacation date {} is before employment start date {}",
                indemnity.end_date, indemnity.start_date
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(salary: &str, start: &str, end: &str, days: i64) -> SettlementInput {
        SettlementInput {
            exit_reason: "renuncia".to_string(),
            base_salary: dec(salary),
            employment_start_date: start.to_string(),
            last_vacation_date: end.to_string(),
            accrued_vacation_days: days,
        }
    }

    fn reference_input() -> SettlementInput {
        create_input("2000000", "01/01/2023", "01/06/2023", 15)
    }

    /// SC-001: reference scenario
    #[test]
    fn test_reference_scenario() {
        let result = SettlementCalculator::default()
            .compute_all(&reference_input())
            .unwrap();

        assert_eq!(result.indemnity, dec("1933333.33"));
        assert_eq!(result.vacation_pay, dec("41666.67"));
        assert_eq!(result.severance_fund, dec("83333.33"));
        assert_eq!(result.severance_fund_interest, dec("416.67"));
        assert_eq!(result.service_bonus, dec("6941.67"));
        assert_eq!(result.withholding, dec("0.00"));
        assert_eq!(result.net_total, dec("2065691.67"));
    }

    /// SC-002: small settlement below the exempt threshold
    #[test]
    fn test_exempt_settlement() {
        let input = create_input("300000", "01/01/2023", "30/06/2023", 30);
        let result = SettlementCalculator::default().compute_all(&input).unwrap();

        assert_eq!(result.indemnity, dec("0.00"));
        assert_eq!(result.vacation_pay, dec("12500.00"));
        assert_eq!(result.severance_fund, dec("25000.00"));
        assert_eq!(result.severance_fund_interest, dec("250.00"));
        assert_eq!(result.service_bonus, dec("2082.50"));
        assert_eq!(result.withholding, dec("0.00"));
        assert_eq!(result.net_total, dec("39832.50"));
    }

    /// SC-003: settlement inside the taxed bracket
    #[test]
    fn test_settlement_in_taxed_bracket() {
        let input = create_input("600000", "01/01/2023", "30/06/2023", 30);
        let result = SettlementCalculator::default().compute_all(&input).unwrap();

        assert_eq!(result.gross_total(), dec("79665.00"));
        assert_eq!(result.withholding, dec("-300463.90"));
        assert_eq!(result.net_total, dec("380128.90"));
    }

    /// SC-004: every figure has two decimal places
    #[test]
    fn test_all_figures_have_two_decimal_places() {
        let result = SettlementCalculator::default()
            .compute_all(&reference_input())
            .unwrap();

        for amount in [
            result.indemnity,
            result.vacation_pay,
            result.severance_fund,
            result.severance_fund_interest,
            result.service_bonus,
            result.withholding,
            result.net_total,
        ] {
            assert_eq!(amount.scale(), 2, "{} should have scale 2", amount);
        }
    }

    #[test]
    fn test_negative_salary_fails_whole_computation() {
        let input = create_input("-1", "01/01/2023", "01/06/2023", 15);
        let result = SettlementCalculator::default().compute_all(&input);
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_negative_days_fails_whole_computation() {
        let input = create_input("2000000", "01/01/2023", "01/06/2023", -1);
        let result = SettlementCalculator::default().compute_all(&input);
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_invalid_date_fails_whole_computation() {
        let input = create_input("2000000", "01/01/2023", "31/02/2023", 15);
        let result = SettlementCalculator::default().compute_all(&input);
        assert!(matches!(result, Err(EngineError::ParseError { .. })));
    }

    #[test]
    fn test_individual_operations_match_compute_all() {
        let calculator = SettlementCalculator::default();
        let result = calculator.compute_all(&reference_input()).unwrap();
        let salary = dec("2000000");

        assert_eq!(
            calculator.indemnity(salary, "01/01/2023", "01/06/2023").unwrap(),
            result.indemnity
        );
        assert_eq!(calculator.vacation_pay(salary, 15).unwrap(), result.vacation_pay);
        assert_eq!(calculator.severance_fund(salary, 15).unwrap(), result.severance_fund);
        assert_eq!(
            calculator
                .severance_fund_interest(result.severance_fund, 15)
                .unwrap(),
            result.severance_fund_interest
        );
        assert_eq!(calculator.service_bonus(salary, 15).unwrap(), result.service_bonus);
        assert_eq!(calculator.withholding(result.gross_total()), result.withholding);
    }

    #[test]
    fn test_custom_tax_unit_value_changes_withholding() {
        let input = create_input("600000", "01/01/2023", "30/06/2023", 30);
        let default_result = SettlementCalculator::default().compute_all(&input).unwrap();
        let custom_result = SettlementCalculator::with_tax_unit_value(dec("47065"))
            .unwrap()
            .compute_all(&input)
            .unwrap();

        assert_eq!(default_result.gross_total(), custom_result.gross_total());
        assert_ne!(default_result.withholding, custom_result.withholding);
    }

    /// SC-005: withholding midpoint reached through a full settlement
    #[test]
    fn test_settlement_with_withholding_midpoint() {
        let input = create_input("340000", "01/01/2023", "30/06/2023", 30);
        let result = SettlementCalculator::default().compute_all(&input).unwrap();

        assert_eq!(result.gross_total(), dec("45143.50"));
        // (45143.50 - 95 x 39205) x 0.19 + 10 x 39205 = -307022.985
        assert_eq!(result.withholding, dec("-307022.99"));
        assert_eq!(result.net_total, dec("352166.49"));
    }

    /// SC-006: salaries beyond the Decimal range fail instead of panicking
    #[test]
    fn test_salary_overflow_fails_whole_computation() {
        let mut input = reference_input();
        input.base_salary = Decimal::MAX;

        match SettlementCalculator::default().compute_all(&input) {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_components_that_fit_but_total_past_range_fail() {
        // Each component carries cents; their 8.2e26 total cannot.
        let input = create_input("500000000000000000000000000", "01/01/2023", "01/06/2023", 150);
        match SettlementCalculator::default().compute_all(&input) {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_salaries_that_carry_cents_still_compute() {
        let input = create_input("50000000000000000000000000", "01/01/2023", "01/06/2023", 360);
        let result = SettlementCalculator::default().compute_all(&input).unwrap();

        assert_eq!(result.severance_fund, dec("50000000000000000000000000.00"));
        assert_eq!(result.withholding, Decimal::ZERO);
        assert_eq!(result.net_total, result.gross_total());
    }

    #[test]
    fn test_with_tax_unit_value_rejects_zero() {
        assert!(SettlementCalculator::with_tax_unit_value(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_exit_reason_does_not_affect_figures() {
        let calculator = SettlementCalculator::default();
        let mut other = reference_input();
        other.exit_reason = "despido".to_string();

        assert_eq!(
            calculator.compute_all(&reference_input()).unwrap(),
            calculator.compute_all(&other).unwrap()
        );
    }

    /// RP-001: report carries six steps in formula order
    #[test]
    fn test_report_has_one_step_per_formula() {
        let report = SettlementCalculator::default()
            .compute_report(&reference_input())
            .unwrap();

        let rule_ids: Vec<&str> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "indemnity",
                "vacation_pay",
                "severance_fund",
                "severance_fund_interest",
                "service_bonus",
                "withholding"
            ]
        );
        let step_numbers: Vec<u32> = report.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    /// RP-002: report figures equal compute_all figures
    #[test]
    fn test_report_matches_compute_all() {
        let calculator = SettlementCalculator::default();
        let report = calculator.compute_report(&reference_input()).unwrap();

        assert_eq!(report.result, calculator.compute_all(&reference_input()).unwrap());
        assert_eq!(report.exit_reason, "renuncia");
        assert_eq!(report.tax_unit_value, dec("39205"));
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
    }

    /// RP-003: bracket gap is flagged
    #[test]
    fn test_report_flags_bracket_gap() {
        let report = SettlementCalculator::default()
            .compute_report(&reference_input())
            .unwrap();

        let codes: Vec<&str> = report
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["WITHHOLDING_BRACKET_GAP"]);
    }

    /// RP-004: negative withholding is flagged
    #[test]
    fn test_report_flags_negative_withholding() {
        let input = create_input("600000", "01/01/2023", "30/06/2023", 30);
        let report = SettlementCalculator::default().compute_report(&input).unwrap();

        assert!(
            report
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "NEGATIVE_WITHHOLDING")
        );
    }

    /// RP-005: end date on the 31st is flagged
    #[test]
    fn test_report_flags_negative_remaining_days() {
        let input = create_input("300000", "01/01/2023", "31/01/2023", 0);
        let report = SettlementCalculator::default().compute_report(&input).unwrap();

        assert_eq!(report.result.indemnity, dec("-10000.00"));
        let codes: Vec<&str> = report
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["NEGATIVE_REMAINING_DAYS"]);
    }

    /// RP-006: vacation before start is flagged without changing figures
    #[test]
    fn test_report_flags_vacation_before_start() {
        let calculator = SettlementCalculator::default();
        let input = create_input("300000", "01/06/2023", "15/01/2023", 0);
        let report = calculator.compute_report(&input).unwrap();

        assert_eq!(report.result, calculator.compute_all(&input).unwrap());
        assert!(
            report
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "VACATION_BEFORE_START" && w.severity == "low")
        );
    }
}
