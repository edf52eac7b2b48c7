//! Calculation logic for the settlement engine.
//!
//! This module contains the settlement formulas: indemnity for the rest of
//! the final month, vacation pay, severance fund and its interest, service
//! bonus, and the withholding rule, together with the currency rounding and
//! date parsing they share and the [`SettlementCalculator`] that composes them.

mod calculator;
mod date_parsing;
mod indemnity;
mod rounding;
mod service_bonus;
mod severance_fund;
mod vacation_pay;
mod withholding;

pub use calculator::SettlementCalculator;
pub use date_parsing::{SETTLEMENT_DATE_FORMAT, parse_settlement_date};
pub use indemnity::{IndemnityResult, PAYROLL_MONTH_DAYS, calculate_indemnity};
pub use rounding::round_currency;
pub use service_bonus::{SERVICE_BONUS_FACTOR, ServiceBonusResult, calculate_service_bonus};
pub use severance_fund::{
    PAYROLL_YEAR_DAYS, SEVERANCE_FUND_INTEREST_RATE, SeveranceFundInterestResult,
    SeveranceFundResult, calculate_severance_fund, calculate_severance_fund_interest,
};
pub use vacation_pay::{VACATION_PAY_DIVISOR, VacationPayResult, calculate_vacation_pay};
pub use withholding::{
    WITHHOLDING_BASE_DEDUCTION_UVT, WITHHOLDING_EXEMPT_THRESHOLD, WITHHOLDING_FIXED_UVT,
    WITHHOLDING_MARGINAL_RATE, WITHHOLDING_UPPER_THRESHOLD, WithholdingBracket,
};
