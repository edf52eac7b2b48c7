//! Parsing of the `DD/MM/YYYY` dates accepted by the calculator.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The day/month/year format every settlement date must use.
pub const SETTLEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `DD/MM/YYYY` date.
///
/// Returns `ParseError` when the text does not match the format or names a
/// day that does not exist, such as `31/02/2023`.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::parse_settlement_date;
/// use chrono::NaiveDate;
///
/// let date = parse_settlement_date("01/06/2023").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
///
/// assert!(parse_settlement_date("2023-06-01").is_err());
/// ```
pub fn parse_settlement_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, SETTLEMENT_DATE_FORMAT).map_err(|e| {
        EngineError::ParseError {
            input: input.to_string(),
            message: e.to_string(),
        }
    })
}
