//! Labor settlement engine for Colombian employment terminations.
//!
//! This crate computes a settlement ("liquidación") from a monthly salary,
//! two dates and a count of accrued vacation days: indemnity, vacation pay,
//! severance fund and its interest, service bonus, withholding tax and the
//! net total payable. The formulas live in [`calculation`]; [`api`] exposes
//! them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
