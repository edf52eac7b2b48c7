//! Core data models for the settlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod settlement_input;
mod settlement_result;

pub use settlement_input::SettlementInput;
pub use settlement_result::{
    AuditStep, AuditTrace, AuditWarning, SettlementReport, SettlementResult,
};
