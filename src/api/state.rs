//! Application state for the settlement API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::SettlementCalculator;

/// Shared application state.
///
/// Holds the calculator every request is computed with.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<SettlementCalculator>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: SettlementCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the calculator.
    pub fn calculator(&self) -> &SettlementCalculator {
        &self.calculator
    }
}
