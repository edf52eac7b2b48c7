//! HTTP API module for the settlement engine.
//!
//! This module provides the REST endpoint that turns a JSON request into a
//! settlement report. It performs no calculation of its own.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
