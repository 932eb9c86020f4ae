//! HTTP API module for the education payroll engine.
//!
//! This module exposes the calculators as JSON endpoints over axum.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RecordSummaryRequest;
pub use response::{ApiError, PayStepResponse, RecordSummaryResponse};
pub use state::AppState;
