//! HTTP API for the Budget Allocation & Authorization Engine.
//!
//! This module provides the synchronous HTTP boundary of the engine: thin
//! handlers that map JSON payloads into domain types, invoke one calculation,
//! and return the result. No handler performs I/O beyond the response.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AccountabilityRequest, BatchAllocationRequest, DistributionRequest, EvaluateRequest,
    FundingUnitRequest, LineItemRequest, WithholdingRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
