//! Calculation logic for the Budget Allocation & Authorization Engine.
//!
//! This module contains all the pure calculation functions: currency
//! rounding, tax withholding for individual service providers, percentage
//! distribution validation, projection recomputation, limit-exception
//! detection, authorization routing, accountability reconciliation, and
//! quarterly batch budget allocation.

mod batch_allocation;
mod distribution;
mod exception_detection;
mod projection;
mod reconciliation;
mod rounding;
mod routing;
mod tax_withholding;

pub use batch_allocation::allocate_batch;
pub use distribution::{DISTRIBUTION_TOLERANCE, validate_distribution};
pub use exception_detection::{
    DetectionContext, ExceptionFinding, ExceptionKind, POLICE_HEADCOUNT_KEY, detect_exceptions,
};
pub use projection::{FALLBACK_MULTIPLIER, OriginalProjection, recompute_auto_quantities};
pub use reconciliation::{DepositInstrument, ReconciliationReport, evaluate_ledger};
pub use routing::{RequiredAction, RoutingDecision, advance, next_action, submit};
pub use rounding::round2;
pub use tax_withholding::{TaxWithholding, calculate_withholding};
