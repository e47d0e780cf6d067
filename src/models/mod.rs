//! Domain models for the Budget Allocation & Authorization Engine.
//!
//! These are the strongly-typed entities the engine computes over. The
//! loosely-typed records coming back from the external record store must be
//! mapped into these shapes at the adapter boundary before reaching any
//! calculation.

mod authorization;
mod batch;
mod expense_request;
mod funding_unit;
mod reconciliation;

pub use authorization::{Attachments, AuthorizationState, Role};
pub use batch::{BatchAllocation, BatchStatus, Quarter, UnitAllocation};
pub use expense_request::{ExpenseRequest, LineItem, MealKind, RequestCategory};
pub use funding_unit::{FundingUnit, UnitStatus};
pub use reconciliation::ReconciliationLedger;
