//! Budget Allocation & Authorization Engine for suprimento de fundos.
//!
//! This crate implements the calculation core of a Brazilian court
//! cash-advance (suprimento de fundos) administration: tax withholding for
//! individual service providers, percentage-split validation, limit-exception
//! detection, the extended authorization routing chain, accountability
//! reconciliation, and quarterly batch budget allocation.
//!
//! All operations are pure functions over explicit input snapshots;
//! persistence, document rendering, and realtime notification belong to the
//! surrounding application.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
