//! Engine configuration.
//!
//! Limits and tax rates are deployment configuration, never hard-coded: the
//! per-meal price ceilings, the police headcount limit, lead-time and
//! accountability deadlines, and the fiscal-year tax-rate tables all come from
//! YAML files loaded at startup.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, LimitConfig, TaxRates};
