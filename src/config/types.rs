//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the deploying authority.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The deploying authority (e.g., "TJAC / SOSFU").
    pub authority: String,
    /// Human-readable configuration name.
    pub name: String,
    /// Version or effective date of this configuration.
    pub version: String,
}

/// Limit configuration driving exception detection.
///
/// Every value here is a per-deployment ceiling; exceeding one routes the
/// request through the extended authorization chain rather than rejecting it.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitConfig {
    /// Maximum police escort headcount before an exception is raised.
    pub police_headcount: u32,
    /// Maximum unit price for a lunch line item.
    pub meal_lunch_value: Decimal,
    /// Maximum unit price for a dinner line item.
    pub meal_dinner_value: Decimal,
    /// Maximum unit price for a snack line item.
    pub meal_snack_value: Decimal,
    /// Minimum days between filing and the session the advance pays for.
    pub lead_time_days: i64,
    /// Days after disbursement before the accountability filing is overdue.
    pub accountability_deadline_days: i64,
}

/// Limits configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfigFile {
    /// The limit values.
    pub limits: LimitConfig,
}

/// Tax withholding rates for one fiscal year.
///
/// Loaded from `tax/<year>.yaml`; a year without its own file uses the most
/// recent preceding year's rates.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRates {
    /// First fiscal year these rates apply to.
    pub fiscal_year: i32,
    /// Employee-side INSS rate applied to the capped gross (e.g., 0.11).
    pub inss_rate: Decimal,
    /// Default municipal ISS rate (e.g., 0.05); callers may override per item.
    pub iss_rate: Decimal,
    /// Employer-side INSS rate, informational only (e.g., 0.20).
    pub inss_patronal_rate: Decimal,
    /// Ceiling on the gross base used for employee-side INSS.
    pub inss_ceiling: Decimal,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    limits: LimitConfig,
    /// Tax rate tables by fiscal year (sorted oldest first).
    tax_rates: Vec<TaxRates>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, limits: LimitConfig, tax_rates: Vec<TaxRates>) -> Self {
        let mut sorted = tax_rates;
        sorted.sort_by_key(|r| r.fiscal_year);
        Self {
            metadata,
            limits,
            tax_rates: sorted,
        }
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the limit configuration.
    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    /// Returns all tax rate tables, oldest first.
    pub fn tax_rates(&self) -> &[TaxRates] {
        &self.tax_rates
    }

    /// Returns the tax rates in force for the given fiscal year.
    ///
    /// Picks the most recent table whose `fiscal_year` does not exceed the
    /// requested year, or `None` when the year predates every table.
    pub fn tax_rates_for(&self, fiscal_year: i32) -> Option<&TaxRates> {
        self.tax_rates
            .iter()
            .rev()
            .find(|r| r.fiscal_year <= fiscal_year)
    }
}
