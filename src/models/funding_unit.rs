//! Funding unit model.
//!
//! A funding unit is a jurisdictional comarca or an administrative unit that
//! receives a yearly budget ceiling and a percentage split across expense
//! categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Administrative status of a funding unit.
///
/// Status transitions are set by the surrounding application; the engine only
/// reads them. See [`FundingUnit::effective_status`] for the one invariant the
/// engine enforces on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    /// Unit is in good standing and eligible for allocation.
    Regular,
    /// Unit has an open pendency but may still be allocated.
    Pending,
    /// Unit has no responsible person (sem suprido) and can never be allocated.
    NoResponsible,
    /// Unit is administratively blocked.
    Blocked,
}

/// A jurisdictional comarca or administrative unit with its budget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingUnit {
    /// Unique identifier for the unit.
    pub id: String,
    /// Display name (e.g., "Comarca de Rio Branco").
    pub name: String,
    /// Administrative code.
    pub code: String,
    /// Reference to the responsible person (suprido), if one is assigned.
    pub responsible_id: Option<String>,
    /// Annual budget ceiling in currency, always >= 0.
    pub annual_ceiling: Decimal,
    /// Percentage split across expense categories; must sum to 100 +/- 0.1.
    pub category_split: HashMap<String, Decimal>,
    /// Stored administrative status.
    pub status: UnitStatus,
}

impl FundingUnit {
    /// Returns the effective status of the unit.
    ///
    /// A unit with no responsible person is always `NoResponsible`, regardless
    /// of the stored status. The stored status is returned otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use suprimento_engine::models::{FundingUnit, UnitStatus};
    /// use rust_decimal::Decimal;
    /// use std::collections::HashMap;
    ///
    /// let unit = FundingUnit {
    ///     id: "u1".to_string(),
    ///     name: "Comarca de Bujari".to_string(),
    ///     code: "BUJ".to_string(),
    ///     responsible_id: None,
    ///     annual_ceiling: Decimal::new(36_000_00, 2),
    ///     category_split: HashMap::new(),
    ///     status: UnitStatus::Regular,
    /// };
    /// assert_eq!(unit.effective_status(), UnitStatus::NoResponsible);
    /// ```
    pub fn effective_status(&self) -> UnitStatus {
        if self.responsible_id.is_none() {
            UnitStatus::NoResponsible
        } else {
            self.status
        }
    }
}
