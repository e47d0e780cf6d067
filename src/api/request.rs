//! Request types for the engine API.
//!
//! This module defines the JSON request structures for all endpoints. Each
//! DTO maps into the strongly-typed domain entities before any calculation
//! runs; loosely-typed records never reach the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{
    Attachments, AuthorizationState, FundingUnit, LineItem, MealKind, Quarter, Role, UnitStatus,
};

/// Request body for `POST /withholding/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingRequest {
    /// Gross value of the service.
    pub gross_value: Decimal,
    /// Fiscal year selecting the tax-rate table.
    pub fiscal_year: i32,
    /// Optional municipal ISS rate override.
    #[serde(default)]
    pub iss_rate: Option<Decimal>,
}

/// Request body for `POST /distributions/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRequest {
    /// Percentage by category; must sum to 100 within tolerance.
    pub distribution: HashMap<String, Decimal>,
}

/// A line item in an evaluation request. The derived total is not accepted
/// from the wire; it is recomputed on mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Free-text description of the expense.
    pub description: String,
    /// Budget expense-element code.
    pub element_code: String,
    /// Price per unit.
    pub unit_value: Decimal,
    /// Number of units.
    pub quantity: Decimal,
    /// Whether the quantity tracks the approved participant headcount.
    #[serde(default)]
    pub is_auto: bool,
    /// Meal type, when the line is a meal purchase.
    #[serde(default)]
    pub frequency_kind: Option<MealKind>,
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        let mut item = LineItem {
            description: req.description,
            element_code: req.element_code,
            unit_value: req.unit_value,
            quantity: req.quantity,
            total: Decimal::ZERO,
            is_auto: req.is_auto,
            frequency_kind: req.frequency_kind,
        };
        item.recompute_total();
        item
    }
}

/// Request body for `POST /requests/evaluate`.
///
/// Carries the current approved snapshot of a request plus the viewer's role,
/// so one call yields the findings and the routing decision together — the
/// reevaluation the caller runs on every edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Approved participant headcounts by category.
    #[serde(default)]
    pub approved_participants: HashMap<String, u32>,
    /// Approved line items.
    #[serde(default)]
    pub approved_items: Vec<LineItemRequest>,
    /// Date the request was filed.
    #[serde(default)]
    pub request_date: Option<NaiveDate>,
    /// Date of the session the advance pays for.
    #[serde(default)]
    pub session_date: Option<NaiveDate>,
    /// Date the advance was disbursed.
    #[serde(default)]
    pub disbursement_date: Option<NaiveDate>,
    /// "Today" for the overdue check.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// The role looking at the request.
    pub current_role: Role,
    /// Where the request currently sits in the chain.
    pub authorization_state: AuthorizationState,
    /// Attachment flags present on the request.
    #[serde(default)]
    pub attachments: Attachments,
}

/// Request body for `POST /accountability/evaluate`. The body is the ledger
/// itself; see [`crate::models::ReconciliationLedger`].
pub type AccountabilityRequest = crate::models::ReconciliationLedger;

/// A funding unit in a batch allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingUnitRequest {
    /// Unique identifier for the unit.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Administrative code.
    pub code: String,
    /// Responsible person reference, if assigned.
    #[serde(default)]
    pub responsible_id: Option<String>,
    /// Annual budget ceiling.
    pub annual_ceiling: Decimal,
    /// Category percentage split.
    #[serde(default)]
    pub category_split: HashMap<String, Decimal>,
    /// Stored administrative status.
    pub status: UnitStatus,
}

impl From<FundingUnitRequest> for FundingUnit {
    fn from(req: FundingUnitRequest) -> Self {
        FundingUnit {
            id: req.id,
            name: req.name,
            code: req.code,
            responsible_id: req.responsible_id,
            annual_ceiling: req.annual_ceiling,
            category_split: req.category_split,
            status: req.status,
        }
    }
}

/// Request body for `POST /batches/allocate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAllocationRequest {
    /// Fiscal year of the batch.
    pub year: i32,
    /// Quarter the batch covers.
    pub quarter: Quarter,
    /// All funding units, fetched in one bulk read by the caller.
    pub units: Vec<FundingUnitRequest>,
    /// Unit ids the operator manually excluded.
    #[serde(default)]
    pub manually_excluded: HashSet<String>,
}
