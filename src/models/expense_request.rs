//! Expense request and line item models.
//!
//! An expense request carries a requested projection and an independently
//! editable approved projection. Line item totals are derived values and are
//! recomputed whenever quantity or unit value changes; see
//! [`crate::calculation::recompute_auto_quantities`] for the auto-quantity
//! rule applied to participant-driven items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::AuthorizationState;
use crate::calculation::round2;

/// Category of an expense request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    /// Routine recurring expense.
    Ordinary,
    /// Exceptional expense (e.g., a jury session).
    Extraordinary,
}

/// Meal type driving auto-recalculation and per-meal price ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    /// Almoço.
    Lunch,
    /// Jantar.
    Dinner,
    /// Lanche.
    Snack,
}

/// A single projected expense line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description of the expense.
    pub description: String,
    /// Budget expense-element code (e.g., "33.90.30").
    pub element_code: String,
    /// Price per unit in currency.
    pub unit_value: Decimal,
    /// Number of units.
    pub quantity: Decimal,
    /// Derived total, always `quantity * unit_value` rounded to cents.
    pub total: Decimal,
    /// Whether the quantity tracks the approved participant headcount.
    #[serde(default)]
    pub is_auto: bool,
    /// Meal type, when the line is a meal purchase.
    #[serde(default)]
    pub frequency_kind: Option<MealKind>,
}

impl LineItem {
    /// Recomputes the derived total from quantity and unit value.
    ///
    /// Must be called whenever either factor changes. Idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use suprimento_engine::models::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let mut item = LineItem {
    ///     description: "Almoço de jurados".to_string(),
    ///     element_code: "33.90.30".to_string(),
    ///     unit_value: Decimal::new(28_50, 2),
    ///     quantity: Decimal::from(12),
    ///     total: Decimal::ZERO,
    ///     is_auto: true,
    ///     frequency_kind: None,
    /// };
    /// item.recompute_total();
    /// assert_eq!(item.total, Decimal::new(342_00, 2));
    /// ```
    pub fn recompute_total(&mut self) {
        self.total = round2(self.quantity * self.unit_value);
    }
}

/// A reimbursement/advance request with its projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Identifier of the request.
    pub id: String,
    /// Identifier of the requester (suprido).
    pub requester_id: String,
    /// Expense category.
    pub category: RequestCategory,
    /// Named participant headcounts as requested (jury-session categories,
    /// including "police" escort headcount).
    #[serde(default)]
    pub requested_participants: HashMap<String, u32>,
    /// Named participant headcounts as approved by the reviewer.
    #[serde(default)]
    pub approved_participants: HashMap<String, u32>,
    /// Line items as requested.
    pub requested_projection: Vec<LineItem>,
    /// Line items as approved; defaults to a copy of the requested projection.
    pub approved_projection: Vec<LineItem>,
    /// Current position in the authorization chain.
    pub authorization_status: AuthorizationState,
    /// Date the request was filed.
    pub request_date: NaiveDate,
    /// Date of the session/event the advance pays for, when applicable.
    #[serde(default)]
    pub session_date: Option<NaiveDate>,
    /// Date the advance was disbursed; starts the accountability clock.
    #[serde(default)]
    pub disbursement_date: Option<NaiveDate>,
}

impl ExpenseRequest {
    /// Sum of all approved participant headcounts.
    pub fn total_approved_participants(&self) -> u32 {
        self.approved_participants.values().sum()
    }

    /// Sum of all requested participant headcounts.
    pub fn total_requested_participants(&self) -> u32 {
        self.requested_participants.values().sum()
    }
}
