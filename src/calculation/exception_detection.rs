//! Limit-exception detection.
//!
//! Compares a request's approved values against the configured limits and
//! emits one typed finding per exceeded limit. Findings are derived, never
//! persisted: the caller re-runs detection whenever approved participants or
//! approved unit values change, and the result is always the union of all
//! failed checks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LimitConfig;
use crate::models::{LineItem, MealKind};

/// Participant category key carrying the police escort headcount.
pub const POLICE_HEADCOUNT_KEY: &str = "police";

/// The kind of limit a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// Police escort headcount above the configured maximum.
    PoliceHeadcount,
    /// Lunch unit price above the configured ceiling.
    MealLunchValue,
    /// Dinner unit price above the configured ceiling.
    MealDinnerValue,
    /// Snack unit price above the configured ceiling.
    MealSnackValue,
    /// Request filed with fewer days of lead time than required.
    LeadTimeInsufficient,
    /// Accountability filing past its deadline.
    AccountabilityOverdue,
}

/// A single detected limit violation.
///
/// `excess` is always strictly positive; checks that pass emit nothing.
/// Monetary kinds express the three values in currency; day-based kinds
/// express them in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionFinding {
    /// Which limit was exceeded.
    pub kind: ExceptionKind,
    /// The approved/actual value.
    pub requested: Decimal,
    /// The configured limit.
    pub limit: Decimal,
    /// `requested - limit`, always > 0.
    pub excess: Decimal,
}

/// Snapshot of the request fields detection reads.
///
/// Built by the caller from the current approved values; detection itself
/// holds no state between invocations.
#[derive(Debug, Clone, Default)]
pub struct DetectionContext<'a> {
    /// Approved participant headcounts by category.
    pub approved_participants: &'a [(&'a str, u32)],
    /// Approved line items.
    pub approved_items: &'a [LineItem],
    /// Date the request was filed.
    pub request_date: Option<NaiveDate>,
    /// Date of the session the advance pays for.
    pub session_date: Option<NaiveDate>,
    /// Date the advance was disbursed; starts the accountability clock.
    pub disbursement_date: Option<NaiveDate>,
    /// "Today" for the overdue check, supplied by the caller so detection
    /// stays pure.
    pub reference_date: Option<NaiveDate>,
}

/// Detects every exceeded limit in the given snapshot.
///
/// Runs all checks and returns the union of failures; nothing short-circuits.
/// An empty result means the request needs no authorization detour.
/// Pure and idempotent: the same snapshot always yields the same findings.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::{DetectionContext, ExceptionKind, detect_exceptions};
/// use suprimento_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sosfu").unwrap();
/// let ctx = DetectionContext {
///     approved_participants: &[("police", 8)],
///     ..Default::default()
/// };
/// let findings = detect_exceptions(&ctx, loader.limits());
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].kind, ExceptionKind::PoliceHeadcount);
/// ```
pub fn detect_exceptions(ctx: &DetectionContext<'_>, limits: &LimitConfig) -> Vec<ExceptionFinding> {
    let mut findings = Vec::new();

    check_police_headcount(ctx, limits, &mut findings);
    check_meal_values(ctx, limits, &mut findings);
    check_lead_time(ctx, limits, &mut findings);
    check_accountability(ctx, limits, &mut findings);

    findings
}

fn check_police_headcount(
    ctx: &DetectionContext<'_>,
    limits: &LimitConfig,
    findings: &mut Vec<ExceptionFinding>,
) {
    let approved: u32 = ctx
        .approved_participants
        .iter()
        .filter(|(key, _)| *key == POLICE_HEADCOUNT_KEY)
        .map(|(_, count)| *count)
        .sum();

    if approved > limits.police_headcount {
        findings.push(ExceptionFinding {
            kind: ExceptionKind::PoliceHeadcount,
            requested: Decimal::from(approved),
            limit: Decimal::from(limits.police_headcount),
            excess: Decimal::from(approved - limits.police_headcount),
        });
    }
}

fn check_meal_values(
    ctx: &DetectionContext<'_>,
    limits: &LimitConfig,
    findings: &mut Vec<ExceptionFinding>,
) {
    // One finding per meal kind, against the priciest offending item, so a
    // projection with three over-limit lunches reads as a single lunch
    // exception.
    for (meal, kind, limit) in [
        (
            MealKind::Lunch,
            ExceptionKind::MealLunchValue,
            limits.meal_lunch_value,
        ),
        (
            MealKind::Dinner,
            ExceptionKind::MealDinnerValue,
            limits.meal_dinner_value,
        ),
        (
            MealKind::Snack,
            ExceptionKind::MealSnackValue,
            limits.meal_snack_value,
        ),
    ] {
        let highest = ctx
            .approved_items
            .iter()
            .filter(|item| item.frequency_kind == Some(meal))
            .map(|item| item.unit_value)
            .max();

        if let Some(value) = highest {
            if value > limit {
                findings.push(ExceptionFinding {
                    kind,
                    requested: value,
                    limit,
                    excess: value - limit,
                });
            }
        }
    }
}

fn check_lead_time(
    ctx: &DetectionContext<'_>,
    limits: &LimitConfig,
    findings: &mut Vec<ExceptionFinding>,
) {
    let (Some(request_date), Some(session_date)) = (ctx.request_date, ctx.session_date) else {
        return;
    };

    let available = (session_date - request_date).num_days();
    if available < limits.lead_time_days {
        findings.push(ExceptionFinding {
            kind: ExceptionKind::LeadTimeInsufficient,
            // For day-based kinds the "requested" slot carries the required
            // days and the "limit" slot the days actually available.
            requested: Decimal::from(limits.lead_time_days),
            limit: Decimal::from(available),
            excess: Decimal::from(limits.lead_time_days - available),
        });
    }
}

fn check_accountability(
    ctx: &DetectionContext<'_>,
    limits: &LimitConfig,
    findings: &mut Vec<ExceptionFinding>,
) {
    let (Some(disbursed), Some(today)) = (ctx.disbursement_date, ctx.reference_date) else {
        return;
    };

    let elapsed = (today - disbursed).num_days();
    if elapsed > limits.accountability_deadline_days {
        findings.push(ExceptionFinding {
            kind: ExceptionKind::AccountabilityOverdue,
            requested: Decimal::from(elapsed),
            limit: Decimal::from(limits.accountability_deadline_days),
            excess: Decimal::from(elapsed - limits.accountability_deadline_days),
        });
    }
}
