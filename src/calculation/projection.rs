//! Approved-projection recomputation.
//!
//! Reviewers edit approved participant headcounts independently of the
//! requested ones. Line items flagged `is_auto` must then track the new
//! headcount: their quantity scales by the ratio the original projection
//! established between quantity and total participants.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Multiplier used when the original projection recorded zero participants:
/// the quantity then tracks the approved headcount directly.
pub const FALLBACK_MULTIPLIER: Decimal = Decimal::ONE;

/// Snapshot of the original (requested) projection an auto item scales from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginalProjection {
    /// Quantity the item carried in the requested projection.
    pub quantity: Decimal,
    /// Total participant headcount of the requested projection.
    pub total_participants: u32,
}

impl OriginalProjection {
    /// The per-participant multiplier: `quantity / total_participants`, or
    /// [`FALLBACK_MULTIPLIER`] when the original total was zero.
    pub fn multiplier(&self) -> Decimal {
        if self.total_participants == 0 {
            FALLBACK_MULTIPLIER
        } else {
            self.quantity / Decimal::from(self.total_participants)
        }
    }
}

/// Recomputes auto line items for a new approved participant total.
///
/// For each item with `is_auto`, sets
/// `quantity = approved_total * original_multiplier` and recomputes the total.
/// Non-auto items only have their totals recomputed (quantity and unit value
/// are whatever the reviewer last set). Idempotent for a fixed input set.
///
/// # Arguments
///
/// * `items` - The approved projection being edited, paired with each item's
///   original snapshot
/// * `approved_total` - The new total approved participant headcount
pub fn recompute_auto_quantities(
    items: &mut [(LineItem, OriginalProjection)],
    approved_total: u32,
) {
    for (item, original) in items.iter_mut() {
        if item.is_auto {
            item.quantity = Decimal::from(approved_total) * original.multiplier();
        }
        item.recompute_total();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(quantity: &str, unit_value: &str, is_auto: bool) -> LineItem {
        let mut li = LineItem {
            description: "Almoço".to_string(),
            element_code: "33.90.30".to_string(),
            unit_value: dec(unit_value),
            quantity: dec(quantity),
            total: Decimal::ZERO,
            is_auto,
            frequency_kind: Some(MealKind::Lunch),
        };
        li.recompute_total();
        li
    }

    /// PJ-001: auto quantity scales by the original ratio
    #[test]
    fn test_auto_quantity_scales_with_headcount() {
        // Original: 30 meals for 25 participants -> multiplier 1.2
        let mut items = vec![(
            item("30", "28.00", true),
            OriginalProjection {
                quantity: dec("30"),
                total_participants: 25,
            },
        )];
        recompute_auto_quantities(&mut items, 20);
        assert_eq!(items[0].0.quantity, dec("24.0"));
        assert_eq!(items[0].0.total, dec("672.00"));
    }

    /// PJ-002: zero original participants falls back to tracking headcount
    #[test]
    fn test_fallback_multiplier_when_original_total_zero() {
        let mut items = vec![(
            item("10", "11.00", true),
            OriginalProjection {
                quantity: dec("10"),
                total_participants: 0,
            },
        )];
        recompute_auto_quantities(&mut items, 7);
        assert_eq!(items[0].0.quantity, dec("7"));
        assert_eq!(items[0].0.total, dec("77.00"));
    }

    /// PJ-003: non-auto items keep their quantity, totals still refresh
    #[test]
    fn test_non_auto_quantity_untouched() {
        let mut items = vec![(
            item("4", "150.00", false),
            OriginalProjection {
                quantity: dec("4"),
                total_participants: 25,
            },
        )];
        items[0].0.unit_value = dec("160.00");
        recompute_auto_quantities(&mut items, 99);
        assert_eq!(items[0].0.quantity, dec("4"));
        assert_eq!(items[0].0.total, dec("640.00"));
    }

    /// PJ-004: recomputation is idempotent
    #[test]
    fn test_recompute_idempotent() {
        let mut items = vec![(
            item("30", "28.00", true),
            OriginalProjection {
                quantity: dec("30"),
                total_participants: 25,
            },
        )];
        recompute_auto_quantities(&mut items, 20);
        let snapshot = items.clone();
        recompute_auto_quantities(&mut items, 20);
        assert_eq!(items, snapshot);
    }
}
