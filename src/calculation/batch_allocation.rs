//! Quarterly batch budget allocation.
//!
//! Given all funding units and a manual exclusion set, computes the per-unit
//! quarter values and the batch aggregates in one pass over an in-memory
//! snapshot; callers fetch all units in one bulk read first.
//!
//! Rounding rule: each unit's quarter value is rounded to cents before
//! summation (round-then-sum), so per-unit figures printed on the generated
//! documents always add up to the batch total exactly.

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::{BatchAllocation, BatchStatus, FundingUnit, Quarter, UnitAllocation, UnitStatus};

use super::round2;

/// Documents generated per included unit: ordinance, commitment note,
/// regularity certificate.
const DOCUMENTS_PER_PROCESS: usize = 3;

/// Quarterly divisor over the annual ceiling.
const QUARTER_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Computes a quarterly batch allocation over the given units.
///
/// Inclusion rules, in order:
/// 1. Units whose effective status is `NoResponsible` are unconditionally
///    excluded; a manual "un-exclusion" cannot bring them back.
/// 2. `Blocked` units are excluded.
/// 3. `Regular` and `Pending` units are included unless their id is in the
///    manual exclusion set.
///
/// Deterministic: the same units and exclusion set always produce the same
/// totals, and allocations preserve the input's unit order. An empty
/// inclusion set yields a zero-total batch, which is not an error; callers
/// decide whether to block generation on it.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::allocate_batch;
/// use suprimento_engine::models::{FundingUnit, Quarter, UnitStatus};
/// use rust_decimal::Decimal;
/// use std::collections::{HashMap, HashSet};
///
/// let unit = FundingUnit {
///     id: "u1".to_string(),
///     name: "Comarca de Tarauacá".to_string(),
///     code: "TRC".to_string(),
///     responsible_id: Some("p1".to_string()),
///     annual_ceiling: Decimal::new(60_000_00, 2),
///     category_split: HashMap::new(),
///     status: UnitStatus::Regular,
/// };
/// let batch = allocate_batch(&[unit], &HashSet::new(), 2025, Quarter::Q1);
/// assert_eq!(batch.total_quarter_value, Decimal::new(20_000_00, 2));
/// assert_eq!(batch.document_count, 3);
/// ```
pub fn allocate_batch(
    units: &[FundingUnit],
    manually_excluded: &HashSet<String>,
    year: i32,
    quarter: Quarter,
) -> BatchAllocation {
    let mut allocations = Vec::new();
    let mut excluded_unit_ids = Vec::new();
    let mut total_annual_sum = Decimal::ZERO;
    let mut total_quarter_value = Decimal::ZERO;

    for unit in units {
        let included = match unit.effective_status() {
            UnitStatus::NoResponsible | UnitStatus::Blocked => false,
            UnitStatus::Regular | UnitStatus::Pending => !manually_excluded.contains(&unit.id),
        };

        if !included {
            excluded_unit_ids.push(unit.id.clone());
            continue;
        }

        let quarter_value = round2(unit.annual_ceiling / QUARTER_DIVISOR);
        total_annual_sum += unit.annual_ceiling;
        total_quarter_value += quarter_value;
        allocations.push(UnitAllocation {
            unit_id: unit.id.clone(),
            unit_name: unit.name.clone(),
            annual_ceiling: unit.annual_ceiling,
            quarter_value,
        });
    }

    let process_count = allocations.len();

    BatchAllocation {
        year,
        quarter,
        allocations,
        excluded_unit_ids,
        total_annual_sum,
        total_quarter_value,
        process_count,
        document_count: process_count * DOCUMENTS_PER_PROCESS,
        status: BatchStatus::Generated,
    }
}
