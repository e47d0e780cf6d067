//! Percentage distribution validation.
//!
//! A funding unit's category split and a request's expense-element
//! distribution are both percentage maps that must sum to 100. One generic
//! validator covers both.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{EngineError, EngineResult};

/// Allowed deviation from 100 when summing a percentage map.
pub const DISTRIBUTION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

/// Validates that a percentage map sums to 100 within tolerance.
///
/// This is a business-rule check, not a fault: an unbalanced map yields
/// `Ok(false)` for the caller to surface inline. Only a malformed map (a
/// negative percentage) is an error.
///
/// # Errors
///
/// Returns `InvalidInput` when any percentage is negative.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::validate_distribution;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut split = HashMap::new();
/// split.insert("consumo", Decimal::from(60));
/// split.insert("servicos", Decimal::from(40));
/// assert!(validate_distribution(&split).unwrap());
///
/// split.insert("servicos", Decimal::from(41));
/// assert!(!validate_distribution(&split).unwrap());
/// ```
pub fn validate_distribution<K: Eq + Hash>(
    distribution: &HashMap<K, Decimal>,
) -> EngineResult<bool> {
    let mut sum = Decimal::ZERO;
    for value in distribution.values() {
        if *value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "distribution".to_string(),
                message: "percentages must not be negative".to_string(),
            });
        }
        sum += *value;
    }
    Ok((sum - Decimal::ONE_HUNDRED).abs() < DISTRIBUTION_TOLERANCE)
}
