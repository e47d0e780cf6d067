//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency value half-up to two decimal places.
///
/// Every intermediate monetary figure in the engine is rounded with this
/// function at the step it is produced, matching currency-cent semantics,
/// rather than once at the end of a computation.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(15_495, 3)), Decimal::new(15_50, 2));
/// assert_eq!(round2(Decimal::new(15_494, 3)), Decimal::new(15_49, 2));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so cent values always serialize with two places.
    rounded.rescale(2);
    rounded
}
