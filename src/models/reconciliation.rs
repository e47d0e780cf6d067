//! Accountability (prestação de contas) ledger model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The money trail of one accountability case.
///
/// Created when an advance is disbursed and mutated as receipts and GDR
/// deposit slips are attached. Validity is computed by
/// [`crate::calculation::evaluate_ledger`], never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationLedger {
    /// Advance amount granted to the suprido.
    pub total_received: Decimal,
    /// Sum of all attached receipt values.
    pub total_spent: Decimal,
    /// Total INSS withheld from individual service providers.
    pub total_inss_retained: Decimal,
    /// Total ISS withheld from individual service providers.
    pub total_iss_retained: Decimal,
    /// Whether the INSS remittance GDR has been confirmed.
    #[serde(default)]
    pub inss_deposit_confirmed: bool,
    /// Whether the unused-balance return GDR has been confirmed.
    #[serde(default)]
    pub balance_deposit_confirmed: bool,
}

impl ReconciliationLedger {
    /// Unspent money that must be returned: `total_received - total_spent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use suprimento_engine::models::ReconciliationLedger;
    /// use rust_decimal::Decimal;
    ///
    /// let ledger = ReconciliationLedger {
    ///     total_received: Decimal::new(1000_00, 2),
    ///     total_spent: Decimal::new(700_00, 2),
    ///     total_inss_retained: Decimal::ZERO,
    ///     total_iss_retained: Decimal::ZERO,
    ///     inss_deposit_confirmed: false,
    ///     balance_deposit_confirmed: false,
    /// };
    /// assert_eq!(ledger.balance_to_return(), Decimal::new(300_00, 2));
    /// ```
    pub fn balance_to_return(&self) -> Decimal {
        self.total_received - self.total_spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_to_return_is_received_minus_spent() {
        let ledger = ReconciliationLedger {
            total_received: Decimal::new(2500_00, 2),
            total_spent: Decimal::new(2499_10, 2),
            total_inss_retained: Decimal::ZERO,
            total_iss_retained: Decimal::ZERO,
            inss_deposit_confirmed: false,
            balance_deposit_confirmed: false,
        };
        assert_eq!(ledger.balance_to_return(), Decimal::new(90, 2));
    }

    #[test]
    fn test_balance_can_be_zero_when_fully_spent() {
        let ledger = ReconciliationLedger {
            total_received: Decimal::new(800_00, 2),
            total_spent: Decimal::new(800_00, 2),
            total_inss_retained: Decimal::new(110_00, 2),
            total_iss_retained: Decimal::new(50_00, 2),
            inss_deposit_confirmed: false,
            balance_deposit_confirmed: false,
        };
        assert_eq!(ledger.balance_to_return(), Decimal::ZERO);
    }
}
