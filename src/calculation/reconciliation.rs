//! Accountability (prestação de contas) reconciliation.
//!
//! Evaluates a ledger to a zero-balance invariant: everything the suprido
//! received must be accounted for by receipts, remitted withholdings, and
//! returned balance. This module never errors; it only reports, and the
//! caller renders the report as actionable guidance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ReconciliationLedger;

/// Tolerance for the conta-fecha (books balance) check.
const BOOKS_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// A GDR deposit-slip instrument the suprido must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositInstrument {
    /// GDR remitting the withheld INSS.
    InssDeposit,
    /// GDR returning the unspent balance.
    BalanceDeposit,
}

/// The evaluated condition of one accountability case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Whether the case can be forwarded: every required instrument is
    /// confirmed and something was actually spent.
    pub is_valid: bool,
    /// Instruments the case requires, in fixed INSS-then-balance order.
    pub required_instruments: Vec<DepositInstrument>,
    /// Both instruments required at once (the "duas GDRs" condition). A
    /// distinct reportable state because it is the workflow's known
    /// pain-point, not just the conjunction of two flags.
    pub dual_deposit_required: bool,
    /// Unspent balance the case must return.
    pub balance_to_return: Decimal,
    /// Conta fecha: spent plus confirmed returned balance reassembles the
    /// advance to the cent. Stricter than `is_valid`; used only for a
    /// success-state display, never to gate workflow progress.
    pub books_balance: bool,
}

/// Evaluates a reconciliation ledger.
///
/// - `InssDeposit` is required iff any INSS was withheld.
/// - `BalanceDeposit` is required iff the balance to return is positive.
/// - The case is valid when every required instrument is confirmed and
///   `total_spent > 0`.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::{DepositInstrument, evaluate_ledger};
/// use suprimento_engine::models::ReconciliationLedger;
/// use rust_decimal::Decimal;
///
/// let ledger = ReconciliationLedger {
///     total_received: Decimal::new(1000_00, 2),
///     total_spent: Decimal::new(700_00, 2),
///     total_inss_retained: Decimal::new(50_00, 2),
///     total_iss_retained: Decimal::ZERO,
///     inss_deposit_confirmed: false,
///     balance_deposit_confirmed: false,
/// };
/// let report = evaluate_ledger(&ledger);
/// assert!(!report.is_valid);
/// assert!(report.dual_deposit_required);
/// assert_eq!(
///     report.required_instruments,
///     vec![DepositInstrument::InssDeposit, DepositInstrument::BalanceDeposit],
/// );
/// ```
pub fn evaluate_ledger(ledger: &ReconciliationLedger) -> ReconciliationReport {
    let balance_to_return = ledger.balance_to_return();

    let inss_required = ledger.total_inss_retained > Decimal::ZERO;
    let balance_required = balance_to_return > Decimal::ZERO;

    let mut required_instruments = Vec::new();
    if inss_required {
        required_instruments.push(DepositInstrument::InssDeposit);
    }
    if balance_required {
        required_instruments.push(DepositInstrument::BalanceDeposit);
    }

    let is_valid = (!inss_required || ledger.inss_deposit_confirmed)
        && (!balance_required || ledger.balance_deposit_confirmed)
        && ledger.total_spent > Decimal::ZERO;

    let returned = if balance_required && ledger.balance_deposit_confirmed {
        balance_to_return
    } else {
        Decimal::ZERO
    };
    let books_balance =
        (ledger.total_spent + returned - ledger.total_received).abs() < BOOKS_TOLERANCE;

    ReconciliationReport {
        is_valid,
        required_instruments,
        dual_deposit_required: inss_required && balance_required,
        balance_to_return,
        books_balance,
    }
}
