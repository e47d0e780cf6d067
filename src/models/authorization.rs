//! Authorization chain types.
//!
//! Requests that trip a configured limit travel a single forward path through
//! the approval roles; these types name the states, roles, and attachment
//! flags that the routing state machine inspects.

use serde::{Deserialize, Serialize};

/// Position of a request in the extended authorization chain.
///
/// Transitions are strictly forward; rejection/return-to-sender is an external
/// override outside the engine's authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    /// Request filed, not yet submitted into the chain.
    Pending,
    /// Awaiting the requester's manager (gestor).
    AwaitingManager,
    /// Awaiting the budget office (SOSFU).
    AwaitingBudgetOffice,
    /// Awaiting legal/finance advisory (AJSEFIN).
    AwaitingLegalFinance,
    /// Awaiting the ordering officer's signature (ordenador).
    AwaitingOrderingOfficer,
    /// Fully authorized.
    Authorized,
}

/// Role of the actor currently looking at a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The requester who receives and accounts for the advance.
    Suprido,
    /// The requester's immediate manager.
    Gestor,
    /// The budget office.
    Sosfu,
    /// Legal/finance advisory.
    Ajsefin,
    /// The ordering officer who signs the authorization.
    Ordenador,
}

/// Attachment flags the routing state machine gates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    /// Manager's justification for the exceeded limits.
    #[serde(default)]
    pub justification: bool,
    /// Budget regularity certificate.
    #[serde(default)]
    pub certificate: bool,
    /// Drafted authorization document.
    #[serde(default)]
    pub authorization: bool,
}
