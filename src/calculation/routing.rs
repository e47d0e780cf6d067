//! Authorization routing for requests that exceeded a configured limit.
//!
//! The chain is a single forward path:
//! Suprido submits, the Gestor attaches a justification, SOSFU forwards,
//! AJSEFIN drafts the authorization, and the Ordenador signs. There is no
//! branching and no backward transition; rejection/return-to-sender is an
//! external override that resets state outside this module's authority.

use serde::{Deserialize, Serialize};

use crate::models::{Attachments, AuthorizationState, Role};

use super::ExceptionFinding;

/// The action the routing machine expects next from a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredAction {
    /// Suprido submits the request into the chain.
    Submit,
    /// Gestor attaches the justification and routes onward.
    AttachJustification,
    /// SOSFU forwards to legal/finance (requires the justification).
    ForwardToLegalFinance,
    /// AJSEFIN drafts the authorization document.
    DraftAuthorization,
    /// Ordenador signs the authorization.
    SignAuthorization,
    /// Nothing left to do; the request is authorized.
    None,
}

/// What the current role may do with a request right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// The action required to move the request forward, from this role's
    /// point of view. `None` when it is another role's turn.
    pub required_action: Option<RequiredAction>,
    /// Whether the forward transition is blocked on a missing attachment.
    /// Blocked is a workflow condition to render inline, never an error.
    pub is_blocked: bool,
}

/// Entry point of the chain: submits a request given its current findings.
///
/// Requests with no findings bypass the chain entirely and come back
/// `Authorized`; they never enter an awaiting state. Requests with findings
/// enter at `AwaitingManager`.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::submit;
/// use suprimento_engine::models::AuthorizationState;
///
/// assert_eq!(submit(&[]), AuthorizationState::Authorized);
/// ```
pub fn submit(findings: &[ExceptionFinding]) -> AuthorizationState {
    if findings.is_empty() {
        AuthorizationState::Authorized
    } else {
        AuthorizationState::AwaitingManager
    }
}

/// Returns the next state along the chain, or `None` from `Authorized`.
///
/// Strictly forward; no transition ever moves backward.
pub fn advance(state: AuthorizationState) -> Option<AuthorizationState> {
    match state {
        AuthorizationState::Pending => Some(AuthorizationState::AwaitingManager),
        AuthorizationState::AwaitingManager => Some(AuthorizationState::AwaitingBudgetOffice),
        AuthorizationState::AwaitingBudgetOffice => Some(AuthorizationState::AwaitingLegalFinance),
        AuthorizationState::AwaitingLegalFinance => {
            Some(AuthorizationState::AwaitingOrderingOfficer)
        }
        AuthorizationState::AwaitingOrderingOfficer => Some(AuthorizationState::Authorized),
        AuthorizationState::Authorized => None,
    }
}

/// The role whose action the given state is waiting on.
fn acting_role(state: AuthorizationState) -> Option<Role> {
    match state {
        AuthorizationState::Pending => Some(Role::Suprido),
        AuthorizationState::AwaitingManager => Some(Role::Gestor),
        AuthorizationState::AwaitingBudgetOffice => Some(Role::Sosfu),
        AuthorizationState::AwaitingLegalFinance => Some(Role::Ajsefin),
        AuthorizationState::AwaitingOrderingOfficer => Some(Role::Ordenador),
        AuthorizationState::Authorized => None,
    }
}

/// Determines what the current role must do, and whether it is blocked.
///
/// The SOSFU forward to legal/finance is blocked until the manager's
/// justification is attached; every other hop only needs its own action.
/// A role looking at a request that is waiting on somebody else gets
/// `required_action: None` and is never blocked.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::next_action;
/// use suprimento_engine::models::{Attachments, AuthorizationState, Role};
///
/// let decision = next_action(
///     Role::Sosfu,
///     AuthorizationState::AwaitingBudgetOffice,
///     &Attachments::default(),
/// );
/// assert!(decision.is_blocked);
/// ```
pub fn next_action(
    role: Role,
    state: AuthorizationState,
    attachments: &Attachments,
) -> RoutingDecision {
    if acting_role(state) != Some(role) {
        let required_action = if state == AuthorizationState::Authorized {
            Some(RequiredAction::None)
        } else {
            None
        };
        return RoutingDecision {
            required_action,
            is_blocked: false,
        };
    }

    match state {
        AuthorizationState::Pending => RoutingDecision {
            required_action: Some(RequiredAction::Submit),
            is_blocked: false,
        },
        AuthorizationState::AwaitingManager => RoutingDecision {
            required_action: Some(RequiredAction::AttachJustification),
            is_blocked: false,
        },
        AuthorizationState::AwaitingBudgetOffice => RoutingDecision {
            required_action: Some(RequiredAction::ForwardToLegalFinance),
            is_blocked: !attachments.justification,
        },
        AuthorizationState::AwaitingLegalFinance => RoutingDecision {
            required_action: Some(RequiredAction::DraftAuthorization),
            is_blocked: !attachments.justification,
        },
        AuthorizationState::AwaitingOrderingOfficer => RoutingDecision {
            required_action: Some(RequiredAction::SignAuthorization),
            is_blocked: false,
        },
        AuthorizationState::Authorized => RoutingDecision {
            required_action: Some(RequiredAction::None),
            is_blocked: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::calculation::ExceptionKind;

    fn finding() -> ExceptionFinding {
        ExceptionFinding {
            kind: ExceptionKind::PoliceHeadcount,
            requested: Decimal::from(8),
            limit: Decimal::from(5),
            excess: Decimal::from(3),
        }
    }

    /// RT-001: no findings bypasses the chain entirely
    #[test]
    fn test_submit_without_findings_authorizes_directly() {
        assert_eq!(submit(&[]), AuthorizationState::Authorized);
    }

    /// RT-002: findings enter the chain at the manager
    #[test]
    fn test_submit_with_findings_enters_chain() {
        assert_eq!(submit(&[finding()]), AuthorizationState::AwaitingManager);
    }

    /// RT-003: the chain walks forward to Authorized and stops
    #[test]
    fn test_advance_walks_full_chain() {
        let mut state = AuthorizationState::Pending;
        let mut seen = vec![state];
        while let Some(next) = advance(state) {
            state = next;
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                AuthorizationState::Pending,
                AuthorizationState::AwaitingManager,
                AuthorizationState::AwaitingBudgetOffice,
                AuthorizationState::AwaitingLegalFinance,
                AuthorizationState::AwaitingOrderingOfficer,
                AuthorizationState::Authorized,
            ]
        );
    }

    /// RT-004: SOSFU is blocked without the justification
    #[test]
    fn test_budget_office_blocked_without_justification() {
        let decision = next_action(
            Role::Sosfu,
            AuthorizationState::AwaitingBudgetOffice,
            &Attachments::default(),
        );
        assert_eq!(
            decision.required_action,
            Some(RequiredAction::ForwardToLegalFinance)
        );
        assert!(decision.is_blocked);
    }

    /// RT-005: SOSFU unblocks once the justification is attached
    #[test]
    fn test_budget_office_unblocked_with_justification() {
        let attachments = Attachments {
            justification: true,
            ..Default::default()
        };
        let decision = next_action(
            Role::Sosfu,
            AuthorizationState::AwaitingBudgetOffice,
            &attachments,
        );
        assert!(!decision.is_blocked);
    }

    /// RT-006: AJSEFIN also requires the justification to draft
    #[test]
    fn test_legal_finance_requires_justification() {
        let decision = next_action(
            Role::Ajsefin,
            AuthorizationState::AwaitingLegalFinance,
            &Attachments::default(),
        );
        assert!(decision.is_blocked);
    }

    /// RT-007: a role out of turn gets no action and no block
    #[test]
    fn test_out_of_turn_role_gets_nothing() {
        let decision = next_action(
            Role::Ordenador,
            AuthorizationState::AwaitingManager,
            &Attachments::default(),
        );
        assert_eq!(decision.required_action, None);
        assert!(!decision.is_blocked);
    }

    /// RT-008: the ordering officer signs without attachment gating
    #[test]
    fn test_ordering_officer_signs() {
        let decision = next_action(
            Role::Ordenador,
            AuthorizationState::AwaitingOrderingOfficer,
            &Attachments::default(),
        );
        assert_eq!(
            decision.required_action,
            Some(RequiredAction::SignAuthorization)
        );
        assert!(!decision.is_blocked);
    }

    /// RT-009: an authorized request reports nothing left to do, to any role
    #[test]
    fn test_authorized_reports_done() {
        for role in [
            Role::Suprido,
            Role::Gestor,
            Role::Sosfu,
            Role::Ajsefin,
            Role::Ordenador,
        ] {
            let decision = next_action(role, AuthorizationState::Authorized, &Attachments::default());
            assert_eq!(decision.required_action, Some(RequiredAction::None));
            assert!(!decision.is_blocked);
        }
    }
}
