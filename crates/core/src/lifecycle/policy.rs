//! Decision rules for the expense lifecycle.
//!
//! This module answers which operations are permitted against an
//! expense in a given status and which status changes are legal. It is
//! the single authority consulted before any mutation, deletion, or
//! status change is applied by the surrounding service.

use crate::lifecycle::types::ExpenseStatus;

/// Stateless policy for expense lifecycle decisions.
///
/// All methods are associated functions returning plain booleans; the
/// caller is responsible for loading the current status, rejecting the
/// request when a check fails, and persisting the outcome.
pub struct LifecyclePolicy;

impl LifecyclePolicy {
    /// Returns the statuses an expense may legally transition to.
    ///
    /// The transition table:
    /// - Created → Submitted
    /// - Submitted → Validated, Rejected
    /// - Validated → Paid
    /// - Rejected → Created (reopen for correction and resubmission)
    /// - Paid → (none, terminal)
    ///
    /// Any transition not listed here is illegal, including
    /// self-transitions and multi-step shortcuts.
    #[must_use]
    pub fn allowed_transitions(from: ExpenseStatus) -> &'static [ExpenseStatus] {
        match from {
            ExpenseStatus::Created => &[ExpenseStatus::Submitted],
            ExpenseStatus::Submitted => &[ExpenseStatus::Validated, ExpenseStatus::Rejected],
            ExpenseStatus::Validated => &[ExpenseStatus::Paid],
            ExpenseStatus::Rejected => &[ExpenseStatus::Created],
            ExpenseStatus::Paid => &[],
        }
    }

    /// Check if a status transition is legal.
    ///
    /// # Arguments
    /// * `from` - The current status
    /// * `to` - The target status
    ///
    /// # Returns
    /// `true` if the transition appears in the table, `false` otherwise
    #[must_use]
    pub fn can_transition(from: ExpenseStatus, to: ExpenseStatus) -> bool {
        Self::allowed_transitions(from).contains(&to)
    }

    /// Returns true if the expense's fields may be edited in this status.
    ///
    /// An expense is editable only while drafted or under initial
    /// review; once a reviewer has acted or payment has occurred the
    /// record is frozen. A rejected expense must be reopened (back to
    /// Created) before it can be edited again.
    #[must_use]
    pub fn can_modify(status: ExpenseStatus) -> bool {
        matches!(status, ExpenseStatus::Created | ExpenseStatus::Submitted)
    }

    /// Returns true if the expense may be deleted in this status.
    ///
    /// Deletion is a permission distinct from modification and is
    /// matched independently, even though both currently permit the
    /// same statuses.
    #[must_use]
    pub fn can_delete(status: ExpenseStatus) -> bool {
        matches!(status, ExpenseStatus::Created | ExpenseStatus::Submitted)
    }

    /// Returns true if no transition originates from this status.
    #[must_use]
    pub fn is_terminal(status: ExpenseStatus) -> bool {
        Self::allowed_transitions(status).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_modify() {
        assert!(LifecyclePolicy::can_modify(ExpenseStatus::Created));
        assert!(LifecyclePolicy::can_modify(ExpenseStatus::Submitted));
        assert!(!LifecyclePolicy::can_modify(ExpenseStatus::Validated));
        assert!(!LifecyclePolicy::can_modify(ExpenseStatus::Rejected));
        assert!(!LifecyclePolicy::can_modify(ExpenseStatus::Paid));
    }

    #[test]
    fn test_can_delete() {
        assert!(LifecyclePolicy::can_delete(ExpenseStatus::Created));
        assert!(LifecyclePolicy::can_delete(ExpenseStatus::Submitted));
        assert!(!LifecyclePolicy::can_delete(ExpenseStatus::Validated));
        assert!(!LifecyclePolicy::can_delete(ExpenseStatus::Rejected));
        assert!(!LifecyclePolicy::can_delete(ExpenseStatus::Paid));
    }

    #[test]
    fn test_allowed_transitions_table() {
        assert_eq!(
            LifecyclePolicy::allowed_transitions(ExpenseStatus::Created),
            &[ExpenseStatus::Submitted]
        );
        assert_eq!(
            LifecyclePolicy::allowed_transitions(ExpenseStatus::Submitted),
            &[ExpenseStatus::Validated, ExpenseStatus::Rejected]
        );
        assert_eq!(
            LifecyclePolicy::allowed_transitions(ExpenseStatus::Validated),
            &[ExpenseStatus::Paid]
        );
        assert_eq!(
            LifecyclePolicy::allowed_transitions(ExpenseStatus::Rejected),
            &[ExpenseStatus::Created]
        );
        assert!(LifecyclePolicy::allowed_transitions(ExpenseStatus::Paid).is_empty());
    }

    #[test]
    fn test_can_transition_valid() {
        assert!(LifecyclePolicy::can_transition(
            ExpenseStatus::Created,
            ExpenseStatus::Submitted
        ));
        assert!(LifecyclePolicy::can_transition(
            ExpenseStatus::Submitted,
            ExpenseStatus::Validated
        ));
        assert!(LifecyclePolicy::can_transition(
            ExpenseStatus::Submitted,
            ExpenseStatus::Rejected
        ));
        assert!(LifecyclePolicy::can_transition(
            ExpenseStatus::Validated,
            ExpenseStatus::Paid
        ));
        assert!(LifecyclePolicy::can_transition(
            ExpenseStatus::Rejected,
            ExpenseStatus::Created
        ));
    }

    #[test]
    fn test_can_transition_invalid() {
        // No skipping the review step.
        assert!(!LifecyclePolicy::can_transition(
            ExpenseStatus::Created,
            ExpenseStatus::Validated
        ));
        assert!(!LifecyclePolicy::can_transition(
            ExpenseStatus::Created,
            ExpenseStatus::Paid
        ));
        assert!(!LifecyclePolicy::can_transition(
            ExpenseStatus::Validated,
            ExpenseStatus::Rejected
        ));
        assert!(!LifecyclePolicy::can_transition(
            ExpenseStatus::Paid,
            ExpenseStatus::Created
        ));
    }

    /// Test all 25 combinations of can_transition (5x5 matrix).
    #[test]
    fn test_can_transition_all_combinations() {
        let valid_transitions = [
            (ExpenseStatus::Created, ExpenseStatus::Submitted),
            (ExpenseStatus::Submitted, ExpenseStatus::Validated),
            (ExpenseStatus::Submitted, ExpenseStatus::Rejected),
            (ExpenseStatus::Validated, ExpenseStatus::Paid),
            (ExpenseStatus::Rejected, ExpenseStatus::Created),
        ];

        for from in ExpenseStatus::ALL {
            for to in ExpenseStatus::ALL {
                let legal = LifecyclePolicy::can_transition(from, to);
                let expected = valid_transitions.contains(&(from, to));
                assert_eq!(
                    legal, expected,
                    "can_transition({from:?}, {to:?}) = {legal}, expected {expected}"
                );
            }
        }
    }

    /// Test that same status transitions are illegal.
    #[test]
    fn test_same_status_transitions_illegal() {
        for status in ExpenseStatus::ALL {
            assert!(
                !LifecyclePolicy::can_transition(status, status),
                "Same status transition should be illegal: {status:?} -> {status:?}"
            );
        }
    }

    /// Test that a paid expense cannot transition to anything.
    #[test]
    fn test_paid_cannot_transition() {
        for to in ExpenseStatus::ALL {
            assert!(
                !LifecyclePolicy::can_transition(ExpenseStatus::Paid, to),
                "Paid should not transition to {to:?}"
            );
        }
    }

    /// Test that a rejected expense only reopens back to Created.
    #[test]
    fn test_rejected_only_reopens_to_created() {
        for to in ExpenseStatus::ALL {
            let legal = LifecyclePolicy::can_transition(ExpenseStatus::Rejected, to);
            assert_eq!(legal, to == ExpenseStatus::Created);
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(LifecyclePolicy::is_terminal(ExpenseStatus::Paid));
        assert!(!LifecyclePolicy::is_terminal(ExpenseStatus::Created));
        assert!(!LifecyclePolicy::is_terminal(ExpenseStatus::Submitted));
        assert!(!LifecyclePolicy::is_terminal(ExpenseStatus::Validated));
        assert!(!LifecyclePolicy::is_terminal(ExpenseStatus::Rejected));
    }

    /// Deletion and modification currently permit the same statuses.
    /// This test exists to catch an accidental divergence; an
    /// intentional one should update it.
    #[test]
    fn test_delete_policy_coincides_with_modify_policy() {
        for status in ExpenseStatus::ALL {
            assert_eq!(
                LifecyclePolicy::can_delete(status),
                LifecyclePolicy::can_modify(status),
                "delete/modify policy diverged at {status:?}"
            );
        }
    }
}
