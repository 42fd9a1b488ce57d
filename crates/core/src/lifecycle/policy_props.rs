//! Property-based tests for LifecyclePolicy.
//!
//! These tests validate the decision rules over randomized status
//! inputs using proptest.

use proptest::prelude::*;

use crate::lifecycle::policy::LifecyclePolicy;
use crate::lifecycle::types::ExpenseStatus;

/// Strategy for generating random ExpenseStatus values.
fn arb_status() -> impl Strategy<Value = ExpenseStatus> {
    prop_oneof![
        Just(ExpenseStatus::Created),
        Just(ExpenseStatus::Submitted),
        Just(ExpenseStatus::Validated),
        Just(ExpenseStatus::Rejected),
        Just(ExpenseStatus::Paid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// can_transition agrees with the literal transition table.
    #[test]
    fn prop_can_transition_matches_table(
        from in arb_status(),
        to in arb_status()
    ) {
        let legal = LifecyclePolicy::can_transition(from, to);

        let expected = matches!(
            (from, to),
            (ExpenseStatus::Created, ExpenseStatus::Submitted)
                | (
                    ExpenseStatus::Submitted,
                    ExpenseStatus::Validated | ExpenseStatus::Rejected
                )
                | (ExpenseStatus::Validated, ExpenseStatus::Paid)
                | (ExpenseStatus::Rejected, ExpenseStatus::Created)
        );

        prop_assert_eq!(legal, expected,
            "can_transition({:?}, {:?}) = {}, expected {}",
            from, to, legal, expected);
    }

    /// can_transition is membership in allowed_transitions.
    #[test]
    fn prop_can_transition_is_table_membership(
        from in arb_status(),
        to in arb_status()
    ) {
        prop_assert_eq!(
            LifecyclePolicy::can_transition(from, to),
            LifecyclePolicy::allowed_transitions(from).contains(&to)
        );
    }

    /// No status may transition to itself.
    #[test]
    fn prop_no_self_transitions(status in arb_status()) {
        prop_assert!(!LifecyclePolicy::can_transition(status, status));
    }

    /// Paid is terminal: nothing transitions out of it.
    #[test]
    fn prop_paid_is_terminal(to in arb_status()) {
        prop_assert!(!LifecyclePolicy::can_transition(ExpenseStatus::Paid, to));
        prop_assert!(LifecyclePolicy::is_terminal(ExpenseStatus::Paid));
    }

    /// Modification is allowed exactly while drafted or under review.
    #[test]
    fn prop_can_modify_iff_created_or_submitted(status in arb_status()) {
        let expected =
            status == ExpenseStatus::Created || status == ExpenseStatus::Submitted;
        prop_assert_eq!(LifecyclePolicy::can_modify(status), expected);
    }

    /// Deletion is allowed exactly while drafted or under review.
    #[test]
    fn prop_can_delete_iff_created_or_submitted(status in arb_status()) {
        let expected =
            status == ExpenseStatus::Created || status == ExpenseStatus::Submitted;
        prop_assert_eq!(LifecyclePolicy::can_delete(status), expected);
    }

    /// Current policy: deletion and modification coincide. Catches an
    /// accidental divergence between the two independent checks.
    #[test]
    fn prop_delete_policy_coincides_with_modify(status in arb_status()) {
        prop_assert_eq!(
            LifecyclePolicy::can_delete(status),
            LifecyclePolicy::can_modify(status)
        );
    }

    /// A status is terminal exactly when its transition set is empty.
    #[test]
    fn prop_terminal_iff_no_outgoing(status in arb_status()) {
        prop_assert_eq!(
            LifecyclePolicy::is_terminal(status),
            LifecyclePolicy::allowed_transitions(status).is_empty()
        );
    }
}
