//! Property-based tests for LifecycleService.
//!
//! These tests validate that every named operation agrees with the
//! transition policy and passes its audit fields through unchanged,
//! using proptest for randomized input generation.

use proptest::prelude::*;
use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::policy::LifecyclePolicy;
use crate::lifecycle::service::LifecycleService;
use crate::lifecycle::types::{ExpenseStatus, LifecycleAction};

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

/// Strategy for generating random UUIDs.
fn arb_uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

/// Strategy for generating non-empty strings (for reasons).
fn arb_non_empty_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(|s| s.trim().to_string())
}

/// Strategy for generating optional notes or references.
fn arb_optional_string() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), arb_non_empty_string().prop_map(Some),]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Created + submit → Submitted with correct audit fields.
    #[test]
    fn prop_submit_from_created_succeeds(user_id in arb_uuid()) {
        let result = LifecycleService::submit(ExpenseStatus::Created, user_id);
        prop_assert!(result.is_ok());
        let action = result.unwrap();
        prop_assert_eq!(action.new_status(), ExpenseStatus::Submitted);

        if let LifecycleAction::Submit { submitted_by, .. } = action {
            prop_assert_eq!(submitted_by, user_id);
        } else {
            prop_assert!(false, "Expected Submit action");
        }
    }

    /// Submitted + validate → Validated with correct audit fields.
    #[test]
    fn prop_validate_from_submitted_succeeds(
        user_id in arb_uuid(),
        notes in arb_optional_string()
    ) {
        let result =
            LifecycleService::validate(ExpenseStatus::Submitted, user_id, notes.clone());
        prop_assert!(result.is_ok());
        let action = result.unwrap();
        prop_assert_eq!(action.new_status(), ExpenseStatus::Validated);

        if let LifecycleAction::Validate { validated_by, validation_notes, .. } = action {
            prop_assert_eq!(validated_by, user_id);
            prop_assert_eq!(validation_notes, notes);
        } else {
            prop_assert!(false, "Expected Validate action");
        }
    }

    /// Submitted + reject → Rejected with the rejection reason.
    #[test]
    fn prop_reject_from_submitted_succeeds(
        user_id in arb_uuid(),
        reason in arb_non_empty_string()
    ) {
        prop_assume!(!reason.trim().is_empty());

        let result =
            LifecycleService::reject(ExpenseStatus::Submitted, user_id, reason.clone());
        prop_assert!(result.is_ok());
        let action = result.unwrap();
        prop_assert_eq!(action.new_status(), ExpenseStatus::Rejected);

        if let LifecycleAction::Reject { rejected_by, rejection_reason, .. } = action {
            prop_assert_eq!(rejected_by, user_id);
            prop_assert_eq!(rejection_reason, reason);
        } else {
            prop_assert!(false, "Expected Reject action");
        }
    }

    /// Validated + pay → Paid with correct audit fields.
    #[test]
    fn prop_pay_from_validated_succeeds(
        user_id in arb_uuid(),
        reference in arb_optional_string()
    ) {
        let result =
            LifecycleService::pay(ExpenseStatus::Validated, user_id, reference.clone());
        prop_assert!(result.is_ok());
        let action = result.unwrap();
        prop_assert_eq!(action.new_status(), ExpenseStatus::Paid);

        if let LifecycleAction::Pay { paid_by, payment_reference, .. } = action {
            prop_assert_eq!(paid_by, user_id);
            prop_assert_eq!(payment_reference, reference);
        } else {
            prop_assert!(false, "Expected Pay action");
        }
    }

    /// Rejected + reopen → Created with correct audit fields.
    #[test]
    fn prop_reopen_from_rejected_succeeds(user_id in arb_uuid()) {
        let result = LifecycleService::reopen(ExpenseStatus::Rejected, user_id);
        prop_assert!(result.is_ok());
        let action = result.unwrap();
        prop_assert_eq!(action.new_status(), ExpenseStatus::Created);

        if let LifecycleAction::Reopen { reopened_by, .. } = action {
            prop_assert_eq!(reopened_by, user_id);
        } else {
            prop_assert!(false, "Expected Reopen action");
        }
    }

    /// Submit from non-Created status returns InvalidTransition.
    #[test]
    fn prop_submit_from_non_created_fails(
        status in arb_status(),
        user_id in arb_uuid()
    ) {
        prop_assume!(status != ExpenseStatus::Created);

        let result = LifecycleService::submit(status, user_id);
        match result {
            Err(LifecycleError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ExpenseStatus::Submitted);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Validate from non-Submitted status returns InvalidTransition.
    #[test]
    fn prop_validate_from_non_submitted_fails(
        status in arb_status(),
        user_id in arb_uuid()
    ) {
        prop_assume!(status != ExpenseStatus::Submitted);

        let result = LifecycleService::validate(status, user_id, None);
        match result {
            Err(LifecycleError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ExpenseStatus::Validated);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Reject from non-Submitted status returns InvalidTransition.
    #[test]
    fn prop_reject_from_non_submitted_fails(
        status in arb_status(),
        user_id in arb_uuid(),
        reason in arb_non_empty_string()
    ) {
        prop_assume!(status != ExpenseStatus::Submitted);
        prop_assume!(!reason.trim().is_empty());

        let result = LifecycleService::reject(status, user_id, reason);
        match result {
            Err(LifecycleError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ExpenseStatus::Rejected);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Pay from non-Validated status returns InvalidTransition.
    #[test]
    fn prop_pay_from_non_validated_fails(
        status in arb_status(),
        user_id in arb_uuid()
    ) {
        prop_assume!(status != ExpenseStatus::Validated);

        let result = LifecycleService::pay(status, user_id, None);
        match result {
            Err(LifecycleError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ExpenseStatus::Paid);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Reopen from non-Rejected status returns InvalidTransition.
    #[test]
    fn prop_reopen_from_non_rejected_fails(
        status in arb_status(),
        user_id in arb_uuid()
    ) {
        prop_assume!(status != ExpenseStatus::Rejected);

        let result = LifecycleService::reopen(status, user_id);
        match result {
            Err(LifecycleError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ExpenseStatus::Created);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Every operation succeeds exactly when the policy table allows
    /// its transition.
    #[test]
    fn prop_service_agrees_with_policy(
        status in arb_status(),
        user_id in arb_uuid()
    ) {
        prop_assert_eq!(
            LifecycleService::submit(status, user_id).is_ok(),
            LifecyclePolicy::can_transition(status, ExpenseStatus::Submitted)
        );
        prop_assert_eq!(
            LifecycleService::validate(status, user_id, None).is_ok(),
            LifecyclePolicy::can_transition(status, ExpenseStatus::Validated)
        );
        prop_assert_eq!(
            LifecycleService::reject(status, user_id, "reason".to_string()).is_ok(),
            LifecyclePolicy::can_transition(status, ExpenseStatus::Rejected)
        );
        prop_assert_eq!(
            LifecycleService::pay(status, user_id, None).is_ok(),
            LifecyclePolicy::can_transition(status, ExpenseStatus::Paid)
        );
        prop_assert_eq!(
            LifecycleService::reopen(status, user_id).is_ok(),
            LifecyclePolicy::can_transition(status, ExpenseStatus::Created)
        );
    }

    /// The modification guard agrees with the policy predicate.
    #[test]
    fn prop_ensure_modifiable_agrees_with_policy(status in arb_status()) {
        prop_assert_eq!(
            LifecycleService::ensure_modifiable(status).is_ok(),
            LifecyclePolicy::can_modify(status)
        );
    }

    /// The deletion guard agrees with the policy predicate.
    #[test]
    fn prop_ensure_deletable_agrees_with_policy(status in arb_status()) {
        prop_assert_eq!(
            LifecycleService::ensure_deletable(status).is_ok(),
            LifecyclePolicy::can_delete(status)
        );
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_reject_empty_reason_fails() {
        let user_id = Uuid::new_v4();
        let result = LifecycleService::reject(ExpenseStatus::Submitted, user_id, String::new());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionReasonRequired)
        ));
    }

    #[test]
    fn test_reject_whitespace_only_reason_fails() {
        let user_id = Uuid::new_v4();
        let result =
            LifecycleService::reject(ExpenseStatus::Submitted, user_id, "   ".to_string());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionReasonRequired)
        ));
    }

    #[test]
    fn test_reject_tab_only_reason_fails() {
        let user_id = Uuid::new_v4();
        let result =
            LifecycleService::reject(ExpenseStatus::Submitted, user_id, "\t\t".to_string());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionReasonRequired)
        ));
    }

    /// Reason validation applies even when the transition itself would
    /// be illegal; the missing reason is reported first.
    #[test]
    fn test_reject_empty_reason_reported_before_transition() {
        let user_id = Uuid::new_v4();
        let result = LifecycleService::reject(ExpenseStatus::Paid, user_id, String::new());
        assert!(matches!(
            result,
            Err(LifecycleError::RejectionReasonRequired)
        ));
    }
}
