//! Named lifecycle operations for expense state transitions.
//!
//! This module wraps the transition policy into the operations a
//! calling service performs: each one validates the current status and
//! returns the audit-carrying action to persist, or a typed error.

use chrono::Utc;
use uuid::Uuid;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::policy::LifecyclePolicy;
use crate::lifecycle::types::{ExpenseStatus, LifecycleAction};

/// Stateless service for expense lifecycle transitions.
///
/// All methods are associated functions that validate a requested
/// transition against [`LifecyclePolicy`] and return the appropriate
/// [`LifecycleAction`] with audit trail information. Persistence of
/// the new status and the audit data belongs to the caller.
pub struct LifecycleService;

impl LifecycleService {
    /// Submit a drafted expense for review.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the expense
    /// * `submitted_by` - The user submitting the expense
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Submit)` if the transition is legal
    /// * `Err(LifecycleError::InvalidTransition)` if not in Created status
    pub fn submit(
        current_status: ExpenseStatus,
        submitted_by: Uuid,
    ) -> Result<LifecycleAction, LifecycleError> {
        Self::check_transition(current_status, ExpenseStatus::Submitted)?;
        Ok(LifecycleAction::Submit {
            new_status: ExpenseStatus::Submitted,
            submitted_by,
            submitted_at: Utc::now(),
        })
    }

    /// Validate a submitted expense.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the expense
    /// * `validated_by` - The reviewer validating the expense
    /// * `validation_notes` - Optional notes from the reviewer
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Validate)` if the transition is legal
    /// * `Err(LifecycleError::InvalidTransition)` if not in Submitted status
    pub fn validate(
        current_status: ExpenseStatus,
        validated_by: Uuid,
        validation_notes: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        Self::check_transition(current_status, ExpenseStatus::Validated)?;
        Ok(LifecycleAction::Validate {
            new_status: ExpenseStatus::Validated,
            validated_by,
            validated_at: Utc::now(),
            validation_notes,
        })
    }

    /// Reject a submitted expense.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the expense
    /// * `rejected_by` - The reviewer rejecting the expense
    /// * `rejection_reason` - The reason for rejection (required)
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Reject)` if the transition is legal
    /// * `Err(LifecycleError::InvalidTransition)` if not in Submitted status
    /// * `Err(LifecycleError::RejectionReasonRequired)` if reason is empty
    pub fn reject(
        current_status: ExpenseStatus,
        rejected_by: Uuid,
        rejection_reason: String,
    ) -> Result<LifecycleAction, LifecycleError> {
        if rejection_reason.trim().is_empty() {
            return Err(LifecycleError::RejectionReasonRequired);
        }

        Self::check_transition(current_status, ExpenseStatus::Rejected)?;
        Ok(LifecycleAction::Reject {
            new_status: ExpenseStatus::Rejected,
            rejected_by,
            rejected_at: Utc::now(),
            rejection_reason,
        })
    }

    /// Record payment of a validated expense.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the expense
    /// * `paid_by` - The user recording the payment
    /// * `payment_reference` - Optional reference to the payment
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Pay)` if the transition is legal
    /// * `Err(LifecycleError::InvalidTransition)` if not in Validated status
    pub fn pay(
        current_status: ExpenseStatus,
        paid_by: Uuid,
        payment_reference: Option<String>,
    ) -> Result<LifecycleAction, LifecycleError> {
        Self::check_transition(current_status, ExpenseStatus::Paid)?;
        Ok(LifecycleAction::Pay {
            new_status: ExpenseStatus::Paid,
            paid_by,
            paid_at: Utc::now(),
            payment_reference,
        })
    }

    /// Reopen a rejected expense for correction and resubmission.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the expense
    /// * `reopened_by` - The user reopening the expense
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Reopen)` if the transition is legal
    /// * `Err(LifecycleError::InvalidTransition)` if not in Rejected status
    pub fn reopen(
        current_status: ExpenseStatus,
        reopened_by: Uuid,
    ) -> Result<LifecycleAction, LifecycleError> {
        Self::check_transition(current_status, ExpenseStatus::Created)?;
        Ok(LifecycleAction::Reopen {
            new_status: ExpenseStatus::Created,
            reopened_by,
            reopened_at: Utc::now(),
        })
    }

    /// Check that an expense's fields may be edited in its current status.
    ///
    /// Called by the service layer before applying field updates.
    pub fn ensure_modifiable(status: ExpenseStatus) -> Result<(), LifecycleError> {
        if LifecyclePolicy::can_modify(status) {
            Ok(())
        } else {
            Err(LifecycleError::CannotModify { status })
        }
    }

    /// Check that an expense may be deleted in its current status.
    ///
    /// Called by the service layer before removing the record.
    pub fn ensure_deletable(status: ExpenseStatus) -> Result<(), LifecycleError> {
        if LifecyclePolicy::can_delete(status) {
            Ok(())
        } else {
            Err(LifecycleError::CannotDelete { status })
        }
    }

    // Every operation targets a status reachable from exactly one
    // source, so the table lookup doubles as the source-status check.
    fn check_transition(
        from: ExpenseStatus,
        to: ExpenseStatus,
    ) -> Result<(), LifecycleError> {
        if LifecyclePolicy::can_transition(from, to) {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition { from, to })
        }
    }
}
