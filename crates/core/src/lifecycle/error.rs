//! Lifecycle error types for expense status management.
//!
//! This module defines the error types that can occur during lifecycle
//! operations such as status transitions, edits, and deletions.

use thiserror::Error;

use crate::lifecycle::types::ExpenseStatus;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Attempted an illegal status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ExpenseStatus,
        /// The attempted target status.
        to: ExpenseStatus,
    },

    /// Attempted to edit an expense whose status forbids it.
    #[error("Cannot modify expense in {status} status")]
    CannotModify {
        /// The status that forbids modification.
        status: ExpenseStatus,
    },

    /// Attempted to delete an expense whose status forbids it.
    #[error("Cannot delete expense in {status} status")]
    CannotDelete {
        /// The status that forbids deletion.
        status: ExpenseStatus,
    },

    /// Rejection reason is required but not provided.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,
}

impl LifecycleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::RejectionReasonRequired => 400,
            Self::CannotModify { .. } | Self::CannotDelete { .. } => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::CannotModify { .. } => "CANNOT_MODIFY",
            Self::CannotDelete { .. } => "CANNOT_DELETE",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
        }
    }
}
