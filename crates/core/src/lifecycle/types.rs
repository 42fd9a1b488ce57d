//! Lifecycle domain types for expense status management.
//!
//! This module defines the core types used for managing expense
//! status transitions through the review and payment workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Expense status in the review and payment workflow.
///
/// Expenses progress through these states from creation to payment.
/// The valid transitions are:
/// - Created → Submitted (submit)
/// - Submitted → Validated (validate)
/// - Submitted → Rejected (reject)
/// - Validated → Paid (pay)
/// - Rejected → Created (reopen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Expense has been drafted and not yet submitted.
    Created,
    /// Expense has been submitted for review.
    Submitted,
    /// Expense has been approved by a reviewer and awaits payment.
    Validated,
    /// Expense has been rejected by a reviewer.
    Rejected,
    /// Expense has been paid (terminal).
    Paid,
}

impl ExpenseStatus {
    /// All five statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Created,
        Self::Submitted,
        Self::Validated,
        Self::Rejected,
        Self::Paid,
    ];

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Submitted => "submitted",
            Self::Validated => "validated",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
        }
    }

    /// Parses a status from a string.
    ///
    /// Unknown values yield `None`; callers must treat them as
    /// permitting nothing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "created" => Some(Self::Created),
            "submitted" => Some(Self::Submitted),
            "validated" => Some(Self::Validated),
            "rejected" => Some(Self::Rejected),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle action representing a state transition with audit data.
///
/// Each variant captures the operation performed, the resulting status,
/// and the audit trail information (who, when, why).
#[derive(Debug, Clone)]
pub enum LifecycleAction {
    /// Submit a drafted expense for review.
    Submit {
        /// The new status after submission.
        new_status: ExpenseStatus,
        /// The user who submitted the expense.
        submitted_by: Uuid,
        /// When the expense was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Validate a submitted expense.
    Validate {
        /// The new status after validation.
        new_status: ExpenseStatus,
        /// The reviewer who validated the expense.
        validated_by: Uuid,
        /// When the expense was validated.
        validated_at: DateTime<Utc>,
        /// Optional notes from the reviewer.
        validation_notes: Option<String>,
    },
    /// Reject a submitted expense.
    Reject {
        /// The new status after rejection.
        new_status: ExpenseStatus,
        /// The reviewer who rejected the expense.
        rejected_by: Uuid,
        /// When the expense was rejected.
        rejected_at: DateTime<Utc>,
        /// The reason for rejection.
        rejection_reason: String,
    },
    /// Pay a validated expense.
    Pay {
        /// The new status after payment.
        new_status: ExpenseStatus,
        /// The user who recorded the payment.
        paid_by: Uuid,
        /// When the payment was recorded.
        paid_at: DateTime<Utc>,
        /// Optional reference to the payment (bank transfer id, etc).
        payment_reference: Option<String>,
    },
    /// Reopen a rejected expense for correction and resubmission.
    Reopen {
        /// The new status after reopening (Created).
        new_status: ExpenseStatus,
        /// The user who reopened the expense.
        reopened_by: Uuid,
        /// When the expense was reopened.
        reopened_at: DateTime<Utc>,
    },
}

impl LifecycleAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> ExpenseStatus {
        match self {
            Self::Submit { new_status, .. }
            | Self::Validate { new_status, .. }
            | Self::Reject { new_status, .. }
            | Self::Pay { new_status, .. }
            | Self::Reopen { new_status, .. } => *new_status,
        }
    }
}
