//! Approval workflow domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Budget status in the approval workflow.
///
/// Budgets progress through these states from drafting to approval.
/// The valid transitions are:
/// - Draft → PendingReview (submit)
/// - Draft/PendingReview/RequiresOverride → Approved (margin at or above floor, or PIN verified)
/// - Draft/PendingReview → RequiresOverride (margin below floor)
/// - any non-terminal → Rejected (reject)
/// - any non-terminal → Cancelled (cancel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Budget is being drafted and can be modified.
    Draft,
    /// Budget was sent for commercial review.
    PendingReview,
    /// Budget approval is blocked pending a manager PIN override.
    RequiresOverride,
    /// Budget was approved (terminal; items become immutable).
    Approved,
    /// Budget was rejected (terminal).
    Rejected,
    /// Budget was cancelled (terminal).
    Cancelled,
}

impl BudgetStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingReview => "pending_review",
            Self::RequiresOverride => "requires_override",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending_review" => Some(Self::PendingReview),
            "requires_override" => Some(Self::RequiresOverride),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if items and discount may still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::PendingReview)
    }

    /// Returns true for terminal states.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one approval attempt, consumed once by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    /// Whether a manager PIN override is required.
    pub required: bool,
    /// The margin percentage the decision was taken against.
    pub margin_percent: Decimal,
    /// Whether the budget is authorized to move to Approved.
    pub authorized: bool,
}

/// A validated approval transition with audit data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApprovalOutcome {
    /// The status the budget transitions to.
    pub new_status: BudgetStatus,
    /// When the decision was taken.
    pub decided_at: DateTime<Utc>,
    /// The decision driving the transition.
    pub decision: ApprovalDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str_round_trip() {
        for status in [
            BudgetStatus::Draft,
            BudgetStatus::PendingReview,
            BudgetStatus::RequiresOverride,
            BudgetStatus::Approved,
            BudgetStatus::Rejected,
            BudgetStatus::Cancelled,
        ] {
            assert_eq!(BudgetStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BudgetStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            BudgetStatus::parse("PENDING_REVIEW"),
            Some(BudgetStatus::PendingReview)
        );
        assert_eq!(BudgetStatus::parse("Draft"), Some(BudgetStatus::Draft));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            format!("{}", BudgetStatus::RequiresOverride),
            "requires_override"
        );
        assert_eq!(format!("{}", BudgetStatus::Approved), "approved");
    }

    #[test]
    fn test_editable_states() {
        assert!(BudgetStatus::Draft.is_editable());
        assert!(BudgetStatus::PendingReview.is_editable());
        assert!(!BudgetStatus::RequiresOverride.is_editable());
        assert!(!BudgetStatus::Approved.is_editable());
        assert!(!BudgetStatus::Rejected.is_editable());
        assert!(!BudgetStatus::Cancelled.is_editable());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BudgetStatus::Draft.is_terminal());
        assert!(!BudgetStatus::PendingReview.is_terminal());
        assert!(!BudgetStatus::RequiresOverride.is_terminal());
        assert!(BudgetStatus::Approved.is_terminal());
        assert!(BudgetStatus::Rejected.is_terminal());
        assert!(BudgetStatus::Cancelled.is_terminal());
    }
}
