//! Margin-gated approval transitions.
//!
//! The gate ties the margin verdict to approval authorization: a budget at
//! or above the clinic's margin floor approves directly, anything below it
//! blocks until a manager PIN override is verified.

use chrono::Utc;
use clinia_shared::FinancialSettings;
use rust_decimal::Decimal;

use super::error::ApprovalError;
use super::types::{ApprovalDecision, ApprovalOutcome, BudgetStatus};
use crate::margin::MarginAnalysis;

/// Stateless service for approval state transitions.
pub struct ApprovalGate;

impl ApprovalGate {
    /// Submits a draft budget for commercial review.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidTransition` if not in Draft status.
    pub fn submit(current: BudgetStatus) -> Result<BudgetStatus, ApprovalError> {
        match current {
            BudgetStatus::Draft => Ok(BudgetStatus::PendingReview),
            _ => Err(ApprovalError::InvalidTransition {
                from: current,
                to: BudgetStatus::PendingReview,
            }),
        }
    }

    /// Attempts approval from any non-terminal state.
    ///
    /// A missing analysis reads as margin zero: an unknown margin must never
    /// self-approve. At or above the configured floor the budget approves
    /// directly; below it the budget blocks in `RequiresOverride`.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidTransition` from a terminal state.
    pub fn attempt(
        current: BudgetStatus,
        analysis: Option<&MarginAnalysis>,
        settings: &FinancialSettings,
    ) -> Result<ApprovalOutcome, ApprovalError> {
        if current.is_terminal() {
            return Err(ApprovalError::InvalidTransition {
                from: current,
                to: BudgetStatus::Approved,
            });
        }

        let margin_percent = analysis.map_or(Decimal::ZERO, |a| a.margin_percent);

        if margin_percent >= settings.margin_floor_percent {
            Ok(ApprovalOutcome {
                new_status: BudgetStatus::Approved,
                decided_at: Utc::now(),
                decision: ApprovalDecision {
                    required: false,
                    margin_percent,
                    authorized: true,
                },
            })
        } else {
            Ok(ApprovalOutcome {
                new_status: BudgetStatus::RequiresOverride,
                decided_at: Utc::now(),
                decision: ApprovalDecision {
                    required: true,
                    margin_percent,
                    authorized: false,
                },
            })
        }
    }

    /// Verifies a manager PIN for a blocked budget.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidTransition` unless the budget is in
    /// `RequiresOverride`, and `ApprovalError::PinMismatch` when the PIN
    /// does not match. The budget stays blocked and never silently
    /// approves.
    pub fn verify_pin(
        current: BudgetStatus,
        entered_pin: &str,
        stored_pin: &str,
        margin_percent: Decimal,
    ) -> Result<ApprovalOutcome, ApprovalError> {
        if current != BudgetStatus::RequiresOverride {
            return Err(ApprovalError::InvalidTransition {
                from: current,
                to: BudgetStatus::Approved,
            });
        }

        if entered_pin != stored_pin {
            return Err(ApprovalError::PinMismatch);
        }

        Ok(ApprovalOutcome {
            new_status: BudgetStatus::Approved,
            decided_at: Utc::now(),
            decision: ApprovalDecision {
                required: true,
                margin_percent,
                authorized: true,
            },
        })
    }

    /// Rejects a budget from any non-terminal state.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::RejectionReasonRequired` for an empty reason
    /// and `ApprovalError::InvalidTransition` from a terminal state.
    pub fn reject(current: BudgetStatus, reason: &str) -> Result<BudgetStatus, ApprovalError> {
        if reason.trim().is_empty() {
            return Err(ApprovalError::RejectionReasonRequired);
        }

        if current.is_terminal() {
            return Err(ApprovalError::InvalidTransition {
                from: current,
                to: BudgetStatus::Rejected,
            });
        }

        Ok(BudgetStatus::Rejected)
    }

    /// Cancels a budget from any non-terminal state.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidTransition` from a terminal state.
    pub fn cancel(current: BudgetStatus) -> Result<BudgetStatus, ApprovalError> {
        if current.is_terminal() {
            return Err(ApprovalError::InvalidTransition {
                from: current,
                to: BudgetStatus::Cancelled,
            });
        }

        Ok(BudgetStatus::Cancelled)
    }

    /// Check if a status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: BudgetStatus, to: BudgetStatus) -> bool {
        matches!(
            (from, to),
            (BudgetStatus::Draft, BudgetStatus::PendingReview)
                | (
                    BudgetStatus::Draft | BudgetStatus::PendingReview,
                    BudgetStatus::RequiresOverride
                )
                | (
                    BudgetStatus::Draft
                        | BudgetStatus::PendingReview
                        | BudgetStatus::RequiresOverride,
                    BudgetStatus::Approved | BudgetStatus::Rejected | BudgetStatus::Cancelled
                )
        )
    }
}
