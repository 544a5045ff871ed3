//! Approval workflow error types.

use clinia_shared::AppError;
use thiserror::Error;

use super::types::BudgetStatus;

/// Errors that can occur during approval operations.
#[derive(Debug, Error)]
pub enum ApprovalError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: BudgetStatus,
        /// The attempted target status.
        to: BudgetStatus,
    },

    /// The supplied PIN did not match the clinic's stored PIN. The budget
    /// stays in `RequiresOverride`; the caller may re-enter the PIN.
    #[error("Manager PIN does not match")]
    PinMismatch,

    /// An approval decision is already outstanding for this budget.
    #[error("An approval decision is already in flight")]
    DecisionInFlight,

    /// Rejection reason is required but not provided.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,
}

impl ApprovalError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::RejectionReasonRequired => 400,
            Self::PinMismatch => 401,
            Self::DecisionInFlight => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::PinMismatch => "AUTHORIZATION_FAILURE",
            Self::DecisionInFlight => "DECISION_IN_FLIGHT",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
        }
    }
}

impl From<ApprovalError> for AppError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::PinMismatch => Self::Unauthorized(err.to_string()),
            ApprovalError::InvalidTransition { .. } | ApprovalError::DecisionInFlight => {
                Self::BusinessRule(err.to_string())
            }
            ApprovalError::RejectionReasonRequired => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = ApprovalError::InvalidTransition {
            from: BudgetStatus::Approved,
            to: BudgetStatus::Approved,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("approved"));
    }

    #[test]
    fn test_pin_mismatch_error() {
        let err = ApprovalError::PinMismatch;
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "AUTHORIZATION_FAILURE");
    }

    #[test]
    fn test_decision_in_flight_error() {
        let err = ApprovalError::DecisionInFlight;
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "DECISION_IN_FLIGHT");
    }

    #[test]
    fn test_converts_to_app_error() {
        let app: AppError = ApprovalError::PinMismatch.into();
        assert_eq!(app.error_code(), "UNAUTHORIZED");

        let app: AppError = ApprovalError::DecisionInFlight.into();
        assert_eq!(app.error_code(), "BUSINESS_RULE_VIOLATION");

        let app: AppError = ApprovalError::RejectionReasonRequired.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }
}
