//! Budget error types.

use clinia_shared::AppError;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// The budget reached a status where items can no longer change.
    #[error("Budget can no longer be modified in its current status")]
    BudgetImmutable,

    /// Item quantity below the minimum of 1.
    #[error("Item quantity must be at least 1")]
    ZeroQuantity,

    /// A monetary value was negative where a negative is not recoverable.
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

impl BudgetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BudgetImmutable => 422,
            Self::ZeroQuantity | Self::NegativeAmount => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BudgetImmutable => "BUDGET_IMMUTABLE",
            Self::ZeroQuantity => "ZERO_QUANTITY",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
        }
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::BudgetImmutable => Self::BusinessRule(err.to_string()),
            BudgetError::ZeroQuantity | BudgetError::NegativeAmount => {
                Self::Validation(err.to_string())
            }
        }
    }
}
