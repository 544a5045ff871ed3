//! Payment plan error types.

use clinia_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::PaymentMethod;

/// Errors produced while building a payment plan.
///
/// These are local validation failures returned synchronously; none of them
/// is retried.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// A monetary input was negative.
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount {
        /// Which input failed validation.
        field: &'static str,
        /// The offending value.
        value: Decimal,
    },

    /// Installment count outside the supported range for the method.
    #[error("Invalid installment count {count} for payment method {method}")]
    InvalidInstallmentCount {
        /// The requested count.
        count: u32,
        /// The payment method it was requested for.
        method: PaymentMethod,
    },
}

impl PaymentError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount { .. } | Self::InvalidInstallmentCount { .. } => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InvalidInstallmentCount { .. } => "INVALID_INSTALLMENT_COUNT",
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        Self::Validation(err.to_string())
    }
}
