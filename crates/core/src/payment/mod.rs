//! Fee-adjusted payment plans and installment schedules.

pub mod allocation;
pub mod error;
pub mod fees;
pub mod plan;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PaymentError;
pub use plan::PlanCalculator;
pub use types::{InstallmentScheduleEntry, PaymentConfig, PaymentMethod, PaymentPlan};
