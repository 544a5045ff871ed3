//! Read-only financial view-models for the presentation layer.

pub mod service;
pub mod types;

pub use service::SummaryService;
pub use types::FinancialSummary;
