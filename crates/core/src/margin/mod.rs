//! Profit margin analysis.
//!
//! # Modules
//!
//! - `types` - Cost and margin domain types
//! - `filter` - Item filtering for the analyzer
//! - `analyzer` - The pure margin computation
//! - `driver` - Debounced, cancellable recompute driver
//! - `cache` - Moka-backed analysis result cache

pub mod analyzer;
pub mod cache;
pub mod driver;
pub mod filter;
pub mod types;


pub use analyzer::MarginAnalyzer;
pub use cache::{AnalysisCache, CachedAnalysis};
pub use driver::{AnalysisInput, MarginDriver, MarginSnapshot};
pub use filter::MarginFilter;
pub use types::{CostBreakdown, CostSnapshot, CostStatus, ItemMargin, MarginAnalysis};
