//! Margin analysis result caching using Moka.
//!
//! Margin analysis runs on every budget edit; when the presentation layer
//! re-requests an analysis for inputs it has already seen (tab switches,
//! re-renders), the cache avoids redundant recomputation.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use clinia_shared::FinancialSettings;
use moka::sync::Cache;

use super::analyzer::MarginAnalyzer;
use super::filter::MarginFilter;
use super::types::{CostSnapshot, MarginAnalysis};
use crate::budget::BudgetItem;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// A margin analysis together with its cache provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedAnalysis {
    /// The analysis itself.
    pub analysis: MarginAnalysis,
    /// Whether the analysis was served from cache.
    pub cached: bool,
}

/// Cache for margin analysis results.
///
/// Uses a canonical input hash as the cache key. Thread-safe and suitable
/// for concurrent access.
#[derive(Clone)]
pub struct AnalysisCache {
    cache: Cache<String, Arc<MarginAnalysis>>,
}

impl AnalysisCache {
    /// Creates a new analysis cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new analysis cache with custom configuration.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Runs an analysis, returning a cached result when available.
    #[must_use]
    pub fn analyze_cached(
        &self,
        items: &[BudgetItem],
        costs: &CostSnapshot,
        filter: &MarginFilter,
        settings: &FinancialSettings,
    ) -> CachedAnalysis {
        let key = Self::cache_key(items, costs, filter, settings);

        if let Some(hit) = self.cache.get(&key) {
            return CachedAnalysis {
                analysis: (*hit).clone(),
                cached: true,
            };
        }

        let analysis = MarginAnalyzer::analyze(items, costs, filter, settings);
        self.cache.insert(key, Arc::new(analysis.clone()));

        CachedAnalysis {
            analysis,
            cached: false,
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    /// Hashes the full analyzer input set into a cache key.
    ///
    /// The cost snapshot map is ordered, so serialization is canonical for
    /// equal inputs.
    fn cache_key(
        items: &[BudgetItem],
        costs: &CostSnapshot,
        filter: &MarginFilter,
        settings: &FinancialSettings,
    ) -> String {
        let payload = serde_json::json!({
            "items": items,
            "costs": costs,
            "filter": filter,
            "floor": settings.margin_floor_percent,
        });

        let mut hasher = DefaultHasher::new();
        payload.to_string().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clinia_shared::types::{BudgetItemId, ProcedureId};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::margin::types::CostBreakdown;

    fn sample_inputs() -> (Vec<BudgetItem>, CostSnapshot) {
        let procedure = ProcedureId::from_uuid(uuid::Uuid::nil());
        let items = vec![BudgetItem {
            id: BudgetItemId::from_uuid(uuid::Uuid::nil()),
            procedure_id: Some(procedure),
            procedure_name: "procedure".to_string(),
            quantity: 1,
            unit_value: dec!(1000),
            category: None,
            sales_rep: None,
        }];
        let costs = CostSnapshot::new(dec!(4.50))
            .with_breakdown(procedure, CostBreakdown::new(dec!(400), dec!(200), dec!(50)));
        (items, costs)
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let cache = AnalysisCache::new();
        let (items, costs) = sample_inputs();
        let filter = MarginFilter::new();
        let settings = FinancialSettings::default();

        let first = cache.analyze_cached(&items, &costs, &filter, &settings);
        assert!(!first.cached, "First call should not be cached");

        let second = cache.analyze_cached(&items, &costs, &filter, &settings);
        assert!(second.cached, "Second call should be cached");
        assert_eq!(first.analysis, second.analysis);
    }

    #[test]
    fn test_different_inputs_do_not_hit_cache() {
        let cache = AnalysisCache::new();
        let (items, costs) = sample_inputs();
        let settings = FinancialSettings::default();

        let _ = cache.analyze_cached(&items, &costs, &MarginFilter::new(), &settings);

        let filtered = MarginFilter::new().with_category("ortho");
        let result = cache.analyze_cached(&items, &costs, &filtered, &settings);
        assert!(!result.cached, "Different filter should be a cache miss");
    }

    #[test]
    fn test_invalidate_all() {
        let cache = AnalysisCache::new();
        let (items, costs) = sample_inputs();
        let filter = MarginFilter::new();
        let settings = FinancialSettings::default();

        let _ = cache.analyze_cached(&items, &costs, &filter, &settings);
        cache.invalidate_all();
        cache.run_pending_tasks();

        let result = cache.analyze_cached(&items, &costs, &filter, &settings);
        assert!(!result.cached, "Should be a cache miss after invalidation");
    }

    #[test]
    fn test_entry_count() {
        let cache = AnalysisCache::new();
        let (items, costs) = sample_inputs();

        assert_eq!(cache.entry_count(), 0);

        let _ = cache.analyze_cached(
            &items,
            &costs,
            &MarginFilter::new(),
            &FinancialSettings::default(),
        );
        cache.run_pending_tasks();
        assert!(cache.entry_count() >= 1);
    }
}
