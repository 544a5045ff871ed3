//! Profit margin analysis.

use clinia_shared::FinancialSettings;
use rust_decimal::Decimal;

use super::filter::MarginFilter;
use super::types::{CostSnapshot, CostStatus, ItemMargin, MarginAnalysis};
use crate::budget::BudgetItem;

/// Stateless margin analyzer.
///
/// Deterministic: identical inputs produce identical analyses, which is what
/// lets the recompute driver discard stale runs safely.
pub struct MarginAnalyzer;

impl MarginAnalyzer {
    /// Joins budget items against cost data and computes clinic profit.
    ///
    /// Items without a resolvable procedure id, and items excluded by the
    /// filter, are left out of the analysis entirely (they stay priced by
    /// the aggregator). Items whose procedure has no cost breakdown
    /// contribute zero cost and are flagged incomplete rather than dropped.
    #[must_use]
    pub fn analyze(
        items: &[BudgetItem],
        costs: &CostSnapshot,
        filter: &MarginFilter,
        settings: &FinancialSettings,
    ) -> MarginAnalysis {
        let mut analyzed = Vec::new();
        let mut low_margin_items = Vec::new();
        let mut incomplete_items = Vec::new();
        let mut total_price = Decimal::ZERO;
        let mut total_costs = Decimal::ZERO;

        for item in items {
            let Some(procedure_id) = item.procedure_id else {
                continue;
            };
            if !filter.matches(item) {
                continue;
            }

            let price = item.total().round_dp(2);
            let (cost, cost_status) = match costs.breakdowns.get(&procedure_id) {
                Some(breakdown) => (
                    (breakdown.total_cost() * Decimal::from(item.quantity)).round_dp(2),
                    CostStatus::Priced,
                ),
                None => (Decimal::ZERO, CostStatus::Missing),
            };

            let profit = price - cost;
            let margin_percent = Self::margin_percent(profit, price);
            let below_floor = margin_percent < settings.margin_floor_percent;

            if below_floor {
                low_margin_items.push(item.id);
            }
            if cost_status == CostStatus::Missing {
                incomplete_items.push(item.id);
            }

            total_price += price;
            total_costs += cost;
            analyzed.push(ItemMargin {
                item_id: item.id,
                procedure_id,
                price,
                cost,
                profit,
                margin_percent,
                below_floor,
                cost_status,
            });
        }

        let total_profit = total_price - total_costs;
        MarginAnalysis {
            total_price,
            total_costs,
            total_profit,
            margin_percent: Self::margin_percent(total_profit, total_price),
            items: analyzed,
            low_margin_items,
            incomplete_items,
        }
    }

    /// Guarded margin formula: zero price yields zero percent, never a
    /// division by zero.
    #[must_use]
    pub fn margin_percent(profit: Decimal, price: Decimal) -> Decimal {
        if price.is_zero() {
            Decimal::ZERO
        } else {
            (profit / price * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }
}
