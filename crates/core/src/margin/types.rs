//! Margin analysis data types.

use std::collections::BTreeMap;

use clinia_shared::types::{BudgetItemId, ProcedureId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-procedure cost composition supplied by the external cost service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Consumable material cost per unit.
    pub material_cost: Decimal,
    /// Professional remuneration per unit.
    pub professional_cost: Decimal,
    /// Operational overhead per unit.
    pub operational_overhead: Decimal,
}

impl CostBreakdown {
    /// Creates a breakdown from explicit components.
    #[must_use]
    pub const fn new(
        material_cost: Decimal,
        professional_cost: Decimal,
        operational_overhead: Decimal,
    ) -> Self {
        Self {
            material_cost,
            professional_cost,
            operational_overhead,
        }
    }

    /// Creates a breakdown deriving the overhead component from chair time.
    ///
    /// This is how collaborators translate the clinic-wide cost-per-minute
    /// into a per-procedure overhead.
    #[must_use]
    pub fn with_overhead_from_minutes(
        material_cost: Decimal,
        professional_cost: Decimal,
        chair_minutes: u32,
        cost_per_minute: Decimal,
    ) -> Self {
        Self {
            material_cost,
            professional_cost,
            operational_overhead: cost_per_minute * Decimal::from(chair_minutes),
        }
    }

    /// Total unit cost: material + professional + overhead.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.material_cost + self.professional_cost + self.operational_overhead
    }
}

/// Snapshot of cost data fetched from the external cost service.
///
/// Keyed by procedure so lookups are deterministic; the map may be stale or
/// incomplete; missing procedures degrade to zero-cost, flagged items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSnapshot {
    /// Cost breakdowns by procedure.
    pub breakdowns: BTreeMap<ProcedureId, CostBreakdown>,
    /// Clinic-wide operating cost per chair minute.
    pub cost_per_minute: Decimal,
}

impl CostSnapshot {
    /// Creates an empty snapshot with the given cost per minute.
    #[must_use]
    pub fn new(cost_per_minute: Decimal) -> Self {
        Self {
            breakdowns: BTreeMap::new(),
            cost_per_minute,
        }
    }

    /// Inserts a breakdown for a procedure.
    #[must_use]
    pub fn with_breakdown(mut self, procedure_id: ProcedureId, breakdown: CostBreakdown) -> Self {
        self.breakdowns.insert(procedure_id, breakdown);
        self
    }
}

/// Whether an item's cost data resolved against the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostStatus {
    /// Cost data was found for the item's procedure.
    Priced,
    /// No cost data; the item contributed zero cost and is flagged.
    Missing,
}

/// Margin detail for a single analyzed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMargin {
    /// The analyzed item.
    pub item_id: BudgetItemId,
    /// The procedure the cost was resolved against.
    pub procedure_id: ProcedureId,
    /// Line price (quantity x unit value).
    pub price: Decimal,
    /// Line cost (unit cost x quantity); zero when cost data is missing.
    pub cost: Decimal,
    /// Line profit.
    pub profit: Decimal,
    /// Line margin percentage; zero for a zero price.
    pub margin_percent: Decimal,
    /// True when the line margin falls under the configured floor.
    pub below_floor: bool,
    /// Whether cost data resolved.
    pub cost_status: CostStatus,
}

/// Aggregate profit and margin verdict for a budget.
///
/// Derived, recomputed whenever items or cost inputs change; never persisted
/// independently of the budget snapshot it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginAnalysis {
    /// Total analyzed price.
    pub total_price: Decimal,
    /// Total resolved costs.
    pub total_costs: Decimal,
    /// Total profit (price minus costs).
    pub total_profit: Decimal,
    /// Aggregate margin percentage; zero for a zero total price.
    pub margin_percent: Decimal,
    /// Per-item margin details, in item order.
    pub items: Vec<ItemMargin>,
    /// Items whose individual margin fell under the floor.
    pub low_margin_items: Vec<BudgetItemId>,
    /// Items whose cost data did not resolve.
    pub incomplete_items: Vec<BudgetItemId>,
}
