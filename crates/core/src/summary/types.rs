//! Financial view-model types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only financial summary exposed to the presentation layer.
///
/// Assembled from the payment plan, the anticipation simulation, and the
/// latest margin analysis; carries everything the budget screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Displayed per-installment value.
    pub installment_value: Decimal,
    /// Fees attached to the payment plan.
    pub total_fees: Decimal,
    /// What the clinic collects under the normal schedule.
    pub net_receive: Decimal,
    /// Cash received within 24 hours when anticipating.
    pub cash_in_24h: Decimal,
    /// Total anticipation fees.
    pub anticipation_cost: Decimal,
    /// Days until the full receivable settles under the normal schedule.
    pub days_to_receive: u32,
    /// Advisory recommendation comparing the two receipts. Never a gate.
    pub recommendation: String,
    /// Estimated clinic profit from the latest margin analysis.
    pub estimated_profit: Decimal,
    /// Estimated margin percentage from the latest margin analysis.
    pub estimated_margin_percent: Decimal,
    /// Whether anticipating is advisable under the configured threshold.
    pub is_anticipation_viable: bool,
}
