//! Receivables anticipation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Advisory verdict on converting a staggered receivable into same-day cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnticipationViability {
    /// Fees stay within the configured loss threshold.
    Viable,
    /// Fees exceed the threshold; anticipating is flagged, never blocked.
    NotAdvisable,
}

impl AnticipationViability {
    /// Returns the string representation of the verdict.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viable => "viable",
            Self::NotAdvisable => "not_advisable",
        }
    }
}

/// Result of an anticipation simulation.
///
/// Purely derived; never persisted. When the simulation is off (or the plan
/// shape does not support anticipation) the result is a total-safe
/// pass-through: all costs zero, net receive equal to the full total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnticipationResult {
    /// Whether the simulation actually ran for this plan.
    pub enabled: bool,
    /// The receivable total being anticipated.
    pub total_value: Decimal,
    /// One-off intermediation cost.
    pub intermediation_cost: Decimal,
    /// Per-installment anticipation cost, scaled by installment count.
    pub anticipation_cost: Decimal,
    /// Sum of all anticipation fees.
    pub total_fees: Decimal,
    /// Cash received within 24 hours after fees.
    pub net_receive_24h: Decimal,
    /// Fees as a percentage of the total; zero for a zero total.
    pub effective_loss_percent: Decimal,
    /// Advisory verdict against the configured loss threshold.
    pub viability: AnticipationViability,
}

impl AnticipationResult {
    /// Pass-through result for a disabled or non-anticipatable plan.
    #[must_use]
    pub fn pass_through(total_value: Decimal) -> Self {
        Self {
            enabled: false,
            total_value,
            intermediation_cost: Decimal::ZERO,
            anticipation_cost: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            net_receive_24h: total_value,
            effective_loss_percent: Decimal::ZERO,
            viability: AnticipationViability::Viable,
        }
    }

    /// Returns true when anticipating is advisable.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.viability == AnticipationViability::Viable
    }
}
