//! Anticipation cost/benefit simulation.

use clinia_shared::FinancialSettings;
use rust_decimal::Decimal;

use super::types::{AnticipationResult, AnticipationViability};
use crate::payment::{PaymentConfig, PaymentMethod};

/// Stateless simulator for receivables anticipation.
pub struct AnticipationSimulator;

impl AnticipationSimulator {
    /// Estimates the cost of converting a staggered card receivable into
    /// same-day cash.
    ///
    /// Anticipation only applies to credit card plans with more than one
    /// installment; any other shape, a disabled simulation, or a zero total
    /// yields the pass-through result. Never divides by zero.
    #[must_use]
    pub fn simulate(
        final_total: Decimal,
        payment: &PaymentConfig,
        settings: &FinancialSettings,
        enabled: bool,
    ) -> AnticipationResult {
        let total = final_total.max(Decimal::ZERO).round_dp(2);

        let anticipatable =
            payment.method == PaymentMethod::CreditCard && payment.installment_count > 1;
        if !enabled || !anticipatable || total.is_zero() {
            return AnticipationResult::pass_through(total);
        }

        let intermediation_cost =
            (total * settings.intermediation_fee_percent / Decimal::ONE_HUNDRED).round_dp(2);
        let anticipation_cost = (total * settings.anticipation_fee_per_installment_percent
            / Decimal::ONE_HUNDRED
            * Decimal::from(payment.installment_count))
        .round_dp(2);
        let total_fees = intermediation_cost + anticipation_cost;

        // total is nonzero here; the guard above keeps this division safe.
        let effective_loss_percent = (total_fees / total * Decimal::ONE_HUNDRED).round_dp(2);

        let viability = if effective_loss_percent > settings.anticipation_loss_threshold_percent {
            AnticipationViability::NotAdvisable
        } else {
            AnticipationViability::Viable
        };

        AnticipationResult {
            enabled: true,
            total_value: total,
            intermediation_cost,
            anticipation_cost,
            total_fees,
            net_receive_24h: total - total_fees,
            effective_loss_percent,
            viability,
        }
    }
}
