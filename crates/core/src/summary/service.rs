//! Financial summary assembly.

use rust_decimal::Decimal;

use super::types::FinancialSummary;
use crate::anticipation::AnticipationResult;
use crate::margin::MarginAnalysis;
use crate::payment::PaymentPlan;

/// Stateless view-model assembly.
pub struct SummaryService;

impl SummaryService {
    /// Builds the financial summary for a budget screen.
    ///
    /// A missing margin analysis reads as zero profit and zero margin, in
    /// line with the approval gate's conservative default.
    #[must_use]
    pub fn build(
        plan: &PaymentPlan,
        anticipation: &AnticipationResult,
        analysis: Option<&MarginAnalysis>,
    ) -> FinancialSummary {
        FinancialSummary {
            installment_value: plan.installment_value,
            total_fees: plan.total_fees,
            net_receive: plan.net_receive,
            cash_in_24h: anticipation.net_receive_24h,
            anticipation_cost: anticipation.total_fees,
            days_to_receive: plan.days_to_receive,
            recommendation: Self::recommendation(plan, anticipation),
            estimated_profit: analysis.map_or(Decimal::ZERO, |a| a.total_profit),
            estimated_margin_percent: analysis.map_or(Decimal::ZERO, |a| a.margin_percent),
            is_anticipation_viable: anticipation.is_viable(),
        }
    }

    /// Advisory comparison of the staggered receipt against anticipated
    /// same-day cash. Purely informational.
    fn recommendation(plan: &PaymentPlan, anticipation: &AnticipationResult) -> String {
        if !anticipation.enabled {
            return format!(
                "Standard schedule: receive {} within {} days.",
                plan.net_receive, plan.days_to_receive
            );
        }

        if anticipation.is_viable() {
            format!(
                "Anticipation viable: receive {} within 24h instead of {} over {} days \
                 (cost {}, {}% of the receivable).",
                anticipation.net_receive_24h,
                plan.net_receive,
                plan.days_to_receive,
                anticipation.total_fees,
                anticipation.effective_loss_percent
            )
        } else {
            format!(
                "Anticipation not advisable: fees of {} would consume {}% of the receivable; \
                 keep the {}-day schedule.",
                anticipation.total_fees, anticipation.effective_loss_percent, plan.days_to_receive
            )
        }
    }
}
