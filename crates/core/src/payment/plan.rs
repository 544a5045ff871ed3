//! Payment plan construction.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::allocation::split_first_heavy;
use super::error::PaymentError;
use super::fees::{
    self, MAX_INSTALLMENTS, MIN_INSTALLMENTS, boleto_fee_percent,
    boleto_installment_surcharge_factor, card_fee_percent,
};
use super::schedule::build_schedule;
use super::types::{PaymentConfig, PaymentMethod, PaymentPlan};

/// Stateless payment plan calculator.
pub struct PlanCalculator;

impl PlanCalculator {
    /// Builds a fee-adjusted payment plan for a finalized budget total.
    ///
    /// A down payment above the final total is clamped to the final total;
    /// the financed remainder is split into installments whose sum is exact.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidAmount` for a negative final total or
    /// down payment, and `PaymentError::InvalidInstallmentCount` when the
    /// count is outside 1..=12 or above 1 for cash/pix.
    pub fn build(
        final_total: Decimal,
        config: &PaymentConfig,
        today: NaiveDate,
    ) -> Result<PaymentPlan, PaymentError> {
        if final_total.is_sign_negative() {
            return Err(PaymentError::InvalidAmount {
                field: "final_total",
                value: final_total,
            });
        }
        if config.down_payment.is_sign_negative() {
            return Err(PaymentError::InvalidAmount {
                field: "down_payment",
                value: config.down_payment,
            });
        }

        let count = config.installment_count;
        if !(MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&count) || !config.is_normalized() {
            return Err(PaymentError::InvalidInstallmentCount {
                count,
                method: config.method,
            });
        }

        let final_total = final_total.round_dp(2);
        let down_payment = config.down_payment.min(final_total).round_dp(2);
        let financed = final_total - down_payment;

        let amounts = split_first_heavy(financed, count);
        let installments = build_schedule(down_payment, &amounts, today);
        let installment_value = amounts.first().copied().unwrap_or(Decimal::ZERO);

        let (total_fees, amount_charged, net_receive) = match config.method {
            PaymentMethod::Cash | PaymentMethod::Pix => {
                (Decimal::ZERO, final_total, final_total)
            }
            PaymentMethod::CreditCard => {
                let fee = (final_total * card_fee_percent(count) / Decimal::ONE_HUNDRED)
                    .round_dp(2);
                (fee, final_total, final_total - fee)
            }
            PaymentMethod::Boleto => {
                if count > 1 {
                    // Multi-installment boleto raises what the patient owes
                    // instead of discounting the clinic's receipts.
                    let baseline = final_total * boleto_fee_percent() / Decimal::ONE_HUNDRED;
                    let surcharge =
                        (baseline * boleto_installment_surcharge_factor()).round_dp(2);
                    (surcharge, final_total + surcharge, final_total)
                } else {
                    (Decimal::ZERO, final_total, final_total)
                }
            }
        };

        Ok(PaymentPlan {
            method: config.method,
            installment_count: count,
            down_payment,
            installment_value,
            installments,
            total_fees,
            amount_charged,
            net_receive,
            days_to_receive: fees::days_to_receive(config.method, count),
        })
    }
}
