//! Property-based tests for payment plan construction.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::plan::PlanCalculator;
use super::types::{PaymentConfig, PaymentMethod};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Strategy for amounts with cent precision, 0.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a financeable method (installments allowed above 1).
fn financed_method() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::CreditCard),
        Just(PaymentMethod::Boleto),
    ]
}

proptest! {
    /// The generated installments always sum exactly to the financed amount
    /// (final total minus the clamped down payment), with no rounding drift.
    #[test]
    fn prop_installments_sum_exactly(
        final_total in amount(),
        down_payment in amount(),
        count in 1u32..=12,
        method in financed_method(),
    ) {
        let config = PaymentConfig::new(method, count, down_payment);
        let plan = PlanCalculator::build(final_total, &config, today()).unwrap();

        let financed: Decimal = plan
            .installments
            .iter()
            .filter(|e| !e.is_down_payment)
            .map(|e| e.amount)
            .sum();

        prop_assert_eq!(financed, final_total - plan.down_payment);
    }

    /// Upfront methods always force a single fee-free installment.
    #[test]
    fn prop_upfront_methods_have_no_fees(
        final_total in amount(),
        requested_count in 1u32..=12,
        upfront in prop_oneof![Just(PaymentMethod::Cash), Just(PaymentMethod::Pix)],
    ) {
        let config = PaymentConfig::new(upfront, requested_count, Decimal::ZERO);
        prop_assert_eq!(config.installment_count, 1);

        let plan = PlanCalculator::build(final_total, &config, today()).unwrap();
        prop_assert_eq!(plan.total_fees, Decimal::ZERO);
        prop_assert_eq!(plan.net_receive, final_total);
    }

    /// The clinic never receives more than the patient is charged, and the
    /// plan never loses money to rounding.
    #[test]
    fn prop_net_receive_bounded_by_amount_charged(
        final_total in amount(),
        count in 1u32..=12,
        method in financed_method(),
    ) {
        let config = PaymentConfig::new(method, count, Decimal::ZERO);
        let plan = PlanCalculator::build(final_total, &config, today()).unwrap();

        prop_assert!(plan.net_receive <= plan.amount_charged);
        prop_assert!(plan.net_receive >= Decimal::ZERO);
    }

    /// Due dates advance strictly by schedule position.
    #[test]
    fn prop_due_dates_strictly_increase(
        final_total in amount(),
        count in 2u32..=12,
    ) {
        let config = PaymentConfig::new(PaymentMethod::CreditCard, count, Decimal::ZERO);
        let plan = PlanCalculator::build(final_total, &config, today()).unwrap();

        for pair in plan.installments.windows(2) {
            prop_assert!(pair[0].due_date < pair[1].due_date);
        }
    }
}
