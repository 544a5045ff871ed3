//! Property-based tests for the approval gate.

use clinia_shared::FinancialSettings;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ApprovalError;
use super::gate::ApprovalGate;
use super::types::BudgetStatus;
use crate::margin::MarginAnalysis;

fn analysis(margin_percent: Decimal) -> MarginAnalysis {
    MarginAnalysis {
        total_price: Decimal::new(1000, 0),
        total_costs: Decimal::ZERO,
        total_profit: Decimal::ZERO,
        margin_percent,
        items: vec![],
        low_margin_items: vec![],
        incomplete_items: vec![],
    }
}

fn non_terminal_status() -> impl Strategy<Value = BudgetStatus> {
    prop_oneof![
        Just(BudgetStatus::Draft),
        Just(BudgetStatus::PendingReview),
        Just(BudgetStatus::RequiresOverride),
    ]
}

proptest! {
    /// Below the floor, an attempt never reaches Approved; it always blocks
    /// in RequiresOverride with an unauthorized decision.
    #[test]
    fn prop_below_floor_never_approves_without_pin(
        margin_hundredths in -10_000i64..2_000,
        status in non_terminal_status(),
    ) {
        let settings = FinancialSettings::default();
        let margin = Decimal::new(margin_hundredths, 2); // strictly below 20.00
        let analysis = analysis(margin);

        let outcome = ApprovalGate::attempt(status, Some(&analysis), &settings).unwrap();

        prop_assert_eq!(outcome.new_status, BudgetStatus::RequiresOverride);
        prop_assert!(outcome.decision.required);
        prop_assert!(!outcome.decision.authorized);
    }

    /// At or above the floor, an attempt approves directly with no PIN
    /// prompt.
    #[test]
    fn prop_at_or_above_floor_approves_directly(
        margin_hundredths in 2_000i64..100_000,
        status in non_terminal_status(),
    ) {
        let settings = FinancialSettings::default();
        let analysis = analysis(Decimal::new(margin_hundredths, 2));

        let outcome = ApprovalGate::attempt(status, Some(&analysis), &settings).unwrap();

        prop_assert_eq!(outcome.new_status, BudgetStatus::Approved);
        prop_assert!(!outcome.decision.required);
        prop_assert!(outcome.decision.authorized);
    }

    /// A wrong PIN never advances the state, for any entered/stored pair
    /// that differs.
    #[test]
    fn prop_wrong_pin_never_approves(
        entered in "[0-9]{4}",
        stored in "[0-9]{4}",
    ) {
        prop_assume!(entered != stored);

        let result = ApprovalGate::verify_pin(
            BudgetStatus::RequiresOverride,
            &entered,
            &stored,
            Decimal::new(1500, 2),
        );

        prop_assert!(matches!(result, Err(ApprovalError::PinMismatch)));
    }

    /// A matching PIN approves from RequiresOverride for any margin.
    #[test]
    fn prop_matching_pin_approves(
        pin in "[0-9]{4}",
        margin_hundredths in -10_000i64..100_000,
    ) {
        let outcome = ApprovalGate::verify_pin(
            BudgetStatus::RequiresOverride,
            &pin,
            &pin,
            Decimal::new(margin_hundredths, 2),
        )
        .unwrap();

        prop_assert_eq!(outcome.new_status, BudgetStatus::Approved);
        prop_assert!(outcome.decision.authorized);
    }
}
