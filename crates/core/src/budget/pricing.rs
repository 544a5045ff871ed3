//! Pricing aggregation for budget items.

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{Budget, BudgetItem};

/// Stateless pricing aggregation.
pub struct PricingService;

impl PricingService {
    /// Sum of all line totals, rounded to cents.
    #[must_use]
    pub fn subtotal(items: &[BudgetItem]) -> Decimal {
        items
            .iter()
            .map(BudgetItem::total)
            .sum::<Decimal>()
            .round_dp(2)
    }

    /// Final total: subtotal minus discount, floored at zero.
    ///
    /// A discount larger than the subtotal clamps the result to zero rather
    /// than failing; a negative discount is treated as zero.
    #[must_use]
    pub fn final_total(subtotal: Decimal, discount: Decimal) -> Decimal {
        let discount = discount.max(Decimal::ZERO);
        (subtotal - discount).max(Decimal::ZERO).round_dp(2)
    }

    /// Validates an item edit against the owning budget.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::BudgetImmutable` if the budget status no longer
    /// allows edits, `BudgetError::ZeroQuantity` for a quantity of zero, and
    /// `BudgetError::NegativeAmount` for a negative unit value.
    pub fn validate_item(budget: &Budget, item: &BudgetItem) -> Result<(), BudgetError> {
        if !budget.is_editable() {
            return Err(BudgetError::BudgetImmutable);
        }

        if item.quantity == 0 {
            return Err(BudgetError::ZeroQuantity);
        }

        if item.unit_value.is_sign_negative() {
            return Err(BudgetError::NegativeAmount);
        }

        Ok(())
    }
}
