//! Item filtering for margin analysis.

use clinia_shared::types::UserId;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetItem;

/// Filter narrowing the item set fed into margin analysis.
///
/// Filtered-out items remain priced by the aggregator; they are only
/// excluded from the profit computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginFilter {
    /// Restrict to these commercial categories; empty matches all.
    pub categories: Vec<String>,
    /// Restrict to items sold by this team member.
    pub sales_rep: Option<UserId>,
}

impl MarginFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category to the filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Restricts the filter to a sales rep.
    #[must_use]
    pub const fn with_sales_rep(mut self, sales_rep: UserId) -> Self {
        self.sales_rep = Some(sales_rep);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sales_rep.is_none()
    }

    /// Returns true if the item passes the filter.
    #[must_use]
    pub fn matches(&self, item: &BudgetItem) -> bool {
        let category_ok = self.categories.is_empty()
            || item
                .category
                .as_ref()
                .is_some_and(|c| self.categories.contains(c));

        let rep_ok = self.sales_rep.is_none() || self.sales_rep == item.sales_rep;

        category_ok && rep_ok
    }
}
