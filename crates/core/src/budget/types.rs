//! Budget aggregate types.

use clinia_shared::types::{BudgetId, BudgetItemId, ClinicId, PatientId, ProcedureId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::approval::BudgetStatus;
use crate::payment::PaymentConfig;

/// A priced procedure line inside a commercial budget.
///
/// Items are immutable once the owning budget is approved. `procedure_id` is
/// optional: manually entered lines without a resolvable procedure stay
/// priced but are excluded from margin analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Item ID.
    pub id: BudgetItemId,
    /// Referenced procedure, when resolvable against the catalog.
    pub procedure_id: Option<ProcedureId>,
    /// Display name of the procedure.
    pub procedure_name: String,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Price per unit.
    pub unit_value: Decimal,
    /// Commercial category, used by margin filters.
    pub category: Option<String>,
    /// Team member who sold the item, used by margin filters.
    pub sales_rep: Option<UserId>,
}

impl BudgetItem {
    /// Line total: quantity times unit value.
    #[must_use]
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_value
    }
}

/// A commercial budget: priced items plus payment terms and approval status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning clinic.
    pub clinic_id: ClinicId,
    /// Patient the budget was drawn up for.
    pub patient_id: PatientId,
    /// Priced procedure lines.
    pub items: Vec<BudgetItem>,
    /// Commercial discount applied to the subtotal.
    pub discount: Decimal,
    /// Payment terms.
    pub payment: PaymentConfig,
    /// Current approval status.
    pub status: BudgetStatus,
}

impl Budget {
    /// Returns true if items and discount may still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }
}
