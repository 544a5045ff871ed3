//! Payment plan data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method offered to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash over the counter.
    Cash,
    /// Instant bank transfer.
    Pix,
    /// Credit card, optionally financed over installments.
    CreditCard,
    /// Bank payment slip (boleto).
    Boleto,
}

impl PaymentMethod {
    /// Returns the string representation of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Pix => "pix",
            Self::CreditCard => "credit_card",
            Self::Boleto => "boleto",
        }
    }

    /// Parses a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "pix" => Some(Self::Pix),
            "credit_card" => Some(Self::CreditCard),
            "boleto" => Some(Self::Boleto),
            _ => None,
        }
    }

    /// Returns true for methods settled upfront in a single payment.
    ///
    /// Cash and Pix cannot be split into installments.
    #[must_use]
    pub fn is_upfront(&self) -> bool {
        matches!(self, Self::Cash | Self::Pix)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment terms chosen for a budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Payment method.
    pub method: PaymentMethod,
    /// Number of installments, 1..=12.
    pub installment_count: u32,
    /// Upfront amount excluded from the installment schedule.
    pub down_payment: Decimal,
}

impl PaymentConfig {
    /// Creates a normalized payment config.
    #[must_use]
    pub fn new(method: PaymentMethod, installment_count: u32, down_payment: Decimal) -> Self {
        Self {
            method,
            installment_count,
            down_payment,
        }
        .normalized()
    }

    /// Forces a single installment for upfront methods (cash, pix).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.method.is_upfront() {
            self.installment_count = 1;
        }
        self
    }

    /// Returns true if the installment count is consistent with the method.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        !self.method.is_upfront() || self.installment_count == 1
    }
}

/// A single entry in the due-date schedule.
///
/// Entry number 0 is the down payment; numbered entries are due 30 days
/// apart from the plan date, not calendar-month aware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentScheduleEntry {
    /// Position in the schedule; 0 means down payment.
    pub number: u32,
    /// Amount due.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Whether this entry is the down payment.
    pub is_down_payment: bool,
}

/// A fee-adjusted payment plan with its due-date schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    /// Payment method the plan was built for.
    pub method: PaymentMethod,
    /// Number of installments.
    pub installment_count: u32,
    /// Upfront amount.
    pub down_payment: Decimal,
    /// Displayed per-installment value (the first installment, which also
    /// absorbs any fractional remainder).
    pub installment_value: Decimal,
    /// Due-date schedule, including the down payment entry when present.
    pub installments: Vec<InstallmentScheduleEntry>,
    /// Fees attached to the plan. Deducted from the clinic's receipts for
    /// card plans; added to the patient's total for boleto surcharges.
    pub total_fees: Decimal,
    /// What the patient owes in total, including pass-through surcharges.
    pub amount_charged: Decimal,
    /// What the clinic collects after deducted fees.
    pub net_receive: Decimal,
    /// Days until the full receivable has settled.
    pub days_to_receive: u32,
}
