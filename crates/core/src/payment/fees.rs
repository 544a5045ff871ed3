//! Fee policy tables for payment methods.
//!
//! Rates live here as named accessors so the plan calculator never carries
//! inline literals. Card rates increase with the installment count: the
//! acquirer's financing cost is passed through to the clinic's receipts.

use rust_decimal::Decimal;

use super::types::PaymentMethod;

/// Minimum supported installment count.
pub const MIN_INSTALLMENTS: u32 = 1;

/// Maximum supported installment count.
pub const MAX_INSTALLMENTS: u32 = 12;

/// Card acquirer fee as a percent of the financed total.
///
/// Counts above [`MAX_INSTALLMENTS`] are clamped to the 12x rate; the plan
/// calculator rejects them before this table is consulted.
#[must_use]
pub fn card_fee_percent(installment_count: u32) -> Decimal {
    match installment_count {
        0 | 1 => Decimal::new(299, 2),
        2 => Decimal::new(459, 2),
        3 => Decimal::new(519, 2),
        4 => Decimal::new(579, 2),
        5 => Decimal::new(639, 2),
        6 => Decimal::new(699, 2),
        7 => Decimal::new(759, 2),
        8 => Decimal::new(819, 2),
        9 => Decimal::new(879, 2),
        10 => Decimal::new(939, 2),
        11 => Decimal::new(999, 2),
        _ => Decimal::new(1059, 2),
    }
}

/// Boleto issuance fee baseline, percent of the financed total.
#[must_use]
pub fn boleto_fee_percent() -> Decimal {
    Decimal::new(199, 2) // 1.99%
}

/// Factor applied to the boleto baseline when the plan runs over more than
/// one installment. The resulting surcharge is added to the amount the
/// patient owes; it is not deducted from the clinic's receipts.
#[must_use]
pub fn boleto_installment_surcharge_factor() -> Decimal {
    Decimal::new(13, 1) // 1.3
}

/// Days until the full receivable has settled for a method.
///
/// Card receivables stagger monthly, so the last installment lands
/// `30 * installment_count` days out.
#[must_use]
pub fn days_to_receive(method: PaymentMethod, installment_count: u32) -> u32 {
    match method {
        PaymentMethod::Cash => 0,
        PaymentMethod::Pix => 1,
        PaymentMethod::Boleto => 2,
        PaymentMethod::CreditCard => 30 * installment_count,
    }
}
