//! Due-date schedule generation.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::types::InstallmentScheduleEntry;

/// Days between consecutive installments. Due dates are plain 30-day
/// offsets from the plan date, not calendar-month aware.
const INSTALLMENT_INTERVAL_DAYS: i64 = 30;

/// Builds the due-date schedule for a plan.
///
/// Entry 0 is the down payment, due on the plan date, present only when the
/// down payment is positive. Installment `k` is due `30 * k` days out.
#[must_use]
pub fn build_schedule(
    down_payment: Decimal,
    amounts: &[Decimal],
    today: NaiveDate,
) -> Vec<InstallmentScheduleEntry> {
    let mut entries = Vec::with_capacity(amounts.len() + 1);

    if down_payment > Decimal::ZERO {
        entries.push(InstallmentScheduleEntry {
            number: 0,
            amount: down_payment,
            due_date: today,
            is_down_payment: true,
        });
    }

    for (number, amount) in (1u32..).zip(amounts.iter().copied()) {
        entries.push(InstallmentScheduleEntry {
            number,
            amount,
            due_date: today + Duration::days(i64::from(number) * INSTALLMENT_INTERVAL_DAYS),
            is_down_payment: false,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_without_down_payment() {
        let entries = build_schedule(dec!(0), &[dec!(300), dec!(300), dec!(300)], date(2026, 1, 15));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].due_date, date(2026, 2, 14));
        assert_eq!(entries[2].number, 3);
        assert_eq!(entries[2].due_date, date(2026, 4, 15));
        assert!(entries.iter().all(|e| !e.is_down_payment));
    }

    #[test]
    fn test_schedule_with_down_payment() {
        let entries = build_schedule(dec!(200), &[dec!(400), dec!(400)], date(2026, 1, 15));

        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_down_payment);
        assert_eq!(entries[0].number, 0);
        assert_eq!(entries[0].amount, dec!(200));
        assert_eq!(entries[0].due_date, date(2026, 1, 15));
        assert_eq!(entries[1].number, 1);
        assert_eq!(entries[1].due_date, date(2026, 2, 14));
    }

    #[test]
    fn test_due_dates_are_not_calendar_month_aware() {
        // Jan 31 + 30 days lands on Mar 2, not Feb 28.
        let entries = build_schedule(dec!(0), &[dec!(100)], date(2026, 1, 31));
        assert_eq!(entries[0].due_date, date(2026, 3, 2));
    }
}
