use std::collections::BTreeMap;

use analysis_core::config::CAGR_YEARS;
use analysis_core::{AnnualDividend, DividendPayment};
use chrono::{DateTime, Datelike, Duration, Utc};

/// Resample raw payments into calendar-year totals, years ascending.
/// Years with a non-positive total are dropped.
pub fn annual_totals(payments: &[DividendPayment]) -> Vec<AnnualDividend> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for p in payments {
        *by_year.entry(p.date.year()).or_insert(0.0) += p.amount;
    }
    by_year
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(year, total)| AnnualDividend { year, total })
        .collect()
}

/// Trailing twelve-month dividend yield against the current price, percent.
/// Absent when there are no payments at all or the price is non-positive.
pub fn trailing_yield_pct(
    payments: &[DividendPayment],
    price: f64,
    as_of: DateTime<Utc>,
) -> Option<f64> {
    if payments.is_empty() || price <= 0.0 {
        return None;
    }
    let cutoff = as_of - Duration::days(365);
    let total: f64 = payments
        .iter()
        .filter(|p| p.date >= cutoff)
        .map(|p| p.amount)
        .sum();
    Some(total / price * 100.0)
}

/// Dividend CAGR in percent over up to `CAGR_YEARS` completed calendar
/// years. The current partial year is excluded; needs at least two annual
/// points, a positive starting total and a positive year span.
pub fn dividend_cagr_pct(annual: &[AnnualDividend], as_of: DateTime<Utc>) -> Option<f64> {
    let last_complete = as_of.year() - 1;
    let completed: Vec<&AnnualDividend> =
        annual.iter().filter(|a| a.year <= last_complete).collect();
    if completed.len() < 2 {
        return None;
    }

    let window = &completed[completed.len() - completed.len().min(CAGR_YEARS)..];
    let first = window[0];
    let last = window[window.len() - 1];
    let periods = last.year - first.year;
    if first.total <= 0.0 || periods <= 0 {
        return None;
    }
    Some(((last.total / first.total).powf(1.0 / periods as f64) - 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap()
    }

    fn payment(year: i32, month: u32, amount: f64) -> DividendPayment {
        DividendPayment {
            date: Utc.with_ymd_and_hms(year, month, 10, 0, 0, 0).unwrap(),
            amount,
        }
    }

    fn annual(series: &[(i32, f64)]) -> Vec<AnnualDividend> {
        series
            .iter()
            .map(|&(year, total)| AnnualDividend { year, total })
            .collect()
    }

    #[test]
    fn annual_totals_sums_by_calendar_year() {
        let payments = vec![
            payment(2024, 3, 0.25),
            payment(2024, 9, 0.30),
            payment(2025, 3, 0.40),
        ];
        let totals = annual_totals(&payments);
        assert_eq!(
            totals,
            annual(&[(2024, 0.55), (2025, 0.40)])
        );
    }

    #[test]
    fn trailing_yield_uses_365_day_window() {
        // One payment inside the window, one well outside it.
        let payments = vec![payment(2026, 1, 3.0), payment(2024, 1, 5.0)];
        let y = trailing_yield_pct(&payments, 100.0, as_of()).unwrap();
        assert!((y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn trailing_yield_absent_without_payments_or_price() {
        assert!(trailing_yield_pct(&[], 100.0, as_of()).is_none());
        let payments = vec![payment(2026, 1, 3.0)];
        assert!(trailing_yield_pct(&payments, 0.0, as_of()).is_none());
    }

    #[test]
    fn dividend_cagr_excludes_partial_current_year() {
        // 2026 is in progress at the as_of date and must not count.
        let series = annual(&[(2023, 1.00), (2024, 1.10), (2025, 1.21), (2026, 0.20)]);
        let g = dividend_cagr_pct(&series, as_of()).unwrap();
        // 1.00 -> 1.21 over 2 years is 10% per year.
        assert!((g - 10.0).abs() < 1e-9);
    }

    #[test]
    fn dividend_cagr_windows_to_five_completed_years() {
        let series = annual(&[
            (2018, 4.00),
            (2019, 1.00),
            (2020, 1.00),
            (2021, 1.00),
            (2022, 1.00),
            (2023, 1.00),
            (2024, 1.00),
            (2025, 1.46),
        ]);
        // Window is 2021..=2025; the 2018 outlier is out of range.
        let g = dividend_cagr_pct(&series, as_of()).unwrap();
        assert!((g - (1.46f64.powf(0.25) - 1.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn dividend_cagr_needs_two_completed_years() {
        let series = annual(&[(2025, 1.0)]);
        assert!(dividend_cagr_pct(&series, as_of()).is_none());

        let series = annual(&[(2025, 1.0), (2026, 1.0)]);
        assert!(dividend_cagr_pct(&series, as_of()).is_none());
    }

    #[test]
    fn dividend_cagr_negative_when_dividend_shrank() {
        let series = annual(&[(2023, 2.0), (2024, 1.5), (2025, 1.0)]);
        assert!(dividend_cagr_pct(&series, as_of()).unwrap() < 0.0);
    }
}
