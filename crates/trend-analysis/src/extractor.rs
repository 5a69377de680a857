use analysis_core::{
    AnalysisError, BalanceSheet, CashflowStatement, CompanyDataset, DividendPayment,
    IncomeStatement, TrendSignals,
};
use chrono::{DateTime, Datelike, Utc};

/// Annual columns of each statement table considered by the trend window
const STATEMENT_COLUMNS: usize = 4;

/// Derive `TrendSignals` for one dataset.
///
/// Never fails: missing or unusable statement tables degrade to
/// `TrendSignals::default()` with a warning, so one bad table cannot take
/// down the rest of the analysis.
pub fn extract_trends(dataset: &CompanyDataset, as_of: DateTime<Utc>) -> TrendSignals {
    match try_extract(dataset, as_of) {
        Ok(trends) => trends,
        Err(e) => {
            tracing::warn!(
                symbol = %dataset.profile.symbol,
                "trend extraction degraded to empty signals: {e}"
            );
            TrendSignals::default()
        }
    }
}

fn try_extract(
    dataset: &CompanyDataset,
    as_of: DateTime<Utc>,
) -> Result<TrendSignals, AnalysisError> {
    if dataset.income.is_empty() || dataset.cashflow.is_empty() || dataset.balance.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "one or more statement tables are empty".to_string(),
        ));
    }
    check_finite(dataset)?;

    let income = window(&dataset.income);
    let cashflow = window(&dataset.cashflow);
    let balance = window(&dataset.balance);

    Ok(TrendSignals {
        loss_years: loss_years(income),
        negative_fcf_years: negative_fcf_years(cashflow),
        avg_roe: average_roe(income, balance),
        revenue_cagr: revenue_cagr(income),
        debt_increasing: debt_trend(balance),
        consecutive_dividend_years: consecutive_dividend_years(&dataset.dividends, as_of),
        annual_dividends: crate::dividends::annual_totals(&dataset.dividends),
    })
}

fn window<T>(columns: &[T]) -> &[T] {
    &columns[..columns.len().min(STATEMENT_COLUMNS)]
}

fn check_finite(dataset: &CompanyDataset) -> Result<(), AnalysisError> {
    let values = dataset
        .income
        .iter()
        .flat_map(|c| [c.net_income, c.total_revenue])
        .chain(
            dataset
                .cashflow
                .iter()
                .flat_map(|c| [c.operating_cash_flow, c.capital_expenditures]),
        )
        .chain(
            dataset
                .balance
                .iter()
                .flat_map(|c| [c.total_equity, c.total_liabilities]),
        );
    for value in values.flatten() {
        if !value.is_finite() {
            return Err(AnalysisError::InvalidData(
                "non-finite value in statement tables".to_string(),
            ));
        }
    }
    Ok(())
}

/// Years with negative net income; a missing entry is not a loss
fn loss_years(income: &[IncomeStatement]) -> u32 {
    income
        .iter()
        .filter(|c| c.net_income.unwrap_or(0.0) < 0.0)
        .count() as u32
}

/// Years where operating cash flow minus capex goes negative
fn negative_fcf_years(cashflow: &[CashflowStatement]) -> u32 {
    cashflow
        .iter()
        .filter(|c| {
            c.operating_cash_flow.unwrap_or(0.0) - c.capital_expenditures.unwrap_or(0.0) < 0.0
        })
        .count() as u32
}

/// Mean of net income over equity across the window.
///
/// Zero equity entries count as gaps and are forward- then back-filled in
/// column order; if any gap survives the fill the metric is absent.
fn average_roe(income: &[IncomeStatement], balance: &[BalanceSheet]) -> Option<f64> {
    let mut equity: Vec<Option<f64>> = balance
        .iter()
        .map(|c| c.total_equity.filter(|&e| e != 0.0))
        .collect();
    fill_gaps(&mut equity);

    let mut ratios = Vec::with_capacity(income.len());
    for (col, eq) in income.iter().zip(&equity) {
        let eq = (*eq)?;
        ratios.push(col.net_income.unwrap_or(0.0) / eq);
    }
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

fn fill_gaps(series: &mut [Option<f64>]) {
    let mut carried = None;
    for slot in series.iter_mut() {
        match *slot {
            Some(v) => carried = Some(v),
            None => *slot = carried,
        }
    }
    carried = None;
    for slot in series.iter_mut().rev() {
        match *slot {
            Some(v) => carried = Some(v),
            None => *slot = carried,
        }
    }
}

/// Compound growth over the non-null revenue columns.
///
/// Columns run most recent first, so index 0 is the numerator and the last
/// index the denominator; the exponent uses the point count, not the year
/// span. The sign convention (positive when revenue grew) is pinned by a
/// test below.
fn revenue_cagr(income: &[IncomeStatement]) -> Option<f64> {
    let revenues: Vec<f64> = income.iter().filter_map(|c| c.total_revenue).collect();
    if revenues.len() < 2 {
        return None;
    }
    let newest = revenues[0];
    let oldest = revenues[revenues.len() - 1];
    if oldest <= 0.0 || newest <= 0.0 {
        return None;
    }
    Some((newest / oldest).powf(1.0 / revenues.len() as f64) - 1.0)
}

/// Whether total liabilities grew from the oldest to the newest column
fn debt_trend(balance: &[BalanceSheet]) -> Option<bool> {
    let debt: Vec<f64> = balance.iter().filter_map(|c| c.total_liabilities).collect();
    if debt.len() < 2 {
        return None;
    }
    Some(debt[0] > debt[debt.len() - 1])
}

/// Count of exactly consecutive paying years ending at the most recent one.
///
/// Only counted when the most recent paying year is the `as_of` year or the
/// year before; a stale history scores zero.
fn consecutive_dividend_years(payments: &[DividendPayment], as_of: DateTime<Utc>) -> u32 {
    let mut years: Vec<i32> = payments.iter().map(|p| p.date.year()).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();

    let latest = match years.first() {
        Some(&y) => y,
        None => return 0,
    };
    if latest < as_of.year() - 1 {
        return 0;
    }

    let mut count = 0u32;
    for (i, &year) in years.iter().enumerate() {
        if year == latest - i as i32 {
            count += 1;
        } else {
            break;
        }
    }
    count
}
