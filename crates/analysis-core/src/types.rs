use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar data, chronological ascending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A single cash dividend payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividendPayment {
    pub date: DateTime<Utc>,
    pub amount: f64,
}

/// One annual income-statement column. Tables are ordered most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub net_income: Option<f64>,
    pub total_revenue: Option<f64>,
}

/// One annual cashflow-statement column, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashflowStatement {
    pub operating_cash_flow: Option<f64>,
    pub capital_expenditures: Option<f64>,
}

/// One annual balance-sheet column, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub total_equity: Option<f64>,
    pub total_liabilities: Option<f64>,
}

/// Descriptive metadata and point-in-time fundamentals for one company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub sector: String,
    pub current_price: f64,
    #[serde(default)]
    pub summary: Option<String>,
    /// Trailing price/earnings ratio
    #[serde(default)]
    pub trailing_pe: Option<f64>,
    #[serde(default)]
    pub price_to_book: Option<f64>,
    /// Debt/equity as reported by data providers: a raw percentage (40.0 = 0.40x)
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    /// Return on equity as a fraction (0.15 = 15%)
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    /// Dividends paid over net income, as a fraction
    #[serde(default)]
    pub payout_ratio: Option<f64>,
    /// Year-over-year revenue growth as a fraction
    #[serde(default)]
    pub revenue_growth: Option<f64>,
}

/// Everything the pipeline consumes for one symbol. Assembled by the data
/// retrieval layer; the analysis itself performs no I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDataset {
    pub profile: CompanyProfile,
    #[serde(default)]
    pub price_history: Vec<Bar>,
    #[serde(default)]
    pub dividends: Vec<DividendPayment>,
    #[serde(default)]
    pub income: Vec<IncomeStatement>,
    #[serde(default)]
    pub cashflow: Vec<CashflowStatement>,
    #[serde(default)]
    pub balance: Vec<BalanceSheet>,
}

/// Total dividends paid in one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDividend {
    pub year: i32,
    pub total: f64,
}

/// Multi-year trend aggregates derived from the statement tables and the
/// dividend history. `Default` is the degraded "no usable statements" state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendSignals {
    /// Years with negative net income, out of the columns available
    pub loss_years: u32,
    /// Years with negative free cash flow (operating cash flow - capex)
    pub negative_fcf_years: u32,
    pub avg_roe: Option<f64>,
    pub revenue_cagr: Option<f64>,
    pub debt_increasing: Option<bool>,
    pub consecutive_dividend_years: u32,
    /// Calendar-year dividend totals, years ascending, positive totals only
    pub annual_dividends: Vec<AnnualDividend>,
}

/// Latest values of the price-derived indicators. Individual fields are
/// absent when the history is too short for that indicator's warm-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi_14: Option<f64>,
    pub macd_histogram: Option<f64>,
}

/// The closed set of scoring judges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgeKind {
    Fundamental,
    DividendConsistency,
    DividendYield,
    DividendGrowth,
    RevenueGrowth,
    ManagementConfidence,
    Technical,
}

impl JudgeKind {
    pub const ALL: [JudgeKind; 7] = [
        JudgeKind::Fundamental,
        JudgeKind::DividendConsistency,
        JudgeKind::DividendYield,
        JudgeKind::DividendGrowth,
        JudgeKind::RevenueGrowth,
        JudgeKind::ManagementConfidence,
        JudgeKind::Technical,
    ];

    /// Composite weight of this judge. Weights across `ALL` sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            JudgeKind::Fundamental => 0.35,
            JudgeKind::DividendConsistency => 0.20,
            JudgeKind::DividendYield => 0.15,
            JudgeKind::DividendGrowth => 0.10,
            JudgeKind::RevenueGrowth => 0.10,
            JudgeKind::ManagementConfidence => 0.05,
            JudgeKind::Technical => 0.05,
        }
    }

    /// Human-readable label for report output
    pub fn label(&self) -> &'static str {
        match self {
            JudgeKind::Fundamental => "Fundamental",
            JudgeKind::DividendConsistency => "Dividend Consistency",
            JudgeKind::DividendYield => "Dividend Yield",
            JudgeKind::DividendGrowth => "Dividend Growth",
            JudgeKind::RevenueGrowth => "Revenue Growth",
            JudgeKind::ManagementConfidence => "Management Confidence",
            JudgeKind::Technical => "Technical (Timing)",
        }
    }
}

/// Score and explanation from one judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeResult {
    /// Normalized score, 0 to 100
    pub score: f64,
    /// Human-readable reasons, in evaluation order
    pub reasons: Vec<String>,
    /// Raw numbers behind the score
    #[serde(default)]
    pub metrics: serde_json::Value,
}

impl JudgeResult {
    pub fn new(score: f64, reasons: Vec<String>) -> Self {
        Self {
            score,
            reasons,
            metrics: serde_json::Value::Null,
        }
    }

    pub fn with_metrics(score: f64, reasons: Vec<String>, metrics: serde_json::Value) -> Self {
        Self {
            score,
            reasons,
            metrics,
        }
    }
}

/// One applied penalty from the adaptive penalty engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyEntry {
    /// Short category label ("Earnings", "FCF", ...)
    pub label: String,
    pub reason: String,
    /// Multiplicative discount, in (0, 1]
    pub factor: f64,
}

/// Complete outcome of one analysis run for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub analyzed_at: DateTime<Utc>,
    pub fundamental: JudgeResult,
    pub technical: JudgeResult,
    pub dividend_consistency: JudgeResult,
    pub dividend_yield: JudgeResult,
    pub dividend_growth: JudgeResult,
    pub revenue_growth: JudgeResult,
    pub management_confidence: JudgeResult,
    /// Trailing twelve-month dividend yield, percent
    pub dividend_yield_pct: Option<f64>,
    /// Dividend CAGR over completed calendar years, percent
    pub dividend_growth_pct: Option<f64>,
    pub trends: TrendSignals,
    pub indicators: Option<TechnicalSnapshot>,
    /// Weighted blend of the judge scores, 0 to 100
    pub base_probability: f64,
    /// Combined trend discount, floor-clamped at 0.65
    pub penalty_factor: f64,
    /// Applied penalties, in cascade order
    pub penalties: Vec<PenaltyEntry>,
    /// `base_probability * penalty_factor`
    pub adjusted_probability: f64,
}

impl AnalysisResult {
    /// Judge result lookup by kind, for weight-ordered report rendering
    pub fn judge(&self, kind: JudgeKind) -> &JudgeResult {
        match kind {
            JudgeKind::Fundamental => &self.fundamental,
            JudgeKind::DividendConsistency => &self.dividend_consistency,
            JudgeKind::DividendYield => &self.dividend_yield,
            JudgeKind::DividendGrowth => &self.dividend_growth,
            JudgeKind::RevenueGrowth => &self.revenue_growth,
            JudgeKind::ManagementConfidence => &self.management_confidence,
            JudgeKind::Technical => &self.technical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_weights_sum_to_one() {
        let total: f64 = JudgeKind::ALL.iter().map(|k| k.weight()).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
