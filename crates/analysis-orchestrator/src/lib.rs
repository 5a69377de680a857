//! The analysis pipeline: trend extraction, the technical stage, the seven
//! judges, the composite aggregator and the adaptive penalty engine, run
//! sequentially per symbol with no shared state between runs.

use analysis_core::{AnalysisResult, CompanyDataset, Judge, JudgeContext, JudgeKind};
use chrono::{DateTime, Utc};
use dividend_analysis::{DividendConsistencyJudge, DividendGrowthJudge, DividendYieldJudge};
use fundamental_analysis::{FundamentalJudge, ManagementJudge, RevenueGrowthJudge};
use technical_analysis::TechnicalJudge;
use trend_analysis::{dividend_cagr_pct, extract_trends, trailing_yield_pct};

pub mod composite;
pub mod penalty;
pub mod report;

pub use report::render_report;

/// Minimum consecutive paying years before a dividend growth rate is
/// considered meaningful at all
const MIN_GROWTH_HISTORY_YEARS: u32 = 2;

/// Turns one `CompanyDataset` into an `AnalysisResult`.
///
/// Synchronous and stateless: every run builds its inputs fresh, so
/// separate symbols can be analyzed concurrently from isolated workers.
/// Missing slices of data degrade inside the owning component and surface
/// as reasons on the affected judge; nothing here returns an error.
pub struct StockAnalyzer;

impl StockAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &CompanyDataset) -> AnalysisResult {
        self.analyze_at(dataset, Utc::now())
    }

    /// `analyze` with a pinned clock, for reproducible runs and tests
    pub fn analyze_at(&self, dataset: &CompanyDataset, as_of: DateTime<Utc>) -> AnalysisResult {
        let profile = &dataset.profile;
        tracing::info!(symbol = %profile.symbol, sector = %profile.sector, "starting analysis");

        let trends = extract_trends(dataset, as_of);
        let indicators = match technical_analysis::snapshot(&dataset.price_history) {
            Ok(snap) => Some(snap),
            Err(e) => {
                tracing::warn!(symbol = %profile.symbol, "technical stage skipped: {e}");
                None
            }
        };

        let dividend_yield_pct =
            trailing_yield_pct(&dataset.dividends, profile.current_price, as_of);
        let dividend_growth_pct = if trends.consecutive_dividend_years >= MIN_GROWTH_HISTORY_YEARS
        {
            dividend_cagr_pct(&trends.annual_dividends, as_of)
        } else {
            None
        };

        let ctx = JudgeContext {
            profile,
            trends: &trends,
            technical: indicators.as_ref(),
            dividend_yield_pct,
            dividend_growth_pct,
        };

        let fundamental = FundamentalJudge.evaluate(&ctx);
        let technical = TechnicalJudge.evaluate(&ctx);
        let dividend_consistency = DividendConsistencyJudge.evaluate(&ctx);
        let dividend_yield = DividendYieldJudge.evaluate(&ctx);
        let dividend_growth = DividendGrowthJudge.evaluate(&ctx);
        let revenue_growth = RevenueGrowthJudge.evaluate(&ctx);
        let management_confidence = ManagementJudge.evaluate(&ctx);

        let base_probability = composite::base_probability(&[
            (JudgeKind::Fundamental, fundamental.score),
            (JudgeKind::DividendConsistency, dividend_consistency.score),
            (JudgeKind::DividendYield, dividend_yield.score),
            (JudgeKind::DividendGrowth, dividend_growth.score),
            (JudgeKind::RevenueGrowth, revenue_growth.score),
            (JudgeKind::ManagementConfidence, management_confidence.score),
            (JudgeKind::Technical, technical.score),
        ]);

        let (penalty_factor, penalties) =
            penalty::evaluate(&trends, &profile.sector, dividend_growth_pct);
        let adjusted_probability = base_probability * penalty_factor;

        tracing::info!(
            symbol = %profile.symbol,
            base = base_probability,
            factor = penalty_factor,
            adjusted = adjusted_probability,
            "analysis complete"
        );

        AnalysisResult {
            symbol: profile.symbol.clone(),
            analyzed_at: as_of,
            fundamental,
            technical,
            dividend_consistency,
            dividend_yield,
            dividend_growth,
            revenue_growth,
            management_confidence,
            dividend_yield_pct,
            dividend_growth_pct,
            trends,
            indicators,
            base_probability,
            penalty_factor,
            penalties,
            adjusted_probability,
        }
    }
}

impl Default for StockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
