//! Judges over the dividend history: payment consistency, trailing yield
//! and multi-year growth.

use analysis_core::config::{self, CAGR_YEARS};
use analysis_core::{Judge, JudgeContext, JudgeKind, JudgeResult};
use serde_json::json;

/// Step function of the consecutive paying-years streak
pub struct DividendConsistencyJudge;

impl Judge for DividendConsistencyJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::DividendConsistency
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        let years = ctx.trends.consecutive_dividend_years;
        let (score, reason) = if years >= 10 {
            (
                100.0,
                format!("{years} years of dividends paid. A very solid track record."),
            )
        } else if years >= 5 {
            (
                75.0,
                format!("{years} years of dividends paid. A good track record."),
            )
        } else if years > 0 {
            (
                25.0,
                format!("{years} years of dividends paid. A short track record."),
            )
        } else {
            (
                0.0,
                "No recent history of dividend payments.".to_string(),
            )
        };
        JudgeResult::with_metrics(
            score,
            vec![reason],
            json!({ "consecutive_dividend_years": years }),
        )
    }
}

/// Maps the trailing twelve-month yield onto a 0-100 scale
pub struct DividendYieldJudge;

impl Judge for DividendYieldJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::DividendYield
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        let yield_pct = match ctx.dividend_yield_pct {
            Some(y) if y > 0.0 => y,
            _ => {
                return JudgeResult::new(
                    0.0,
                    vec!["Pays no dividend or no data available.".to_string()],
                )
            }
        };

        let desc = format!("Dividend yield of {yield_pct:.2}%");
        let (score, suffix) = if yield_pct >= 4.5 {
            (100.0, "excellent")
        } else if yield_pct >= 2.5 {
            (50.0 + (yield_pct - 2.5) * 25.0, "good")
        } else {
            (yield_pct * 20.0, "low")
        };
        JudgeResult::with_metrics(
            score,
            vec![format!("{desc} ({suffix}).")],
            json!({ "trailing_yield_pct": yield_pct }),
        )
    }
}

/// Tiers the dividend CAGR, with a sector exemption and history gates.
///
/// Cyclical sectors always score a neutral 50: their payouts follow the
/// cycle, so growth is not a signal there.
pub struct DividendGrowthJudge;

impl Judge for DividendGrowthJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::DividendGrowth
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        if config::is_cyclic_sector(&ctx.profile.sector) {
            return JudgeResult::new(
                50.0,
                vec!["Growth is not a priority in a cyclical sector.".to_string()],
            );
        }

        let years = ctx.trends.consecutive_dividend_years;
        if years < 2 {
            return JudgeResult::new(
                50.0,
                vec!["Not enough history to evaluate growth.".to_string()],
            );
        }

        let growth = match ctx.dividend_growth_pct {
            Some(g) => g,
            None => {
                return JudgeResult::new(
                    25.0,
                    vec!["Could not compute dividend growth.".to_string()],
                )
            }
        };

        let desc = format!("Dividend growth ({CAGR_YEARS}-year CAGR) of {growth:.2}%");
        let (score, suffix) = if growth >= 8.0 {
            (100.0, "excellent")
        } else if growth >= 4.0 {
            (75.0, "good")
        } else if growth >= 0.0 {
            (50.0, "stable")
        } else if years >= config::MATURE_DIVIDEND_YEARS {
            (0.0, "negative")
        } else {
            (25.0, "negative")
        };
        JudgeResult::with_metrics(
            score,
            vec![format!("{desc} ({suffix}).")],
            json!({ "dividend_cagr_pct": growth }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::{CompanyProfile, TrendSignals};

    struct Fixture {
        profile: CompanyProfile,
        trends: TrendSignals,
        yield_pct: Option<f64>,
        growth_pct: Option<f64>,
    }

    impl Fixture {
        fn new(sector: &str) -> Self {
            Self {
                profile: CompanyProfile {
                    symbol: "TEST".to_string(),
                    name: None,
                    sector: sector.to_string(),
                    current_price: 100.0,
                    summary: None,
                    trailing_pe: None,
                    price_to_book: None,
                    debt_to_equity: None,
                    return_on_equity: None,
                    payout_ratio: None,
                    revenue_growth: None,
                },
                trends: TrendSignals::default(),
                yield_pct: None,
                growth_pct: None,
            }
        }

        fn years(mut self, years: u32) -> Self {
            self.trends.consecutive_dividend_years = years;
            self
        }

        fn growth(mut self, pct: f64) -> Self {
            self.growth_pct = Some(pct);
            self
        }

        fn score(&self, judge: &dyn Judge) -> f64 {
            judge
                .evaluate(&JudgeContext {
                    profile: &self.profile,
                    trends: &self.trends,
                    technical: None,
                    dividend_yield_pct: self.yield_pct,
                    dividend_growth_pct: self.growth_pct,
                })
                .score
        }
    }

    #[test]
    fn consistency_is_a_step_function_of_the_streak() {
        let judge = DividendConsistencyJudge;
        assert_eq!(Fixture::new("Technology").years(10).score(&judge), 100.0);
        assert_eq!(Fixture::new("Technology").years(9).score(&judge), 75.0);
        assert_eq!(Fixture::new("Technology").years(5).score(&judge), 75.0);
        assert_eq!(Fixture::new("Technology").years(4).score(&judge), 25.0);
        assert_eq!(Fixture::new("Technology").years(0).score(&judge), 0.0);
    }

    #[test]
    fn yield_tiers_and_interpolation() {
        let mut f = Fixture::new("Technology");
        assert_eq!(f.score(&DividendYieldJudge), 0.0);

        f.yield_pct = Some(6.0);
        assert_eq!(f.score(&DividendYieldJudge), 100.0);

        f.yield_pct = Some(3.0);
        assert_eq!(f.score(&DividendYieldJudge), 62.5);

        f.yield_pct = Some(1.0);
        assert_eq!(f.score(&DividendYieldJudge), 20.0);

        f.yield_pct = Some(0.0);
        assert_eq!(f.score(&DividendYieldJudge), 0.0);
    }

    #[test]
    fn cyclical_sectors_are_exempt_from_growth_scoring() {
        for sector in ["Energy", "Basic Materials", "Industrials", "Consumer Cyclical"] {
            let f = Fixture::new(sector).years(10).growth(-20.0);
            assert_eq!(f.score(&DividendGrowthJudge), 50.0);
        }
    }

    #[test]
    fn growth_requires_two_consecutive_years() {
        let f = Fixture::new("Technology").years(1).growth(12.0);
        assert_eq!(f.score(&DividendGrowthJudge), 50.0);
    }

    #[test]
    fn unknown_growth_scores_low() {
        let f = Fixture::new("Technology").years(6);
        assert_eq!(f.score(&DividendGrowthJudge), 25.0);
    }

    #[test]
    fn growth_tier_table() {
        let judge = DividendGrowthJudge;
        assert_eq!(Fixture::new("Technology").years(6).growth(8.0).score(&judge), 100.0);
        assert_eq!(Fixture::new("Technology").years(6).growth(5.0).score(&judge), 75.0);
        assert_eq!(Fixture::new("Technology").years(6).growth(1.0).score(&judge), 50.0);
        // Negative growth: harsh for mature payers, softer for young ones.
        assert_eq!(Fixture::new("Technology").years(6).growth(-3.0).score(&judge), 0.0);
        assert_eq!(Fixture::new("Technology").years(3).growth(-3.0).score(&judge), 25.0);
    }
}
