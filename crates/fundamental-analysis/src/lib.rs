//! Judges over the company profile: sector-aware fundamental valuation,
//! year-over-year revenue growth, and the management-confidence placeholder.

use analysis_core::config::{self, ROE_ACCEPTABLE, ROE_GOOD};
use analysis_core::{Judge, JudgeContext, JudgeKind, JudgeResult};
use serde_json::json;

/// Scores valuation and balance-sheet quality against sector thresholds.
///
/// Every metric contributes an entry: metrics that are absent or
/// non-positive fall back to a conservative fixed score with an
/// "unavailable" reason instead of being dropped, so the mean is always
/// over five entries.
pub struct FundamentalJudge;

impl Judge for FundamentalJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::Fundamental
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        let profile = ctx.profile;
        let thresholds = config::thresholds_for(&profile.sector);

        let mut scores: Vec<f64> = Vec::new();
        let mut reasons: Vec<String> = Vec::new();
        let mut metrics = serde_json::Map::new();

        // Trailing P/E
        match profile.trailing_pe {
            Some(pe) if pe > 0.0 => {
                metrics.insert("pe_ratio".to_string(), json!(pe));
                if pe < thresholds.pe_low {
                    scores.push(100.0);
                    reasons.push(format!("P/E ({pe:.1}) low for the sector."));
                } else if pe <= thresholds.pe_high {
                    scores.push(75.0);
                    reasons.push(format!("P/E ({pe:.1}) acceptable for the sector."));
                } else {
                    scores.push(25.0);
                    reasons.push(format!("P/E ({pe:.1}) high for the sector."));
                }
            }
            _ => {
                scores.push(0.0);
                reasons.push("P/E negative or unavailable.".to_string());
            }
        }

        // Price/book
        match profile.price_to_book {
            Some(pb) if pb > 0.0 => {
                metrics.insert("price_to_book".to_string(), json!(pb));
                if pb < thresholds.pb_good {
                    scores.push(100.0);
                    reasons.push(format!("P/B ({pb:.1}) low, possible undervaluation."));
                } else if pb <= thresholds.pb_high {
                    scores.push(50.0);
                    reasons.push(format!("P/B ({pb:.1}) normal for the sector."));
                } else {
                    scores.push(0.0);
                    reasons.push(format!("P/B ({pb:.1}) high, possible overvaluation."));
                }
            }
            _ => {
                scores.push(50.0);
                reasons.push("P/B unavailable.".to_string());
            }
        }

        // Debt/equity arrives as a raw percentage (40.0 = 0.40x)
        match profile.debt_to_equity {
            Some(raw) => {
                let ratio = raw / 100.0;
                metrics.insert("debt_to_equity".to_string(), json!(ratio));
                if ratio < thresholds.debt_low {
                    scores.push(100.0);
                    reasons.push(format!("Debt/equity ({:.1}%) very low.", ratio * 100.0));
                } else if ratio <= thresholds.debt_high {
                    scores.push(75.0);
                    reasons.push(format!("Debt/equity ({:.1}%) manageable.", ratio * 100.0));
                } else {
                    scores.push(0.0);
                    reasons.push(format!("Debt/equity ({:.1}%) high.", ratio * 100.0));
                }
            }
            None => {
                scores.push(50.0);
                reasons.push("Debt/equity ratio unavailable.".to_string());
            }
        }

        // Return on equity
        match profile.return_on_equity {
            Some(roe) => {
                metrics.insert("return_on_equity".to_string(), json!(roe));
                if roe > ROE_GOOD {
                    scores.push(100.0);
                    reasons.push(format!(
                        "ROE ({:.1}%) excellent, highly profitable.",
                        roe * 100.0
                    ));
                } else if roe > ROE_ACCEPTABLE {
                    scores.push(75.0);
                    reasons.push(format!("ROE ({:.1}%) acceptable.", roe * 100.0));
                } else {
                    scores.push(25.0);
                    reasons.push(format!("ROE ({:.1}%) low.", roe * 100.0));
                }
            }
            None => {
                scores.push(25.0);
                reasons.push("ROE unavailable.".to_string());
            }
        }

        // Payout ratio
        match profile.payout_ratio {
            Some(payout) => {
                metrics.insert("payout_ratio".to_string(), json!(payout));
                if payout > 0.0 && payout <= 0.6 {
                    scores.push(100.0);
                    reasons.push(format!(
                        "Payout ratio ({:.1}%) low and sustainable.",
                        payout * 100.0
                    ));
                } else if payout <= thresholds.payout_acceptable {
                    scores.push(75.0);
                    reasons.push(format!("Payout ratio ({:.1}%) acceptable.", payout * 100.0));
                } else {
                    scores.push(0.0);
                    reasons.push(format!(
                        "Payout ratio ({:.1}%) high or negative.",
                        payout * 100.0
                    ));
                }
            }
            None => {
                scores.push(50.0);
                reasons.push("Payout ratio unavailable.".to_string());
            }
        }

        let score = scores.iter().sum::<f64>() / scores.len() as f64;
        JudgeResult::with_metrics(score, reasons, json!(metrics))
    }
}

/// Maps the externally supplied year-over-year revenue growth to a tier
pub struct RevenueGrowthJudge;

impl Judge for RevenueGrowthJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::RevenueGrowth
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        let growth = match ctx.profile.revenue_growth {
            Some(g) => g,
            None => {
                return JudgeResult::new(50.0, vec!["Revenue growth unavailable.".to_string()])
            }
        };

        let desc = format!("Year-over-year revenue growth of {:.1}%", growth * 100.0);
        let (score, suffix) = if growth >= 0.05 {
            (100.0, "solid")
        } else if growth >= 0.01 {
            (75.0, "moderate")
        } else {
            (25.0, "low or negative")
        };
        JudgeResult::with_metrics(
            score,
            vec![format!("{desc} ({suffix}).")],
            json!({ "revenue_growth": growth }),
        )
    }
}

/// Fixed neutral placeholder until a qualitative review exists
pub struct ManagementJudge;

impl Judge for ManagementJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::ManagementConfidence
    }

    fn evaluate(&self, _ctx: &JudgeContext<'_>) -> JudgeResult {
        JudgeResult::new(
            50.0,
            vec!["Neutral score. Requires qualitative review of management.".to_string()],
        )
    }
}
