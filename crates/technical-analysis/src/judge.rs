use analysis_core::config::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use analysis_core::{Judge, JudgeContext, JudgeKind, JudgeResult};
use serde_json::json;

/// Scores short-term entry timing from the indicator snapshot.
///
/// Each indicator contributes one sub-score; indicators the history could
/// not produce are skipped, and the final score is the mean of whatever was
/// computable. No snapshot at all pins the score to a neutral 50.
pub struct TechnicalJudge;

impl Judge for TechnicalJudge {
    fn kind(&self) -> JudgeKind {
        JudgeKind::Technical
    }

    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult {
        let snap = match ctx.technical {
            Some(s) => s,
            None => {
                return JudgeResult::new(
                    50.0,
                    vec!["Not enough technical data to analyze.".to_string()],
                )
            }
        };

        let price = ctx.profile.current_price;
        let mut scores: Vec<f64> = Vec::new();
        let mut reasons: Vec<String> = Vec::new();

        if let Some(rsi) = snap.rsi_14 {
            if rsi < RSI_OVERSOLD {
                scores.push(100.0);
                reasons.push(format!("RSI ({rsi:.1}) oversold, possible rebound."));
            } else if rsi > RSI_OVERBOUGHT {
                scores.push(0.0);
                reasons.push(format!("RSI ({rsi:.1}) overbought, possible pullback."));
            } else {
                scores
                    .push(100.0 - (rsi - RSI_OVERSOLD) * 100.0 / (RSI_OVERBOUGHT - RSI_OVERSOLD));
                reasons.push(format!("RSI ({rsi:.1}) in the neutral band."));
            }
        }

        if let Some(hist) = snap.macd_histogram {
            if hist > 0.0 {
                scores.push(90.0);
                reasons.push("MACD histogram positive, bullish signal.".to_string());
            } else {
                scores.push(10.0);
                reasons.push("MACD histogram negative, bearish signal.".to_string());
            }
        }

        if let (Some(sma50), Some(sma200)) = (snap.sma_50, snap.sma_200) {
            let (score, reason) = if sma50 > sma200 && price > sma50 {
                (100.0, "Strong uptrend (price > SMA50 > SMA200).")
            } else if sma50 < sma200 && price < sma50 {
                (0.0, "Strong downtrend (price < SMA50 < SMA200).")
            } else if price > sma50 && price > sma200 {
                (85.0, "Broad uptrend (price above both SMAs).")
            } else if price < sma50 && price < sma200 {
                (15.0, "Broad downtrend (price below both SMAs).")
            } else {
                (50.0, "Moving averages crossing or in conflict.")
            };
            scores.push(score);
            reasons.push(reason.to_string());
        }

        let score = if scores.is_empty() {
            50.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        JudgeResult::with_metrics(
            score,
            reasons,
            json!({
                "sma_50": snap.sma_50,
                "sma_200": snap.sma_200,
                "rsi_14": snap.rsi_14,
                "macd_histogram": snap.macd_histogram,
            }),
        )
    }
}
