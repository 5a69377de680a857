use analysis_core::{AnalysisError, Bar, TechnicalSnapshot};

use crate::indicators::{macd, rsi, sma};

/// Minimum bars before any indicator is attempted
pub const MIN_BARS: usize = 26;

/// Latest indicator values over a chronological price series.
///
/// Errors below `MIN_BARS`; the orchestrator degrades that to "no technical
/// data". Above the floor, each indicator is individually absent until its
/// own warm-up is met (SMA-200 needs 200 bars, the others much less).
pub fn snapshot(bars: &[Bar]) -> Result<TechnicalSnapshot, AnalysisError> {
    if bars.len() < MIN_BARS {
        return Err(AnalysisError::InsufficientData(format!(
            "need at least {MIN_BARS} bars for technical indicators, got {}",
            bars.len()
        )));
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    Ok(TechnicalSnapshot {
        sma_50: sma(&closes, 50).last().copied(),
        sma_200: sma(&closes, 200).last().copied(),
        rsi_14: rsi(&closes, 14).last().copied(),
        macd_histogram: macd(&closes, 12, 26, 9).histogram.last().copied(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn bars(closes: &[f64]) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                timestamp: start + Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000_000.0,
            })
            .collect()
    }

    #[test]
    fn below_minimum_bars_is_an_error() {
        let series: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        assert!(snapshot(&bars(&series)).is_err());
    }

    #[test]
    fn short_history_omits_long_averages() {
        let series: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let snap = snapshot(&bars(&series)).unwrap();
        assert!(snap.sma_50.is_none());
        assert!(snap.sma_200.is_none());
        assert!(snap.rsi_14.is_some());
        assert!(snap.macd_histogram.is_some());
    }

    #[test]
    fn long_history_fills_everything() {
        let series: Vec<f64> = (0..250).map(|i| 100.0 + (i % 20) as f64).collect();
        let snap = snapshot(&bars(&series)).unwrap();
        assert!(snap.sma_50.is_some());
        assert!(snap.sma_200.is_some());
        assert!(snap.rsi_14.is_some());
        assert!(snap.macd_histogram.is_some());
    }

    #[test]
    fn rsi_is_high_in_a_relentless_uptrend() {
        let series: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let snap = snapshot(&bars(&series)).unwrap();
        assert!(snap.rsi_14.unwrap() > 70.0);
        assert!(snap.macd_histogram.unwrap() > 0.0);
    }
}
