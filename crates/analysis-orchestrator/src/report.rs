//! Text rendering of an `AnalysisResult`. Pure string assembly; nothing
//! here touches the terminal, the core stays free of I/O.

use std::fmt::Write;

use analysis_core::config::{self, ROE_GOOD, RSI_OVERSOLD};
use analysis_core::{AnalysisResult, CompanyProfile, JudgeKind};

const RULE: &str = "======================================================================";
const SUMMARY_MAX_CHARS: usize = 800;

/// Trend-based risk bands derived from the penalty factor
pub fn risk_level(penalty_factor: f64) -> (&'static str, &'static str) {
    if penalty_factor >= 0.98 {
        ("Low", "[+]")
    } else if penalty_factor >= 0.92 {
        ("Moderate", "[!]")
    } else if penalty_factor >= 0.85 {
        ("High", "[!!]")
    } else {
        ("Critical", "[!!!]")
    }
}

/// Automatic recommendation from the adjusted score and the risk band
pub fn recommendation(profile: &CompanyProfile, analysis: &AnalysisResult) -> &'static str {
    let (risk, _) = risk_level(analysis.penalty_factor);
    let score = analysis.adjusted_probability;

    if config::is_cyclic_sector(&profile.sector) && score >= 60.0 {
        return "CYCLICAL BUY: good point in the cycle.";
    }
    if score >= 80.0 && risk == "Low" {
        "STRONG BUY: ideal profile for the strategy."
    } else if (70.0..80.0).contains(&score) && (risk == "Low" || risk == "Moderate") {
        "POTENTIAL BUY: needs further analysis."
    } else if (55.0..70.0).contains(&score) {
        "WATCH ZONE: do not buy yet, track the trend."
    } else {
        "DISCARD: does not meet the investment criteria."
    }
}

fn strengths(profile: &CompanyProfile, analysis: &AnalysisResult) -> Vec<String> {
    let thresholds = config::thresholds_for(&profile.sector);
    let mut found = Vec::new();

    if let Some(pe) = profile.trailing_pe {
        if pe > 0.0 && pe < thresholds.pe_low {
            found.push("Attractive valuation (low P/E).".to_string());
        }
    }
    if let Some(roe) = profile.return_on_equity {
        if roe > ROE_GOOD {
            found.push(format!(
                "Excellent profitability (ROE > {:.0}%).",
                ROE_GOOD * 100.0
            ));
        }
    }
    if analysis.dividend_yield.score > 80.0 {
        found.push("Very attractive dividend yield.".to_string());
    }
    if analysis.dividend_growth.score > 80.0 {
        found.push("Strong dividend growth.".to_string());
    }
    if let Some(payout) = profile.payout_ratio {
        if payout > 0.0 && payout < 0.6 {
            found.push("Sustainable dividend (low payout ratio).".to_string());
        }
    }
    if let Some(rsi) = analysis.indicators.as_ref().and_then(|i| i.rsi_14) {
        if rsi < RSI_OVERSOLD {
            found.push(format!(
                "Technical timing: stock oversold (RSI < {RSI_OVERSOLD:.0})."
            ));
        }
    }
    found
}

fn truncated_summary(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary.to_string();
    }
    let cut: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    let cut = match cut.rfind(' ') {
        Some(i) => &cut[..i],
        None => cut.as_str(),
    };
    format!("{cut}...")
}

/// Render the full text report for one analysis run
pub fn render_report(profile: &CompanyProfile, analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let name = profile.name.as_deref().unwrap_or("Unknown");
    let (risk, risk_icon) = risk_level(analysis.penalty_factor);

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  ANALYSIS REPORT FOR: {} ({})", name, analysis.symbol);
    let _ = writeln!(
        out,
        "  Sector: {} | Current Price: ${:.2}",
        profile.sector, profile.current_price
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "[+] OVERALL SCORE: {:.2} / 100.00",
        analysis.adjusted_probability
    );
    let _ = writeln!(
        out,
        "    AUTOMATIC RECOMMENDATION: {}",
        recommendation(profile, analysis)
    );
    let _ = writeln!(out, " *  Trend-Based Risk Level: {risk_icon} {risk}");
    if analysis.penalty_factor < 1.0 {
        let _ = writeln!(
            out,
            "   (Base score: {:.2}, adjusted by a factor of x{:.2})",
            analysis.base_probability, analysis.penalty_factor
        );
        if !analysis.penalties.is_empty() {
            let _ = writeln!(out, "   Applied penalties:");
            for entry in &analysis.penalties {
                let _ = writeln!(out, "     - {}", entry.reason);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "============================ COMPANY PROFILE =========================");
    let _ = writeln!(
        out,
        "{}",
        profile
            .summary
            .as_deref()
            .map(truncated_summary)
            .unwrap_or_else(|| "No business summary available.".to_string())
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "============================ SCORE BREAKDOWN =========================");
    for kind in JudgeKind::ALL {
        let judge = analysis.judge(kind);
        let _ = writeln!(
            out,
            "  - {:<29} {:>5.1} / 100  (Weight: {:.0}%)",
            kind.label(),
            judge.score,
            kind.weight() * 100.0
        );
        for reason in &judge.reasons {
            let _ = writeln!(out, "      - {reason}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "========================= CONCLUSIONS AND SCOPE ======================");
    let strong_points = strengths(profile, analysis);
    if strong_points.is_empty() && analysis.penalties.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Neutral analysis, no particularly notable metrics.");
    } else {
        if !strong_points.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "[+] STRENGTHS:");
            for point in &strong_points {
                let _ = writeln!(out, "  - {point}");
            }
        }
        if !analysis.penalties.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "[!] WEAKNESSES AND RED FLAGS (trend-based):");
            for entry in &analysis.penalties {
                let _ = writeln!(out, "  - {}", entry.reason);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "NOTE: This is an automated analysis. Use it as a starting point for your own research."
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands() {
        assert_eq!(risk_level(1.0).0, "Low");
        assert_eq!(risk_level(0.95).0, "Moderate");
        assert_eq!(risk_level(0.90).0, "High");
        assert_eq!(risk_level(0.70).0, "Critical");
    }

    #[test]
    fn summary_is_cut_at_a_word_boundary() {
        let long = "lorem ipsum dolor sit amet ".repeat(50);
        let cut = truncated_summary(&long);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= SUMMARY_MAX_CHARS + 3);
        // The character before the ellipsis is the end of a whole word.
        let before = cut.trim_end_matches("...");
        assert!(long.split_whitespace().any(|w| before.ends_with(w)));

        let short = "A short summary.";
        assert_eq!(truncated_summary(short), short);
    }
}
