use analysis_core::config;
use analysis_core::{PenaltyEntry, TrendSignals};

/// Adaptive penalty cascade over the trend signals.
///
/// Rules run in a fixed order and each contributes a multiplicative factor;
/// within the mature-dividend tier list the first match wins, so the
/// recorded reason is deterministic even when several tiers would apply.
/// Absent signals skip their rule. The combined factor never drops below
/// `config::PENALTY_FLOOR` no matter how many rules fire.
pub fn evaluate(
    trends: &TrendSignals,
    sector: &str,
    dividend_growth_pct: Option<f64>,
) -> (f64, Vec<PenaltyEntry>) {
    let mut factor = 1.0;
    let mut entries: Vec<PenaltyEntry> = Vec::new();

    if trends.loss_years >= config::LOSS_YEARS_THRESHOLD {
        let rule = &config::PENALTY_LOSS_YEARS;
        apply(
            &mut entries,
            &mut factor,
            "Earnings",
            rule.reason.to_string(),
            rule.factor,
        );
    }

    if trends.negative_fcf_years >= config::NEGATIVE_FCF_THRESHOLD {
        let rule = &config::PENALTY_NEGATIVE_FCF;
        apply(
            &mut entries,
            &mut factor,
            "FCF",
            rule.reason.to_string(),
            rule.factor,
        );
    }

    if !config::is_cyclic_sector(sector) {
        if let Some(growth) = dividend_growth_pct {
            if trends.consecutive_dividend_years >= config::MATURE_DIVIDEND_YEARS {
                for (threshold, rule) in &config::PENALTY_MATURE_DIVIDEND {
                    if growth < *threshold {
                        apply(
                            &mut entries,
                            &mut factor,
                            "Dividend Growth",
                            rule.reason.to_string(),
                            rule.factor,
                        );
                        break;
                    }
                }
            } else if growth < config::YOUNG_DIVIDEND_DECLINE_PCT {
                let years = trends.consecutive_dividend_years;
                apply(
                    &mut entries,
                    &mut factor,
                    "Dividend Growth",
                    format!("Young dividend ({years} years) with negative growth (moderate)."),
                    config::PENALTY_YOUNG_DIVIDEND_FACTOR,
                );
            }
        }
    }

    if trends.revenue_cagr.unwrap_or(1.0) < 0.0 {
        let rule = &config::PENALTY_NEGATIVE_REVENUE;
        apply(
            &mut entries,
            &mut factor,
            "Revenue",
            rule.reason.to_string(),
            rule.factor,
        );
    }

    if trends.avg_roe.unwrap_or(1.0) < config::ROE_ACCEPTABLE {
        let rule = &config::PENALTY_LOW_ROE;
        apply(
            &mut entries,
            &mut factor,
            "ROE",
            rule.reason.to_string(),
            rule.factor,
        );
    }

    if trends.debt_increasing == Some(true) {
        let rule = &config::PENALTY_RISING_DEBT;
        apply(
            &mut entries,
            &mut factor,
            "Debt",
            rule.reason.to_string(),
            rule.factor,
        );
    }

    (factor.max(config::PENALTY_FLOOR), entries)
}

fn apply(
    entries: &mut Vec<PenaltyEntry>,
    factor: &mut f64,
    label: &str,
    reason: String,
    rule_factor: f64,
) {
    *factor *= rule_factor;
    entries.push(PenaltyEntry {
        label: label.to_string(),
        reason,
        factor: rule_factor,
    });
}
