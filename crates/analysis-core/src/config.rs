//! Immutable configuration tables: sector-aware fundamental thresholds,
//! the cyclic-sector list and the adaptive penalty factors.
//!
//! Everything here is fixed at compile time and never mutated; the judge
//! weights live on `JudgeKind::weight`.

/// Sectors with inherently volatile earnings, exempt from dividend-growth
/// scoring and penalties.
pub const CYCLIC_SECTORS: [&str; 4] = [
    "Energy",
    "Basic Materials",
    "Industrials",
    "Consumer Cyclical",
];

pub fn is_cyclic_sector(sector: &str) -> bool {
    CYCLIC_SECTORS.contains(&sector)
}

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// ROE above this is excellent
pub const ROE_GOOD: f64 = 0.15;
/// ROE above this is acceptable; below it the penalty engine discounts
pub const ROE_ACCEPTABLE: f64 = 0.10;

/// Valuation thresholds tuned per sector
#[derive(Debug, Clone, Copy)]
pub struct SectorThresholds {
    pub pe_low: f64,
    pub pe_high: f64,
    pub debt_low: f64,
    pub debt_high: f64,
    pub pb_good: f64,
    pub pb_high: f64,
    /// Highest payout ratio still considered sustainable in the sector
    pub payout_acceptable: f64,
}

pub const DEFAULT_THRESHOLDS: SectorThresholds = SectorThresholds {
    pe_low: 15.0,
    pe_high: 25.0,
    debt_low: 0.4,
    debt_high: 0.7,
    pb_good: 2.0,
    pb_high: 4.0,
    payout_acceptable: 0.8,
};

#[rustfmt::skip]
static SECTOR_THRESHOLDS: [(&str, SectorThresholds); 11] = [
    ("Technology",             SectorThresholds { pe_low: 20.0, pe_high: 40.0, debt_low: 0.5, debt_high: 1.0, pb_good: 5.0, pb_high: 10.0, payout_acceptable: 0.8 }),
    ("Financial Services",     SectorThresholds { pe_low:  8.0, pe_high: 15.0, debt_low: 1.0, debt_high: 2.5, pb_good: 1.0, pb_high:  1.5, payout_acceptable: 0.8 }),
    ("Healthcare",             SectorThresholds { pe_low: 18.0, pe_high: 30.0, debt_low: 0.4, debt_high: 0.8, pb_good: 4.0, pb_high:  7.0, payout_acceptable: 0.8 }),
    ("Utilities",              SectorThresholds { pe_low: 15.0, pe_high: 25.0, debt_low: 1.0, debt_high: 2.0, pb_good: 1.5, pb_high:  2.5, payout_acceptable: 0.85 }),
    ("Energy",                 SectorThresholds { pe_low:  5.0, pe_high: 12.0, debt_low: 0.3, debt_high: 1.0, pb_good: 1.0, pb_high:  2.0, payout_acceptable: 0.8 }),
    ("Basic Materials",        SectorThresholds { pe_low: 10.0, pe_high: 20.0, debt_low: 0.3, debt_high: 0.7, pb_good: 1.5, pb_high:  3.0, payout_acceptable: 0.8 }),
    ("Industrials",            SectorThresholds { pe_low: 15.0, pe_high: 25.0, debt_low: 0.5, debt_high: 1.0, pb_good: 2.0, pb_high:  4.0, payout_acceptable: 0.8 }),
    ("Consumer Cyclical",      SectorThresholds { pe_low: 15.0, pe_high: 25.0, debt_low: 0.4, debt_high: 0.8, pb_good: 2.5, pb_high:  5.0, payout_acceptable: 0.8 }),
    ("Consumer Defensive",     SectorThresholds { pe_low: 15.0, pe_high: 25.0, debt_low: 0.4, debt_high: 0.7, pb_good: 2.5, pb_high:  5.0, payout_acceptable: 0.8 }),
    ("Real Estate",            SectorThresholds { pe_low: 15.0, pe_high: 30.0, debt_low: 0.6, debt_high: 1.5, pb_good: 1.0, pb_high:  2.0, payout_acceptable: 0.90 }),
    ("Communication Services", SectorThresholds { pe_low: 15.0, pe_high: 25.0, debt_low: 0.5, debt_high: 1.5, pb_good: 2.0, pb_high:  4.0, payout_acceptable: 0.8 }),
];

/// Threshold lookup by sector name; unknown sectors use the default bucket.
pub fn thresholds_for(sector: &str) -> &'static SectorThresholds {
    SECTOR_THRESHOLDS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, t)| t)
        .unwrap_or(&DEFAULT_THRESHOLDS)
}

/// One rule of the adaptive penalty cascade
#[derive(Debug, Clone, Copy)]
pub struct PenaltyRule {
    pub factor: f64,
    pub reason: &'static str,
}

pub const PENALTY_LOSS_YEARS: PenaltyRule = PenaltyRule {
    factor: 0.80,
    reason: "Net losses in 2 or more of the last 5 years (critical).",
};

pub const PENALTY_NEGATIVE_FCF: PenaltyRule = PenaltyRule {
    factor: 0.90,
    reason: "Negative free cash flow in 2 or more of the last 5 years (severe).",
};

/// Mature dividend payers: checked top to bottom against the dividend CAGR
/// in percent; the first rule whose threshold exceeds the growth applies.
pub const PENALTY_MATURE_DIVIDEND: [(f64, PenaltyRule); 2] = [
    (
        -1.0,
        PenaltyRule {
            factor: 0.85,
            reason: "Declining dividend in a mature company (severe).",
        },
    ),
    (
        1.0,
        PenaltyRule {
            factor: 0.97,
            reason: "Stagnant dividend in a mature company (mild).",
        },
    ),
];

/// Payers below `MATURE_DIVIDEND_YEARS` with growth under this get the
/// young-dividend discount.
pub const YOUNG_DIVIDEND_DECLINE_PCT: f64 = -1.0;
pub const PENALTY_YOUNG_DIVIDEND_FACTOR: f64 = 0.96;

pub const PENALTY_NEGATIVE_REVENUE: PenaltyRule = PenaltyRule {
    factor: 0.95,
    reason: "Negative revenue growth (5-year CAGR below zero) (moderate).",
};

pub const PENALTY_LOW_ROE: PenaltyRule = PenaltyRule {
    factor: 0.94,
    reason: "Low average profitability (5-year ROE below 10%) (moderate).",
};

pub const PENALTY_RISING_DEBT: PenaltyRule = PenaltyRule {
    factor: 0.95,
    reason: "Rising total debt over the last 5 years (moderate).",
};

/// Consecutive paying years at which a dividend is considered mature
pub const MATURE_DIVIDEND_YEARS: u32 = 5;
pub const LOSS_YEARS_THRESHOLD: u32 = 2;
pub const NEGATIVE_FCF_THRESHOLD: u32 = 2;

/// Hard floor for the combined penalty factor
pub const PENALTY_FLOOR: f64 = 0.65;

/// Window, in completed calendar years, for the dividend CAGR
pub const CAGR_YEARS: usize = 5;
