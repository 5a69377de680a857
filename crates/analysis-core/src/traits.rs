use crate::{CompanyProfile, JudgeKind, JudgeResult, TechnicalSnapshot, TrendSignals};

/// Borrowed view of everything a judge may read.
///
/// Each judge consumes a narrow slice of this; the slices are disjoint and
/// nothing here is mutated during a run.
#[derive(Debug, Clone, Copy)]
pub struct JudgeContext<'a> {
    pub profile: &'a CompanyProfile,
    pub trends: &'a TrendSignals,
    pub technical: Option<&'a TechnicalSnapshot>,
    /// Trailing twelve-month dividend yield, percent
    pub dividend_yield_pct: Option<f64>,
    /// Dividend CAGR over completed calendar years, percent
    pub dividend_growth_pct: Option<f64>,
}

/// Contract shared by all scoring judges: one evidence slice in, a bounded
/// score plus explanation out.
pub trait Judge {
    fn kind(&self) -> JudgeKind;
    fn evaluate(&self, ctx: &JudgeContext<'_>) -> JudgeResult;
}
