//! Multi-year trend extraction: statement tables and dividend history in,
//! `TrendSignals` out. Everything degrades softly; a bad or missing table
//! yields default signals, never an error to the caller.

pub mod dividends;
pub mod extractor;

pub use dividends::{annual_totals, dividend_cagr_pct, trailing_yield_pct};
pub use extractor::extract_trends;
