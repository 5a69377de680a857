use thiserror::Error;

/// Faults raised at internal boundaries of the pipeline.
///
/// None of these escape `analyze`: the owning component catches them and
/// substitutes a degraded value (empty trends, absent snapshot), so a bad
/// slice of data never aborts the rest of the run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
