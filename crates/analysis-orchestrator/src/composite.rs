use analysis_core::JudgeKind;

/// Weighted blend of the judge scores.
///
/// Scores are clamped to [0, 100] before weighting; weights come from
/// `JudgeKind::weight` and sum to 1.0, so the blend is a convex combination
/// and stays in range. Rounded to two decimals.
pub fn base_probability(scores: &[(JudgeKind, f64)]) -> f64 {
    let blended: f64 = scores
        .iter()
        .map(|(kind, score)| score.clamp(0.0, 100.0) * kind.weight())
        .sum();
    ((blended * 100.0).round() / 100.0).clamp(0.0, 100.0)
}
