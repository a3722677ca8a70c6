use serde::Serialize;

/// Linear scoring for global alignment.
///
/// Every aligned column is rewarded with `match_score` or `mismatch_score`,
/// every symbol aligned against nothing costs one `gap`. Scores are real
/// numbers and no sign constraint is enforced on any of the three values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringScheme {
    pub match_score: f64,
    pub mismatch_score: f64,
    pub gap: f64,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1.0,
            mismatch_score: -1.0,
            gap: -2.0,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: f64, mismatch_score: f64, gap: f64) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// Score of aligning `a` against `b`.
    #[inline]
    pub fn pair(&self, a: char, b: char) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}
