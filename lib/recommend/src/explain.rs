//! Summary statistics for a recommendation run.

use serde::Serialize;

use crate::recommend::ScoredProduct;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendStats {
    /// Products that cleared the budget filter.
    pub candidates_count: usize,
    pub results_count: usize,
    pub best_score: u32,
    pub avg_score: f32,
    /// Concern contributing most points to the best result, if any scored.
    pub top_concern: Option<String>,
}

impl RecommendStats {
    #[must_use]
    pub fn compute(results: &[ScoredProduct], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                best_score: 0,
                avg_score: 0.0,
                top_concern: None,
            };
        }

        let total: u32 = results.iter().map(|r| r.score.total).sum();
        let best = &results[0]; // results are sorted descending

        let top_concern = best
            .score
            .by_concern
            .iter()
            .filter(|(_, points)| **points > 0)
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(concern, _)| concern.clone());

        Self {
            candidates_count,
            results_count: results.len(),
            best_score: best.score.total,
            avg_score: total as f32 / results.len() as f32,
            top_concern,
        }
    }
}
