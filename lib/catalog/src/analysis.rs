//! Ingredient list analysis.
//!
//! Resolves every token of a pasted ingredient list against the dictionary
//! and summarizes coverage. Input order is preserved; duplicates analyze as
//! separate entries, exactly as they appear on the label.

use incimatch_core::normalize::parse_ingredient_list;
use incimatch_core::IngredientInfo;
use serde::Serialize;

use crate::ingredients::IngredientCatalog;

/// One parsed token with its lookup result, `None` when unknown.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedIngredient {
    pub token: String,
    pub info: Option<IngredientInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngredientAnalysis {
    pub entries: Vec<AnalyzedIngredient>,
}

impl IngredientAnalysis {
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn found(&self) -> usize {
        self.entries.iter().filter(|e| e.info.is_some()).count()
    }

    /// Tokens the dictionary (and fallback) know nothing about.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.info.is_none())
            .map(|e| e.token.as_str())
            .collect()
    }

    /// Share of tokens resolved, as a percentage. Zero for empty input.
    #[must_use]
    pub fn coverage_percent(&self) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.found() as f32 / self.total() as f32 * 100.0
    }
}

/// Parse the text and look up every token in order.
#[must_use]
pub fn analyze(catalog: &IngredientCatalog, text: &str) -> IngredientAnalysis {
    let entries = parse_ingredient_list(text)
        .into_iter()
        .map(|token| {
            let info = catalog.lookup(&token);
            AnalyzedIngredient { token, info }
        })
        .collect();
    IngredientAnalysis { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FallbackTable;

    #[test]
    fn test_analysis_counts_and_coverage() {
        let catalog = IngredientCatalog::empty(FallbackTable::common());
        let analysis = analyze(&catalog, "Aqua, Glycerin, Niacinamide, Unobtainium");

        assert_eq!(analysis.total(), 4);
        assert_eq!(analysis.found(), 3);
        assert_eq!(analysis.missing(), vec!["unobtainium"]);
        assert!((analysis.coverage_percent() - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_analysis_preserves_input_order() {
        let catalog = IngredientCatalog::empty(FallbackTable::common());
        let analysis = analyze(&catalog, "parfum; aqua");
        let tokens: Vec<&str> = analysis.entries.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["parfum", "aqua"]);
    }

    #[test]
    fn test_empty_input_yields_empty_analysis() {
        let catalog = IngredientCatalog::empty(FallbackTable::common());
        let analysis = analyze(&catalog, "");
        assert_eq!(analysis.total(), 0);
        assert_eq!(analysis.coverage_percent(), 0.0);
    }
}
