//! Profile-driven recommendation pipeline.
//!
//! Budget filter first, then concern scoring, then a stable descending sort.
//! Products that clear the budget but score zero stay eligible - with no
//! concern signal the catalog order is the recommendation order.

use incimatch_core::{parse_price, Product, Profile};
use serde::Serialize;

use crate::concern::{ConcernKeywords, ConcernScore, ConcernScorer};

/// A product with its relevance score for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProduct {
    /// Row position in the catalog slice the recommendation ran over.
    pub index: usize,
    pub product: Product,
    pub score: ConcernScore,
}

pub struct Recommender {
    scorer: ConcernScorer,
}

impl Recommender {
    #[must_use]
    pub fn new(keywords: ConcernKeywords) -> Self {
        Self {
            scorer: ConcernScorer::new(keywords),
        }
    }

    #[must_use]
    pub fn scorer(&self) -> &ConcernScorer {
        &self.scorer
    }

    /// Indices of products whose numeric price fits the budget.
    ///
    /// Prices that cannot be parsed exclude the row; they never error.
    #[must_use]
    pub fn within_budget(products: &[Product], budget: f64) -> Vec<usize> {
        products
            .iter()
            .enumerate()
            .filter(|(_, product)| {
                parse_price(&product.price)
                    .map(|price| price <= budget)
                    .unwrap_or(false)
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Top-K products for the profile.
    ///
    /// The budget filter runs upstream of scoring; survivors are scored,
    /// sorted descending (stable, catalog order breaks ties) and truncated.
    #[must_use]
    pub fn recommend(
        &self,
        products: &[Product],
        profile: &Profile,
        top_k: usize,
    ) -> Vec<ScoredProduct> {
        let mut scored: Vec<ScoredProduct> = Self::within_budget(products, profile.budget)
            .into_iter()
            .map(|index| {
                let product = &products[index];
                ScoredProduct {
                    index,
                    product: product.clone(),
                    score: self.scorer.score_explained(product, profile),
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total.cmp(&a.score.total));
        scored.truncate(top_k);
        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(ConcernKeywords::common())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incimatch_core::{IngredientSet, SkinType};

    fn product(name: &str, product_type: &str, price: &str) -> Product {
        Product::new(name, "Acme", product_type, price, "", IngredientSet::new())
    }

    fn profile(concerns: &[&str], budget: f64) -> Profile {
        Profile {
            skin_type: SkinType::Normal,
            concerns: concerns.iter().map(|c| c.to_string()).collect(),
            budget,
            ..Profile::default()
        }
    }

    #[test]
    fn test_budget_filter_boundaries() {
        let products = vec![product("Cream", "cream", "£45.00")];
        assert!(Recommender::within_budget(&products, 40.0).is_empty());
        assert_eq!(Recommender::within_budget(&products, 50.0), vec![0]);
        // Equal price is within budget.
        assert_eq!(Recommender::within_budget(&products, 45.0), vec![0]);
    }

    #[test]
    fn test_unparseable_price_is_excluded_not_fatal() {
        let products = vec![
            product("Priced", "cream", "£10.00"),
            product("Unpriced", "cream", "contact us"),
        ];
        assert_eq!(Recommender::within_budget(&products, 100.0), vec![0]);
    }

    #[test]
    fn test_recommend_orders_by_score() {
        let recommender = Recommender::default();
        let products = vec![
            product("Plain Lotion", "lotion", "£8.00"),
            product("Salicylic Acne Gel", "gel", "£9.00"),
            product("Clarifying Toner", "toner", "£7.00"),
        ];
        let results = recommender.recommend(&products, &profile(&["acne"], 25.0), 5);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].product.name, "Salicylic Acne Gel");
        assert_eq!(results[1].product.name, "Clarifying Toner");
        // Zero-score product still present, last.
        assert_eq!(results[2].score.total, 0);
    }

    #[test]
    fn test_recommend_truncates_and_respects_budget() {
        let recommender = Recommender::default();
        let products = vec![
            product("A", "cream", "£10.00"),
            product("B", "cream", "£90.00"),
            product("C", "cream", "£12.00"),
            product("D", "cream", "£14.00"),
        ];
        let results = recommender.recommend(&products, &profile(&[], 20.0), 2);
        assert_eq!(results.len(), 2);
        // Ties at zero keep catalog order; the over-budget B never appears.
        assert_eq!(results[0].product.name, "A");
        assert_eq!(results[1].product.name, "C");
    }

    #[test]
    fn test_scored_product_serializes() {
        let recommender = Recommender::default();
        let products = vec![product("Acne Wash", "cleanser", "£5.00")];
        let results = recommender.recommend(&products, &profile(&["acne"], 25.0), 1);
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"total\""));
        assert!(json.contains("\"by_concern\""));
    }
}
