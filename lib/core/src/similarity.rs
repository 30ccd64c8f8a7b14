//! Ingredient-set similarity and product ranking.
//!
//! Products are ranked against a query set of canonical tokens by Jaccard
//! similarity. The ranking is deterministic: stable descending sort with
//! catalog row order as the only tie-break.

use serde::Serialize;

use crate::product::{IngredientSet, Product};

/// A product paired with its similarity score for one query.
///
/// Produced fresh per query, never persisted. `index` is the product's row
/// position in the catalog slice it was ranked from.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    pub index: usize,
    pub product: Product,
    /// Jaccard similarity in [0, 1].
    pub score: f32,
}

/// Jaccard similarity between two ingredient sets.
///
/// Defined as 0.0 when the union is empty (both sets empty), so an empty
/// product never matches anything.
#[must_use]
pub fn jaccard(a: &IngredientSet, b: &IngredientSet) -> f32 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f32 / union as f32
}

/// Build a query set from parsed canonical tokens, collapsing duplicates.
#[must_use]
pub fn query_set(tokens: &[String]) -> IngredientSet {
    tokens.iter().cloned().collect()
}

/// Rank products by ingredient-set similarity against a query set.
///
/// Every product gets a score: 0.0 when its ingredient set is empty, Jaccard
/// otherwise. Results are sorted descending; the sort is stable so equal
/// scores keep catalog order. At most `top_k` entries are returned, fewer if
/// the catalog is smaller. An empty query yields an empty result.
#[must_use]
pub fn rank(query: &IngredientSet, products: &[Product], top_k: usize) -> Vec<RankedMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f32)> = products
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let score = if product.ingredients.is_empty() {
                0.0
            } else {
                jaccard(query, &product.ingredients)
            };
            (index, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);

    scored
        .into_iter()
        .map(|(index, score)| RankedMatch {
            index,
            product: products[index].clone(),
            score,
        })
        .collect()
}
