//! Catalog-wide statistics.

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use crate::products::ProductCatalog;

#[derive(Debug, Clone, Serialize)]
pub struct IngredientCount {
    pub name: String,
    pub count: usize,
}

/// Summary numbers over the product inventory.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub unique_brands: usize,
    pub unique_types: usize,
    pub unique_ingredients: usize,
    /// Sum of ingredient-set sizes across all products.
    pub total_ingredient_mentions: usize,
    pub avg_ingredients_per_product: f32,
    /// Most frequent ingredients, descending; name breaks frequency ties so
    /// the table is deterministic.
    pub top_ingredients: Vec<IngredientCount>,
}

impl CatalogStats {
    #[must_use]
    pub fn compute(catalog: &ProductCatalog, top_n: usize) -> Self {
        let mut brands: AHashSet<&str> = AHashSet::new();
        let mut types: AHashSet<&str> = AHashSet::new();
        let mut frequency: AHashMap<&str, usize> = AHashMap::new();
        let mut mentions = 0usize;

        for product in catalog.products() {
            if !product.brand.is_empty() {
                brands.insert(product.brand.as_str());
            }
            if !product.product_type.is_empty() {
                types.insert(product.product_type.as_str());
            }
            for ingredient in product.ingredients.iter() {
                *frequency.entry(ingredient.as_str()).or_insert(0) += 1;
                mentions += 1;
            }
        }

        let unique_ingredients = frequency.len();
        let mut top: Vec<IngredientCount> = frequency
            .into_iter()
            .map(|(name, count)| IngredientCount {
                name: name.to_string(),
                count,
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        top.truncate(top_n);

        let total_products = catalog.len();
        let avg = if total_products == 0 {
            0.0
        } else {
            mentions as f32 / total_products as f32
        };

        Self {
            total_products,
            unique_brands: brands.len(),
            unique_types: types.len(),
            unique_ingredients,
            total_ingredient_mentions: mentions,
            avg_ingredients_per_product: avg,
            top_ingredients: top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incimatch_core::{IngredientSet, Product};

    fn product(name: &str, brand: &str, ptype: &str, ingredients: &[&str]) -> Product {
        let set: IngredientSet = ingredients.iter().map(|s| s.to_string()).collect();
        Product::new(name, brand, ptype, "£10.00", "", set)
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::from_products(vec![
            product("A", "Acme", "serum", &["aqua", "glycerin"]),
            product("B", "Acme", "cream", &["aqua", "tocopherol"]),
            product("C", "Basix", "serum", &["aqua"]),
            product("D", "", "", &[]),
        ])
    }

    #[test]
    fn test_stats_counts() {
        let stats = CatalogStats::compute(&catalog(), 10);
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.unique_brands, 2);
        assert_eq!(stats.unique_types, 2);
        assert_eq!(stats.unique_ingredients, 3);
        assert_eq!(stats.total_ingredient_mentions, 5);
        assert!((stats.avg_ingredients_per_product - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_top_ingredients_ordering_and_truncation() {
        let stats = CatalogStats::compute(&catalog(), 2);
        assert_eq!(stats.top_ingredients.len(), 2);
        assert_eq!(stats.top_ingredients[0].name, "aqua");
        assert_eq!(stats.top_ingredients[0].count, 3);
        // glycerin and tocopherol tie at 1; name order decides.
        assert_eq!(stats.top_ingredients[1].name, "glycerin");
    }

    #[test]
    fn test_empty_catalog() {
        let stats = CatalogStats::compute(&ProductCatalog::empty(), 10);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.avg_ingredients_per_product, 0.0);
        assert!(stats.top_ingredients.is_empty());
    }
}
