// Browse filter for narrowing product listings
use crate::product::Product;

pub trait Filter {
    fn matches(&self, product: &Product) -> bool;
}

/// Catalog browse filter. All set conditions must hold (AND).
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact brand name, compared case-insensitively.
    pub brand: Option<String>,
    /// Exact product type, compared case-insensitively.
    pub product_type: Option<String>,
    /// Case-insensitive substring of the product name.
    pub name_contains: Option<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    #[must_use]
    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }
}

impl Filter for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(brand) = &self.brand {
            if !product.brand.eq_ignore_ascii_case(brand) {
                return false;
            }
        }
        if let Some(product_type) = &self.product_type {
            if !product.product_type.eq_ignore_ascii_case(product_type) {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            let haystack = product.name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::IngredientSet;

    fn product(name: &str, brand: &str, product_type: &str) -> Product {
        Product::new(name, brand, product_type, "£10.00", "", IngredientSet::new())
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::new();
        assert!(filter.matches(&product("Toner", "Acme", "toner")));
    }

    #[test]
    fn test_brand_filter_is_case_insensitive() {
        let filter = ProductFilter::new().brand("acme");
        assert!(filter.matches(&product("Toner", "ACME", "toner")));
        assert!(!filter.matches(&product("Toner", "Other", "toner")));
    }

    #[test]
    fn test_name_search_substring() {
        let filter = ProductFilter::new().name_contains("vitamin");
        assert!(filter.matches(&product("Vitamin C Serum", "Acme", "serum")));
        assert!(!filter.matches(&product("Night Cream", "Acme", "cream")));
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let filter = ProductFilter::new().brand("Acme").product_type("serum");
        assert!(filter.matches(&product("Serum", "Acme", "Serum")));
        assert!(!filter.matches(&product("Serum", "Acme", "cream")));
    }
}
