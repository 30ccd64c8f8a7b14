//! Product inventory backed by a tabular CSV source.
//!
//! Each row becomes a [`Product`] whose serialized ingredient list is decoded
//! once at load time. The decode is per-row total: a malformed list literal
//! gives that product an empty ingredient set, an unreadable row is skipped,
//! and neither aborts the load.

use std::path::Path;

use csv::ReaderBuilder;
use incimatch_core::{parse_ingredient_set, Error, Filter, Product, Result};
use tracing::{error, warn};

pub struct ProductCatalog {
    /// Products in source row order; a product's identity is its position.
    products: Vec<Product>,
}

impl ProductCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog from already-parsed products (in-memory hosts, tests).
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load the product inventory from a CSV file.
    ///
    /// Headers are matched case-insensitively. Every column is optional and
    /// defaults to empty so partially scraped sources still load; a missing
    /// `clean_ingreds` column just means empty ingredient sets throughout.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())
            .map_err(|e| Error::CatalogLoad(e.to_string()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::CatalogLoad(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let name_col = column("product_name");
        let brand_col = column("brand_name");
        let type_col = column("product_type");
        let price_col = column("price");
        let url_col = column("product_url");
        let ingreds_col = column("clean_ingreds");

        let mut products = Vec::new();
        for (row_idx, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(row = row_idx, error = %e, "skipping unreadable product row");
                    continue;
                }
            };
            let field =
                |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("").trim().to_string();

            let ingredients = ingreds_col
                .and_then(|i| row.get(i))
                .map(parse_ingredient_set)
                .unwrap_or_default();

            products.push(Product::new(
                field(name_col),
                field(brand_col),
                field(type_col),
                field(price_col),
                field(url_col),
                ingredients,
            ));
        }

        Ok(Self { products })
    }

    /// Load, degrading to an empty catalog on failure (reported once here).
    #[must_use]
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path = %path.as_ref().display(), error = %e, "product catalog unavailable");
                Self::empty()
            }
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products passing a browse filter, in catalog order.
    pub fn filter<F: Filter>(&self, filter: &F) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}
