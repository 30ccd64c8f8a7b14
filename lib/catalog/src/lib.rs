//! # incimatch Catalog
//!
//! CSV-backed catalogs for the incimatch engine:
//!
//! - [`IngredientCatalog`] - reference dictionary with an exact / partial /
//!   fallback lookup cascade
//! - [`FallbackTable`] - injectable knowledge for ubiquitous ingredients
//! - [`ProductCatalog`] - product inventory with per-row tolerant decode
//! - [`CachedCatalog`] - process-wide TTL cache with explicit
//!   `invalidate()` / `reload()`
//! - [`analyze`] - per-token dictionary resolution of a pasted list
//! - [`CatalogStats`] - inventory-wide summary numbers
//!
//! Load failures degrade to empty catalogs with a logged diagnostic; the
//! per-lookup and per-query paths never fail.

pub mod analysis;
pub mod cache;
pub mod fallback;
pub mod ingredients;
pub mod products;
pub mod stats;

pub use analysis::{analyze, AnalyzedIngredient, IngredientAnalysis};
pub use cache::{CachedCatalog, DEFAULT_TTL};
pub use fallback::FallbackTable;
pub use ingredients::IngredientCatalog;
pub use products::ProductCatalog;
pub use stats::{CatalogStats, IngredientCount};
