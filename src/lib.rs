//! # incimatch
//!
//! An ingredient-matching and recommendation engine for cosmetic products.
//!
//! incimatch parses free-text INCI ingredient lists, resolves each
//! ingredient against a reference dictionary (with built-in fallback
//! knowledge for ubiquitous entries), ranks catalog products by
//! ingredient-set Jaccard similarity, and scores products against a
//! session skin profile.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use incimatch::prelude::*;
//!
//! // Load the catalogs (degrading to empty on failure)
//! let ingredients =
//!     IngredientCatalog::load_or_empty("data/ingredients_dict.csv", FallbackTable::common());
//! let products = ProductCatalog::load_or_empty("data/products.csv");
//!
//! // Analyze a pasted label
//! let report = analyze(&ingredients, "Aqua, Glycerin, Niacinamide, Parfum");
//! println!("coverage: {:.0}%", report.coverage_percent());
//!
//! // Rank products by ingredient similarity
//! let tokens = parse_ingredient_list("Aqua, Glycerin, Niacinamide, Parfum");
//! let matches = rank(&query_set(&tokens), products.products(), 5);
//!
//! // Recommend for a saved profile
//! let profile = Profile { concerns: vec!["acne".into()], ..Profile::default() };
//! let picks = Recommender::default().recommend(products.products(), &profile, 5);
//! ```
//!
//! ## Crate Structure
//!
//! - `incimatch-core` - normalization, similarity ranking, products, profiles
//! - `incimatch-catalog` - CSV-backed catalogs, TTL cache, analysis, stats
//! - `incimatch-recommend` - concern keyword scoring and recommendations

// Re-export core types
pub use incimatch_core::{
    jaccard, parse_ingredient_set, parse_price, query_set, rank, AgeGroup, Climate, Error, Filter,
    FragrancePreference, IngredientInfo, IngredientSet, Product, ProductFilter, Profile,
    ProfileSession, RankedMatch, Result, Sensitivity, SkinType, SunExposure, BUDGET_DEFAULT_CHF,
    BUDGET_MAX_CHF, BUDGET_MIN_CHF, MAX_CONCERNS,
};

pub use incimatch_core::normalize::{canonical_token, parse_ingredient_list};

// Re-export catalogs
pub use incimatch_catalog::{
    analyze, AnalyzedIngredient, CachedCatalog, CatalogStats, FallbackTable, IngredientAnalysis,
    IngredientCatalog, IngredientCount, ProductCatalog, DEFAULT_TTL,
};

// Re-export recommendation
pub use incimatch_recommend::{
    ConcernKeywords, ConcernScore, ConcernScorer, RecommendStats, Recommender, ScoredProduct,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analyze, canonical_token, jaccard, parse_ingredient_list, parse_price, query_set, rank,
        CachedCatalog, CatalogStats, ConcernKeywords, ConcernScorer, Error, FallbackTable, Filter,
        IngredientCatalog, IngredientInfo, IngredientSet, Product, ProductCatalog, ProductFilter,
        Profile, ProfileSession, RankedMatch, RecommendStats, Recommender, Result, ScoredProduct,
        SkinType,
    };
}
