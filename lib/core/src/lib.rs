//! # incimatch Core
//!
//! Core library for the incimatch ingredient-matching engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`normalize`] - Tokenization and canonicalization of ingredient text
//! - [`IngredientInfo`] - Descriptive record for a single ingredient
//! - [`Product`] - A catalog product with its normalized ingredient set
//! - [`Profile`] - Session-scoped skin profile with save validation
//! - [`similarity`] - Jaccard set similarity and top-K product ranking
//! - [`ProductFilter`] - Browse filter for product listings
//!
//! ## Example
//!
//! ```rust
//! use incimatch_core::normalize::parse_ingredient_list;
//! use incimatch_core::similarity::{query_set, rank};
//! use incimatch_core::{IngredientSet, Product};
//!
//! let tokens = parse_ingredient_list("Aqua, Glycerin, Niacinamide, Parfum");
//! let query = query_set(&tokens);
//!
//! let ingredients: IngredientSet =
//!     ["aqua", "glycerin", "tocopherol"].iter().map(|s| s.to_string()).collect();
//! let catalog = vec![Product::new("Day Cream", "Acme", "moisturiser", "£12.00", "", ingredients)];
//!
//! let matches = rank(&query, &catalog, 5);
//! assert!((matches[0].score - 0.4).abs() < 1e-6);
//! ```

pub mod error;
pub mod filter;
pub mod ingredient;
pub mod normalize;
pub mod product;
pub mod profile;
pub mod similarity;

pub use error::{Error, Result};
pub use filter::{Filter, ProductFilter};
pub use ingredient::IngredientInfo;
pub use product::{parse_ingredient_set, parse_price, IngredientSet, Product};
pub use profile::{
    AgeGroup, Climate, FragrancePreference, Profile, ProfileSession, Sensitivity, SkinType,
    SunExposure, BUDGET_DEFAULT_CHF, BUDGET_MAX_CHF, BUDGET_MIN_CHF, MAX_CONCERNS,
};
pub use similarity::{jaccard, query_set, rank, RankedMatch};
