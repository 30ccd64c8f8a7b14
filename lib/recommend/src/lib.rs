//! # incimatch Recommend
//!
//! Profile-driven product recommendation on top of the incimatch core.
//!
//! **How it works:**
//! 1. The host saves a session [`Profile`](incimatch_core::Profile)
//! 2. The budget filter drops products the profile cannot afford
//! 3. [`ConcernScorer`] awards keyword points per selected concern
//! 4. Results come back sorted, with per-concern explanations
//!
//! The concern -> keyword mapping is configuration, not logic: build a
//! [`ConcernKeywords`] (or take [`ConcernKeywords::common`]) and hand it to
//! the [`Recommender`].
//!
//! ```rust
//! use incimatch_core::{IngredientSet, Product, Profile, SkinType};
//! use incimatch_recommend::Recommender;
//!
//! let catalog = vec![Product::new(
//!     "Salicylic Acne Gel", "Acme", "gel", "£9.00", "", IngredientSet::new(),
//! )];
//! let profile = Profile {
//!     skin_type: SkinType::Oily,
//!     concerns: vec!["acne".to_string()],
//!     budget: 25.0,
//!     ..Profile::default()
//! };
//!
//! let results = Recommender::default().recommend(&catalog, &profile, 5);
//! assert_eq!(results[0].score.total, 4);
//! ```

pub mod concern;
pub mod explain;
pub mod recommend;

pub use concern::{
    ConcernKeywords, ConcernScore, ConcernScorer, POINTS_PER_KEYWORD, SKIN_TYPE_BONUS,
};
pub use explain::RecommendStats;
pub use recommend::{Recommender, ScoredProduct};
