//! Concern keyword configuration and scoring.
//!
//! The scorer is keyword-driven: each recognized concern maps to a small set
//! of stems searched for in product names and types. The mapping is
//! configuration data, not logic - it is injected into the scorer so hosts
//! and tests can substitute their own.

use ahash::AHashMap;
use incimatch_core::{Product, Profile};
use serde::Serialize;

/// Points awarded per keyword stem found in the product name or type.
pub const POINTS_PER_KEYWORD: u32 = 2;
/// Bonus awarded once when the skin type appears in the product name.
pub const SKIN_TYPE_BONUS: u32 = 1;

/// Concern -> keyword stems, keyed by lowercase concern name.
#[derive(Debug, Clone)]
pub struct ConcernKeywords {
    map: AHashMap<String, Vec<String>>,
}

impl ConcernKeywords {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    #[must_use]
    pub fn with_concern(mut self, concern: &str, stems: &[&str]) -> Self {
        self.map.insert(
            concern.to_lowercase(),
            stems.iter().map(|s| s.to_lowercase()).collect(),
        );
        self
    }

    #[must_use]
    pub fn stems(&self, concern: &str) -> Option<&[String]> {
        self.map.get(concern).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The standard keyword table.
    ///
    /// Recognizes more concerns than most hosts expose; profile concerns
    /// outside this table simply score zero.
    #[must_use]
    pub fn common() -> Self {
        Self::empty()
            .with_concern("acne", &["acne", "salicylic", "bha", "clarifying", "purifying"])
            .with_concern("aging", &["anti-aging", "retinol", "peptide", "collagen", "wrinkle"])
            .with_concern(
                "hyperpigmentation",
                &["brightening", "vitamin c", "niacinamide", "dark spot", "pigment"],
            )
            .with_concern("redness", &["calming", "soothing", "centella", "redness", "sensitive"])
            .with_concern(
                "dryness",
                &["hydrating", "moisturizing", "hyaluronic", "ceramide", "barrier"],
            )
            .with_concern("dullness", &["brightening", "glow", "vitamin c", "exfoliat", "radiance"])
            .with_concern(
                "dark circles",
                &["eye", "caffeine", "dark circle", "under-eye", "brightening"],
            )
            .with_concern("large pores", &["pore", "refining", "minimizing", "niacinamide", "aha"])
            .with_concern("oiliness", &["oil control", "mattifying", "sebum", "balancing", "clay"])
    }
}

impl Default for ConcernKeywords {
    fn default() -> Self {
        Self::common()
    }
}

/// Relevance score with its per-concern breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ConcernScore {
    pub total: u32,
    /// Points contributed by each profile concern (lowercased).
    pub by_concern: AHashMap<String, u32>,
    pub skin_type_bonus: u32,
}

/// Scores products against a profile's concerns.
#[derive(Debug, Clone, Default)]
pub struct ConcernScorer {
    keywords: ConcernKeywords,
}

impl ConcernScorer {
    #[must_use]
    pub fn new(keywords: ConcernKeywords) -> Self {
        Self { keywords }
    }

    #[must_use]
    pub fn keywords(&self) -> &ConcernKeywords {
        &self.keywords
    }

    /// Relevance of a product for a profile, as a non-negative integer.
    ///
    /// Each keyword stem of each selected concern contributes
    /// [`POINTS_PER_KEYWORD`] when found as a case-insensitive substring of
    /// the product name or product type (once per stem, even if it appears
    /// in both fields). The skin type adds [`SKIN_TYPE_BONUS`] once when it
    /// appears in the product name. Used purely for sorting.
    #[must_use]
    pub fn score(&self, product: &Product, profile: &Profile) -> u32 {
        self.score_explained(product, profile).total
    }

    /// Like [`score`](Self::score), keeping the per-concern contributions.
    #[must_use]
    pub fn score_explained(&self, product: &Product, profile: &Profile) -> ConcernScore {
        let name = product.name.to_lowercase();
        let product_type = product.product_type.to_lowercase();

        let mut by_concern = AHashMap::new();
        let mut total = 0u32;

        for concern in &profile.concerns {
            let concern = concern.trim().to_lowercase();
            let mut points = 0u32;
            if let Some(stems) = self.keywords.stems(&concern) {
                for stem in stems {
                    if name.contains(stem.as_str()) || product_type.contains(stem.as_str()) {
                        points += POINTS_PER_KEYWORD;
                    }
                }
            }
            total += points;
            by_concern.insert(concern, points);
        }

        let skin_type_bonus = if name.contains(profile.skin_type.as_str()) {
            SKIN_TYPE_BONUS
        } else {
            0
        };
        total += skin_type_bonus;

        ConcernScore {
            total,
            by_concern,
            skin_type_bonus,
        }
    }
}
