//! Session-scoped skin profile.
//!
//! A profile describes the user's skin and shopping constraints. It lives
//! only for the current session: saving overwrites the single current slot
//! and no history is kept.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hard limit on the number of selected concerns.
pub const MAX_CONCERNS: usize = 3;

/// Budget slider bounds, in CHF per product.
pub const BUDGET_MIN_CHF: f64 = 5.0;
pub const BUDGET_MAX_CHF: f64 = 80.0;
pub const BUDGET_DEFAULT_CHF: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
    Sensitive,
}

impl SkinType {
    /// Lowercase form used for substring matching against product names.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
            SkinType::Sensitive => "sensitive",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 13-19 years
    Teen,
    /// 20-29 years
    YoungAdult,
    /// 30-44 years
    Adult,
    /// 45+ years
    Mature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragrancePreference {
    NoPreference,
    FragranceFree,
    LightFragranceOk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Cold,
    Moderate,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunExposure {
    MostlyIndoors,
    Mixed,
    MostlyOutdoors,
}

/// User skin profile for the current session.
///
/// Concerns are free-form lowercase-insensitive names ("Acne", "dryness").
/// The scorer only recognizes concerns present in its keyword configuration;
/// anything else quietly contributes zero, so the profile does not validate
/// concern names - only their count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub skin_type: SkinType,
    pub age_group: AgeGroup,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub sensitivity: Sensitivity,
    pub fragrance: FragrancePreference,
    pub climate: Climate,
    pub sun_exposure: SunExposure,
    /// Maximum price per product, in CHF.
    pub budget: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            skin_type: SkinType::Normal,
            age_group: AgeGroup::Adult,
            concerns: Vec::new(),
            sensitivity: Sensitivity::Medium,
            fragrance: FragrancePreference::NoPreference,
            climate: Climate::Moderate,
            sun_exposure: SunExposure::Mixed,
            budget: BUDGET_DEFAULT_CHF,
        }
    }
}

impl Profile {
    /// Check the profile against the save rules.
    ///
    /// At most [`MAX_CONCERNS`] concerns may be selected; everything else is
    /// host-side configuration (the budget bounds are advisory constants for
    /// input widgets, not enforced here).
    pub fn validate(&self) -> Result<()> {
        if self.concerns.len() > MAX_CONCERNS {
            return Err(Error::TooManyConcerns(self.concerns.len()));
        }
        Ok(())
    }
}

/// Single overwritable profile slot for the current session.
///
/// Shared read-only across a hosting layer's request handlers; the save
/// operation validates and then replaces the slot wholesale.
#[derive(Default)]
pub struct ProfileSession {
    current: RwLock<Option<Profile>>,
}

impl ProfileSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store the profile, replacing any previous one.
    pub fn save(&self, profile: Profile) -> Result<()> {
        profile.validate()?;
        *self.current.write() = Some(profile);
        Ok(())
    }

    /// The most recently saved profile, if any.
    #[must_use]
    pub fn current(&self) -> Option<Profile> {
        self.current.read().clone()
    }

    pub fn clear(&self) {
        *self.current.write() = None;
    }
}
