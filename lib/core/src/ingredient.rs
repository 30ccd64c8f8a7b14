use serde::{Deserialize, Serialize};

/// Descriptive record for a single cosmetic ingredient.
///
/// Loaded in bulk from the reference dictionary or synthesized from the
/// fallback table; immutable after construction. All descriptive fields
/// may be empty when the source row does not provide them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// Display name as it appears in the reference source.
    pub name: String,
    pub short_description: String,
    pub what_is_it: String,
    pub what_does_it_do: String,
    pub who_is_it_good_for: String,
    pub who_should_avoid: String,
    pub url: String,
}

impl IngredientInfo {
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
