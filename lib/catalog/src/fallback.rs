//! Built-in knowledge for ubiquitous ingredients.
//!
//! A handful of ingredients appear on virtually every label but are easy to
//! miss in a scraped reference table (or show up under a synonym). The
//! fallback table is plain configuration data keyed by canonical name; it is
//! injected into [`crate::IngredientCatalog`] so tests and hosts can swap it
//! out wholesale.

use ahash::AHashMap;
use incimatch_core::IngredientInfo;

/// Fallback entries keyed by canonical ingredient name.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    entries: AHashMap<String, IngredientInfo>,
}

impl FallbackTable {
    /// An empty table (lookups fall straight through to not-found).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, canonical: &str, info: IngredientInfo) -> Self {
        self.entries.insert(canonical.to_string(), info);
        self
    }

    #[must_use]
    pub fn get(&self, canonical: &str) -> Option<&IngredientInfo> {
        self.entries.get(canonical)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The standard table of common ingredients and their synonyms.
    #[must_use]
    pub fn common() -> Self {
        let mut table = Self::empty();

        let water = |display: &str| IngredientInfo {
            name: display.to_string(),
            short_description: "Water is the most common cosmetic ingredient and serves as a solvent.".to_string(),
            what_is_it: "Water (Aqua) is the universal solvent used in skincare formulations.".to_string(),
            what_does_it_do: "Acts as a base for most skincare products, helps dissolve other ingredients, and provides hydration to the skin.".to_string(),
            who_is_it_good_for: "All skin types".to_string(),
            who_should_avoid: "Generally safe for everyone".to_string(),
            url: String::new(),
        };
        table.entries.insert("aqua".to_string(), water("Aqua (Water)"));
        table.entries.insert("water".to_string(), water("Water (Aqua)"));

        let glycerin = |display: &str, avoid: &str| IngredientInfo {
            name: display.to_string(),
            short_description: "A powerful humectant that draws moisture into the skin.".to_string(),
            what_is_it: "Glycerin (also called glycerol) is a natural compound derived from vegetable oils or animal fats. It's a humectant, meaning it attracts water.".to_string(),
            what_does_it_do: "Attracts and retains moisture in the skin, helps strengthen the skin barrier, provides hydration, and makes skin feel soft and smooth.".to_string(),
            who_is_it_good_for: "All skin types, especially dry and dehydrated skin".to_string(),
            who_should_avoid: avoid.to_string(),
            url: String::new(),
        };
        table.entries.insert(
            "glycerin".to_string(),
            glycerin(
                "Glycerin",
                "Generally safe, but in very dry climates without proper occlusive, it may draw moisture from deeper skin layers",
            ),
        );
        table.entries.insert(
            "glycerol".to_string(),
            glycerin("Glycerol (Glycerin)", "Generally safe for all skin types"),
        );

        table.entries.insert(
            "niacinamide".to_string(),
            IngredientInfo {
                name: "Niacinamide".to_string(),
                short_description: "A form of Vitamin B3 that brightens, reduces pores, and strengthens the skin barrier.".to_string(),
                what_is_it: "Niacinamide (Vitamin B3) is a water-soluble vitamin that offers multiple benefits for the skin.".to_string(),
                what_does_it_do: "Reduces the appearance of pores, regulates oil production, brightens skin tone, reduces hyperpigmentation, strengthens the skin barrier, and has anti-inflammatory properties.".to_string(),
                who_is_it_good_for: "All skin types, especially oily, acne-prone, aging, and hyperpigmented skin".to_string(),
                who_should_avoid: "Generally safe for all skin types, though some may experience sensitivity at high concentrations".to_string(),
                url: String::new(),
            },
        );

        table.entries.insert(
            "hyaluronic acid".to_string(),
            IngredientInfo {
                name: "Hyaluronic Acid".to_string(),
                short_description: "A powerful humectant that can hold up to 1000x its weight in water.".to_string(),
                what_is_it: "Hyaluronic acid is a naturally occurring substance in the skin that helps retain moisture and keep skin plump and hydrated.".to_string(),
                what_does_it_do: "Provides intense hydration, plumps the skin, reduces the appearance of fine lines and wrinkles, and helps maintain skin elasticity.".to_string(),
                who_is_it_good_for: "All skin types, especially dry, dehydrated, and aging skin".to_string(),
                who_should_avoid: "Generally safe for all skin types. In very dry climates, use with an occlusive to prevent moisture loss".to_string(),
                url: String::new(),
            },
        );

        table.entries.insert(
            "tocopherol".to_string(),
            IngredientInfo {
                name: "Tocopherol (Vitamin E)".to_string(),
                short_description: "A fat-soluble antioxidant that protects skin from environmental damage.".to_string(),
                what_is_it: "Tocopherol is the most common form of Vitamin E, a powerful antioxidant naturally found in the skin.".to_string(),
                what_does_it_do: "Protects against free radical damage, helps moisturize and heal the skin, reduces inflammation, and can help fade scars and hyperpigmentation.".to_string(),
                who_is_it_good_for: "All skin types, especially dry and mature skin".to_string(),
                who_should_avoid: "Those with very oily or acne-prone skin may want to use lower concentrations as it can be comedogenic in high amounts".to_string(),
                url: String::new(),
            },
        );

        table.entries.insert(
            "cetearyl alcohol".to_string(),
            IngredientInfo {
                name: "Cetearyl Alcohol".to_string(),
                short_description: "A fatty alcohol that acts as an emollient and emulsifier.".to_string(),
                what_is_it: "Cetearyl alcohol is a fatty alcohol derived from natural sources like coconut or palm oil. Unlike drying alcohols, it's actually beneficial for skin.".to_string(),
                what_does_it_do: "Softens and smooths the skin, helps stabilize formulations, provides texture and consistency to products, and acts as a moisturizing agent.".to_string(),
                who_is_it_good_for: "All skin types, especially dry skin".to_string(),
                who_should_avoid: "Generally safe, though rarely may cause sensitivity in some individuals".to_string(),
                url: String::new(),
            },
        );

        let fragrance = |display: &str, lead: &str| IngredientInfo {
            name: display.to_string(),
            short_description: "Added to products for scent, can be synthetic or natural.".to_string(),
            what_is_it: format!("{lead} is a blend of aromatic compounds added to cosmetic products to provide a pleasant smell."),
            what_does_it_do: "Provides scent to the product. Does not offer skincare benefits but enhances the sensory experience of using the product.".to_string(),
            who_is_it_good_for: "Those who enjoy fragranced products and don't have sensitive skin".to_string(),
            who_should_avoid: "People with sensitive skin, eczema, rosacea, or fragrance allergies should avoid fragranced products".to_string(),
            url: String::new(),
        };
        table.entries.insert(
            "parfum".to_string(),
            fragrance("Parfum (Fragrance)", "Parfum or fragrance"),
        );
        table.entries.insert(
            "fragrance".to_string(),
            fragrance("Fragrance (Parfum)", "Fragrance or parfum"),
        );

        table
    }
}
