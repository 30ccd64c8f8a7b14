use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::normalize::canonical_token;

/// Normalized set of canonical ingredient tokens. Duplicates collapse.
pub type IngredientSet = AHashSet<String>;

/// A catalog product. Identity is the row position in the catalog that
/// produced it - the source data carries no unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub product_type: String,
    /// Raw currency string as it appears in the source, e.g. "£12.50".
    pub price: String,
    pub url: String,
    /// Derived once at load time from the serialized ingredient list.
    pub ingredients: IngredientSet,
}

impl Product {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        product_type: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
        ingredients: IngredientSet,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            product_type: product_type.into(),
            price: price.into(),
            url: url.into(),
            ingredients,
        }
    }

    /// Numeric price, if the raw string can be interpreted as one.
    #[inline]
    pub fn numeric_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }
}

/// Parse a currency-formatted price string into a number.
///
/// Currency symbols, codes and thousands separators are stripped; whatever
/// digits and decimal point remain must form a valid number. Strings that
/// still fail to parse (price ranges, empty cells) yield `None` so the row
/// can be excluded rather than erroring a whole pipeline.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Decode a serialized list-of-strings literal into an ingredient set.
///
/// The product source stores ingredient lists as bracketed, quoted literals
/// such as `['aqua', 'glycerin']` (single or double quotes). Each quoted
/// element is canonicalized; duplicates collapse into the set. This decode
/// is total: anything that is not a well-formed list literal degrades to an
/// empty set for that product instead of failing the load.
#[must_use]
pub fn parse_ingredient_set(raw: &str) -> IngredientSet {
    let trimmed = raw.trim();
    let inner = match trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    {
        Some(inner) => inner,
        None => return IngredientSet::new(),
    };

    let mut set = IngredientSet::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\'' && c != '"' {
            continue;
        }
        let quote = c;
        let mut item = String::new();
        let mut closed = false;
        for d in chars.by_ref() {
            if d == quote {
                closed = true;
                break;
            }
            item.push(d);
        }
        if !closed {
            // Unterminated string literal: treat the whole value as malformed.
            return IngredientSet::new();
        }
        let token = canonical_token(&item);
        if !token.is_empty() {
            set.insert(token);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> IngredientSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_price_strips_currency() {
        assert_eq!(parse_price("£45.00"), Some(45.0));
        assert_eq!(parse_price("$1,250.99"), Some(1250.99));
        assert_eq!(parse_price("CHF 25.50"), Some(25.5));
        assert_eq!(parse_price("12"), Some(12.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("N/A"), None);
        // Two decimal points after stripping a range - not a number.
        assert_eq!(parse_price("£45.00 - £60.00"), None);
    }

    #[test]
    fn test_parse_ingredient_set_single_quotes() {
        let parsed = parse_ingredient_set("['Aqua', ' Glycerin ', 'aqua']");
        assert_eq!(parsed, set(&["aqua", "glycerin"]));
    }

    #[test]
    fn test_parse_ingredient_set_double_quotes() {
        let parsed = parse_ingredient_set("[\"aqua\", \"tocopherol\"]");
        assert_eq!(parsed, set(&["aqua", "tocopherol"]));
    }

    #[test]
    fn test_parse_ingredient_set_malformed_degrades_to_empty() {
        assert!(parse_ingredient_set("").is_empty());
        assert!(parse_ingredient_set("nan").is_empty());
        assert!(parse_ingredient_set("aqua, glycerin").is_empty());
        assert!(parse_ingredient_set("['aqua', 'glycer").is_empty());
    }

    #[test]
    fn test_parse_ingredient_set_empty_list() {
        assert!(parse_ingredient_set("[]").is_empty());
    }

    #[test]
    fn test_numeric_price() {
        let product = Product::new("Toner", "Acme", "toner", "£9.99", "", set(&[]));
        assert_eq!(product.numeric_price(), Some(9.99));
    }
}
