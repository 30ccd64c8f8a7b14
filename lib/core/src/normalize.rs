//! Tokenization and canonicalization of raw ingredient text.
//!
//! Every ingredient comparison in the engine happens on canonical tokens:
//! lowercase, trimmed, with no leading or trailing punctuation. The parser
//! splits label text the way it appears on real products (comma- or
//! semicolon-separated INCI names) and never fails - bad input degrades to
//! an empty result.

/// Canonical form of a single ingredient name.
///
/// Strips surrounding whitespace and punctuation, then lowercases.
/// Interior punctuation is preserved ("1,2-hexanediol" keeps its dashes).
#[inline]
#[must_use]
pub fn canonical_token(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .to_lowercase()
}

/// Parse a pasted ingredient list into canonical tokens.
///
/// Splits on commas or semicolons, canonicalizes each fragment, and drops
/// empty fragments. Order is preserved and duplicates are NOT collapsed -
/// callers that need a set build one from the returned tokens.
///
/// Empty input yields an empty vec; this function never errors.
#[must_use]
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == ';')
        .map(canonical_token)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_token() {
        assert_eq!(canonical_token("  Aqua  "), "aqua");
        assert_eq!(canonical_token("NIACINAMIDE"), "niacinamide");
        assert_eq!(canonical_token(" (Aqua). "), "aqua");
        assert_eq!(canonical_token("1,2-Hexanediol"), "1,2-hexanediol");
        assert_eq!(canonical_token(""), "");
        assert_eq!(canonical_token("  ,; "), "");
    }

    #[test]
    fn test_parse_preserves_order_and_case_folds() {
        assert_eq!(
            parse_ingredient_list("Aqua, Glycerin; Niacinamide"),
            vec!["aqua", "glycerin", "niacinamide"]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_ingredient_list("").is_empty());
        assert!(parse_ingredient_list("   ").is_empty());
        assert!(parse_ingredient_list(",,;;").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(
            parse_ingredient_list("aqua, glycerin, aqua"),
            vec!["aqua", "glycerin", "aqua"]
        );
    }

    #[test]
    fn test_parse_drops_empty_fragments() {
        assert_eq!(
            parse_ingredient_list("aqua,, glycerin; ,niacinamide"),
            vec!["aqua", "glycerin", "niacinamide"]
        );
    }
}
