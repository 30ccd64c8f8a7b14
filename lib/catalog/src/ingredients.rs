//! Reference dictionary of cosmetic ingredients.
//!
//! Bulk-loaded from a tabular CSV source at construction and read-only from
//! then on. Lookup runs a fixed cascade: exact canonical match, partial
//! (substring) match over rows in source order, then the fallback table.

use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;
use incimatch_core::normalize::canonical_token;
use incimatch_core::{Error, IngredientInfo, Result};
use tracing::{error, warn};

use crate::fallback::FallbackTable;

#[derive(Debug, Clone)]
struct IngredientRecord {
    canonical: String,
    info: IngredientInfo,
}

#[derive(Debug)]
pub struct IngredientCatalog {
    /// Records in source row order. Partial matching depends on this order.
    records: Vec<IngredientRecord>,
    /// Canonical name -> first row with that name.
    exact: AHashMap<String, usize>,
    fallback: FallbackTable,
}

impl IngredientCatalog {
    /// A catalog with no loaded records. Lookups only hit the fallback table.
    #[must_use]
    pub fn empty(fallback: FallbackTable) -> Self {
        Self {
            records: Vec::new(),
            exact: AHashMap::new(),
            fallback,
        }
    }

    /// Load the reference dictionary from a CSV file.
    ///
    /// Headers are matched case-insensitively; `name` is required, the
    /// descriptive columns default to empty when absent. Unreadable rows are
    /// skipped with a warning rather than failing the load.
    pub fn load<P: AsRef<Path>>(path: P, fallback: FallbackTable) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| Error::CatalogLoad(e.to_string()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::CatalogLoad(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let name_col = column("name").ok_or_else(|| Error::MissingColumn("name".to_string()))?;
        let short_col = column("short_description");
        let what_col = column("what_is_it");
        let does_col = column("what_does_it_do");
        let good_col = column("who_is_it_good_for");
        let avoid_col = column("who_should_avoid");
        let url_col = column("url");

        let mut records = Vec::new();
        let mut exact = AHashMap::new();

        for (row_idx, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(row = row_idx, error = %e, "skipping unreadable ingredient row");
                    continue;
                }
            };
            let field =
                |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("").trim().to_string();

            let display = row.get(name_col).unwrap_or("").trim().to_string();
            let canonical = canonical_token(&display);
            if canonical.is_empty() {
                continue;
            }

            let info = IngredientInfo {
                name: display,
                short_description: field(short_col),
                what_is_it: field(what_col),
                what_does_it_do: field(does_col),
                who_is_it_good_for: field(good_col),
                who_should_avoid: field(avoid_col),
                url: field(url_col),
            };

            exact.entry(canonical.clone()).or_insert(records.len());
            records.push(IngredientRecord { canonical, info });
        }

        Ok(Self {
            records,
            exact,
            fallback,
        })
    }

    /// Load, degrading to an empty catalog on failure.
    ///
    /// The failure is reported here, once; subsequent lookups cannot tell
    /// "no data" from "ingredient unknown" and are not supposed to.
    #[must_use]
    pub fn load_or_empty<P: AsRef<Path>>(path: P, fallback: FallbackTable) -> Self {
        match Self::load(path.as_ref(), fallback.clone()) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path = %path.as_ref().display(), error = %e, "ingredient dictionary unavailable, serving fallback entries only");
                Self::empty(fallback)
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve an ingredient name to its descriptive record.
    ///
    /// Cascade, first hit wins:
    /// 1. exact canonical-name match;
    /// 2. partial match: the query is a substring of a record's canonical
    ///    name or contains it, scanning rows in source order;
    /// 3. fallback table;
    /// 4. `None`.
    ///
    /// The two-direction substring check and first-row tie-break are
    /// deliberate; downstream text assumes them.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<IngredientInfo> {
        let query = canonical_token(name);
        if query.is_empty() {
            return None;
        }

        if let Some(&idx) = self.exact.get(&query) {
            return Some(self.records[idx].info.clone());
        }

        for record in &self.records {
            if record.canonical.contains(&query) || query.contains(&record.canonical) {
                return Some(record.info.clone());
            }
        }

        self.fallback.get(&query).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const DICT: &str = "\
Name,Short_Description,What_Is_It,What_Does_It_Do,Who_Is_It_Good_For,Who_Should_Avoid,URL
Niacinamide,Vitamin B3,A water-soluble vitamin,Brightens,All skin types,None,https://example.com/niacinamide
Salicylic Acid,BHA exfoliant,A beta hydroxy acid,Unclogs pores,Oily skin,Very dry skin,
Sodium Hyaluronate,HA salt,A salt of hyaluronic acid,Hydrates,All skin types,None,
";

    fn catalog() -> IngredientCatalog {
        let file = write_csv(DICT);
        IngredientCatalog::load(file.path(), FallbackTable::common()).unwrap()
    }

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let catalog = catalog();
        let upper = catalog.lookup("NIACINAMIDE").unwrap();
        let lower = catalog.lookup("niacinamide").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Niacinamide");
        assert_eq!(upper.url, "https://example.com/niacinamide");
    }

    #[test]
    fn test_partial_lookup_query_inside_record() {
        let catalog = catalog();
        let info = catalog.lookup("salicylic").unwrap();
        assert_eq!(info.name, "Salicylic Acid");
    }

    #[test]
    fn test_partial_lookup_record_inside_query() {
        let catalog = catalog();
        let info = catalog.lookup("niacinamide 10%").unwrap();
        assert_eq!(info.name, "Niacinamide");
    }

    #[test]
    fn test_partial_lookup_first_row_wins() {
        // "acid" is a substring of both acid rows; row order decides.
        let catalog = catalog();
        let info = catalog.lookup("acid").unwrap();
        assert_eq!(info.name, "Salicylic Acid");
    }

    #[test]
    fn test_fallback_after_misses() {
        let catalog = catalog();
        let info = catalog.lookup("Cetearyl Alcohol").unwrap();
        assert_eq!(info.name, "Cetearyl Alcohol");
    }

    #[test]
    fn test_unknown_returns_none() {
        let catalog = catalog();
        assert!(catalog.lookup("unknownxyz123").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("   ").is_none());
    }

    #[test]
    fn test_missing_name_column_is_a_load_error() {
        let file = write_csv("title,url\nfoo,bar\n");
        let err = IngredientCatalog::load(file.path(), FallbackTable::common()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(col) if col == "name"));
    }

    #[test]
    fn test_load_or_empty_degrades_and_serves_fallback() {
        let catalog =
            IngredientCatalog::load_or_empty("/no/such/file.csv", FallbackTable::common());
        assert!(catalog.is_empty());
        assert!(catalog.lookup("glycerin").is_some());
        assert!(catalog.lookup("unknownxyz123").is_none());
    }

    #[test]
    fn test_substituted_fallback_changes_lookups() {
        let fallback = FallbackTable::empty()
            .with_entry("squalane", IngredientInfo::named("Squalane"));
        let catalog = IngredientCatalog::empty(fallback);
        assert_eq!(catalog.lookup("squalane").unwrap().name, "Squalane");
        assert!(catalog.lookup("glycerin").is_none());
    }

    #[test]
    fn test_descriptive_columns_default_empty() {
        let file = write_csv("name\nRetinol\n");
        let catalog = IngredientCatalog::load(file.path(), FallbackTable::empty()).unwrap();
        let info = catalog.lookup("retinol").unwrap();
        assert_eq!(info.name, "Retinol");
        assert!(info.short_description.is_empty());
    }
}
