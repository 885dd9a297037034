//! Enum-value normalization for bulk imports
//!
//! Agencies import their stock from spreadsheets where enum-ish columns
//! carry free text in English or Greek ("maisonette", "μεζονέτα", "Μεζονετα").
//! This module maps such values onto the canonical uppercase tokens the CRM
//! schema expects, and flags what it cannot map so the import UI can ask the
//! agent instead of guessing.

pub mod importer;
pub mod mappings;

pub use importer::{
    import_csv, import_csv_path, normalize_rows, EntityKind, ImportError, ImportReport, RowReport,
};
pub use mappings::{client_enum_mappings, property_enum_mappings};

use serde_json::{Map, Value};
use std::collections::HashMap;

/// One enum field's vocabulary: canonical tokens plus their accepted aliases
///
/// Lookup is a single hashmap hit after folding; canonical tokens are
/// inserted as aliases of themselves, which makes normalization idempotent
/// on already-clean input.
pub struct EnumMapping {
    name: &'static str,
    tokens: &'static [&'static str],
    lookup: HashMap<String, &'static str>,
}

impl EnumMapping {
    pub(crate) fn build(
        name: &'static str,
        tokens: &'static [&'static str],
        aliases: &[(&'static str, &'static str)],
    ) -> Self {
        let mut lookup = HashMap::with_capacity(tokens.len() + aliases.len());
        for token in tokens {
            lookup.insert(fold(token), *token);
        }
        for (alias, token) in aliases {
            lookup.insert(fold(alias), *token);
        }
        Self {
            name,
            tokens,
            lookup,
        }
    }

    /// Identifier used in logs and tests, e.g. "propertyType"
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical vocabulary, in schema order
    pub fn tokens(&self) -> &'static [&'static str] {
        self.tokens
    }

    /// Map a raw string onto a canonical token
    ///
    /// The input is trimmed and lowercased, then checked against the
    /// canonical tokens and the alias table. Returns `None` for empty input
    /// and for anything the table does not know.
    pub fn normalize(&self, raw: &str) -> Option<&'static str> {
        let folded = fold(raw);
        if folded.is_empty() {
            return None;
        }
        self.lookup.get(&folded).copied()
    }
}

/// Trim and lowercase; Unicode-aware so Greek capitals fold correctly
#[inline]
fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize an arbitrary JSON value against one enum mapping
///
/// Spreadsheet cells arrive as strings, numbers or booleans depending on the
/// exporting tool; numbers and booleans are stringified and looked up like
/// any other alias. Nulls, arrays and objects never match. Never panics.
pub fn normalize_enum_value(value: &Value, mapping: &EnumMapping) -> Option<&'static str> {
    match value {
        Value::String(s) => mapping.normalize(s),
        Value::Number(n) => mapping.normalize(&n.to_string()),
        Value::Bool(b) => mapping.normalize(if *b { "true" } else { "false" }),
        _ => None,
    }
}

/// Normalize the recognized enum fields of a property import row in place
///
/// Recognized fields are replaced with their canonical token, or set to
/// `null` when no alias matches; every other field is left untouched.
/// Returns the names of fields that carried a value but did not normalize,
/// so the caller can flag the row for manual correction.
pub fn normalize_property_enums(row: &mut Map<String, Value>) -> Vec<String> {
    normalize_row(row, property_enum_mappings())
}

/// Normalize the recognized enum fields of a client import row in place
pub fn normalize_client_enums(row: &mut Map<String, Value>) -> Vec<String> {
    normalize_row(row, client_enum_mappings())
}

fn normalize_row(
    row: &mut Map<String, Value>,
    registry: &[(&'static str, &'static EnumMapping)],
) -> Vec<String> {
    let mut unmatched = Vec::new();

    for (field, mapping) in registry {
        let Some(value) = row.get_mut(*field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        // Blank cells are missing data, not dirty data
        if value.as_str().is_some_and(|s| s.trim().is_empty()) {
            *value = Value::Null;
            continue;
        }

        match normalize_enum_value(value, mapping) {
            Some(token) => *value = Value::String(token.to_string()),
            None => {
                *value = Value::Null;
                unmatched.push((*field).to_string());
            }
        }
    }

    unmatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalizes_english_synonyms() {
        let mapping = mappings::property_type();
        assert_eq!(mapping.normalize("apartment"), Some("APARTMENT"));
        assert_eq!(mapping.normalize("  Flat "), Some("APARTMENT"));
        assert_eq!(mapping.normalize("Detached House"), Some("DETACHED_HOUSE"));
    }

    #[test]
    fn test_normalizes_greek_translations() {
        let mapping = mappings::property_type();
        assert_eq!(mapping.normalize("διαμέρισμα"), Some("APARTMENT"));
        assert_eq!(mapping.normalize("ΔΙΑΜΈΡΙΣΜΑ"), Some("APARTMENT"));
        assert_eq!(mapping.normalize("Μεζονέτα"), Some("MAISONETTE"));
        assert_eq!(mapping.normalize("οικοπεδο"), Some("LAND"));
    }

    #[test]
    fn test_canonical_tokens_are_idempotent() {
        let mapping = mappings::property_type();
        assert_eq!(mapping.normalize("APARTMENT"), Some("APARTMENT"));
        assert_eq!(mapping.normalize("apartment "), Some("APARTMENT"));
    }

    #[test]
    fn test_unknown_values_return_none() {
        let mapping = mappings::property_type();
        assert_eq!(mapping.normalize("spaceship"), None);
        assert_eq!(mapping.normalize(""), None);
        assert_eq!(mapping.normalize("   "), None);
    }

    #[test]
    fn test_every_canonical_token_round_trips() {
        for (_, mapping) in property_enum_mappings()
            .iter()
            .chain(client_enum_mappings())
        {
            for token in mapping.tokens() {
                assert_eq!(
                    mapping.normalize(token),
                    Some(*token),
                    "{} token {} does not round-trip",
                    mapping.name(),
                    token
                );
            }
        }
    }

    #[test]
    fn test_every_alias_points_at_a_declared_token() {
        for (_, mapping) in property_enum_mappings()
            .iter()
            .chain(client_enum_mappings())
        {
            for target in mapping.lookup.values() {
                assert!(
                    mapping.tokens().contains(target),
                    "{} alias target {} missing from token list",
                    mapping.name(),
                    target
                );
            }
        }
    }

    #[test]
    fn test_json_values_fold_through_their_type() {
        let furnished = mappings::furnished();
        assert_eq!(normalize_enum_value(&json!("Ναι"), furnished), Some("FURNISHED"));
        assert_eq!(normalize_enum_value(&json!(true), furnished), Some("FURNISHED"));
        assert_eq!(normalize_enum_value(&json!(false), furnished), Some("UNFURNISHED"));

        let legalization = mappings::legalization_status();
        assert_eq!(normalize_enum_value(&json!(4495), legalization), Some("SETTLED"));

        assert_eq!(normalize_enum_value(&Value::Null, furnished), None);
        assert_eq!(normalize_enum_value(&json!({"cell": "A1"}), furnished), None);
        assert_eq!(normalize_enum_value(&json!(["a"]), furnished), None);
    }

    #[test]
    fn test_property_row_normalizes_only_recognized_fields() {
        let mut row = json!({
            "code": "K-1042",
            "title": "Ανακαινισμένο διαμέρισμα",
            "propertyType": "διαμέρισμα",
            "transactionType": "Πώληση",
            "status": "available",
            "heatingType": "αυτόνομη",
            "energyClass": "β+",
            "askingPrice": 185000
        })
        .as_object()
        .cloned()
        .unwrap();

        let unmatched = normalize_property_enums(&mut row);

        assert!(unmatched.is_empty());
        assert_eq!(row["propertyType"], json!("APARTMENT"));
        assert_eq!(row["transactionType"], json!("SALE"));
        assert_eq!(row["status"], json!("AVAILABLE"));
        assert_eq!(row["heatingType"], json!("AUTONOMOUS"));
        assert_eq!(row["energyClass"], json!("B_PLUS"));
        // Fields outside the registry pass through untouched
        assert_eq!(row["code"], json!("K-1042"));
        assert_eq!(row["title"], json!("Ανακαινισμένο διαμέρισμα"));
        assert_eq!(row["askingPrice"], json!(185000));
    }

    #[test]
    fn test_unmapped_values_become_null_and_get_flagged() {
        let mut row = json!({
            "propertyType": "spaceship",
            "condition": "good",
            "furnished": null
        })
        .as_object()
        .cloned()
        .unwrap();

        let unmatched = normalize_property_enums(&mut row);

        assert_eq!(unmatched, vec!["propertyType".to_string()]);
        assert_eq!(row["propertyType"], Value::Null);
        assert_eq!(row["condition"], json!("GOOD"));
        // Already-null cells are not an error
        assert_eq!(row["furnished"], Value::Null);
    }

    #[test]
    fn test_blank_cells_null_out_without_flagging() {
        let mut row = json!({
            "propertyType": "   ",
            "status": "available"
        })
        .as_object()
        .cloned()
        .unwrap();

        let unmatched = normalize_property_enums(&mut row);

        assert!(unmatched.is_empty());
        assert_eq!(row["propertyType"], Value::Null);
        assert_eq!(row["status"], json!("AVAILABLE"));
    }

    #[test]
    fn test_client_row_uses_client_vocabulary() {
        let mut row = json!({
            "fullName": "Γιώργος Νικολάου",
            "clientType": "ιδιώτης",
            "status": "ενεργός",
            "intent": "Αγορά"
        })
        .as_object()
        .cloned()
        .unwrap();

        let unmatched = normalize_client_enums(&mut row);

        assert!(unmatched.is_empty());
        assert_eq!(row["clientType"], json!("INDIVIDUAL"));
        assert_eq!(row["status"], json!("ACTIVE"));
        assert_eq!(row["intent"], json!("BUY"));
        assert_eq!(row["fullName"], json!("Γιώργος Νικολάου"));
    }
}
