// Unit tests for propmatch

use propmatch::core::{
    filters::{intent_allows_transaction, is_candidate},
    scoring::{bedroom_score, budget_score, calculate_match_score, location_score, size_score},
};
use propmatch::models::{ClientProfile, PenaltyCurves, PropertyListing, ScoringWeights};
use propmatch::normalize::{
    client_enum_mappings, mappings, normalize_enum_value, normalize_property_enums,
    property_enum_mappings,
};
use serde_json::{json, Value};

fn create_test_client(id: &str) -> ClientProfile {
    ClientProfile {
        id: id.to_string(),
        full_name: format!("Client {}", id),
        intent: Some("BUY".to_string()),
        budget_min: Some(150_000.0),
        budget_max: Some(250_000.0),
        preferred_areas: vec!["Παγκράτι".to_string(), "Κουκάκι".to_string()],
        preferred_municipalities: vec!["Αθήνα".to_string()],
        property_types: vec![],
        min_size_sqm: Some(70.0),
        max_size_sqm: Some(110.0),
        min_bedrooms: Some(2),
        status: "ACTIVE".to_string(),
    }
}

fn create_test_listing(id: &str, price: Option<f64>) -> PropertyListing {
    PropertyListing {
        id: id.to_string(),
        title: format!("Listing {}", id),
        property_type: "APARTMENT".to_string(),
        transaction_type: "SALE".to_string(),
        status: "AVAILABLE".to_string(),
        price,
        area: Some("Παγκράτι".to_string()),
        municipality: Some("Αθήνα".to_string()),
        size_net_sqm: Some(85.0),
        bedrooms: Some(2),
        bathrooms: Some(1),
    }
}

fn empty_preferences_client(id: &str) -> ClientProfile {
    ClientProfile {
        id: id.to_string(),
        full_name: format!("Client {}", id),
        intent: None,
        budget_min: None,
        budget_max: None,
        preferred_areas: vec![],
        preferred_municipalities: vec![],
        property_types: vec![],
        min_size_sqm: None,
        max_size_sqm: None,
        min_bedrooms: None,
        status: "ACTIVE".to_string(),
    }
}

#[test]
fn test_budget_inside_range_scores_full() {
    assert_eq!(
        budget_score(Some(200_000.0), Some(150_000.0), Some(250_000.0), 0.5),
        100.0
    );
    // Boundary values are inside
    assert_eq!(
        budget_score(Some(250_000.0), Some(150_000.0), Some(250_000.0), 0.5),
        100.0
    );
}

#[test]
fn test_budget_overshoot_decays_linearly() {
    // 25% over a 200k ceiling with a 50% tolerance sits at half score
    let half = budget_score(Some(250_000.0), None, Some(200_000.0), 0.5);
    assert!((half - 50.0).abs() < 1e-9, "expected 50, got {}", half);

    // At the tolerance edge the dimension bottoms out
    assert_eq!(budget_score(Some(300_000.0), None, Some(200_000.0), 0.5), 0.0);
    assert_eq!(budget_score(Some(900_000.0), None, Some(200_000.0), 0.5), 0.0);
}

#[test]
fn test_budget_absent_is_neutral() {
    assert_eq!(budget_score(Some(999_000.0), None, None, 0.5), 100.0);
    assert_eq!(budget_score(None, None, None, 0.5), 100.0);
}

#[test]
fn test_unpriced_listing_against_stated_budget_scores_zero() {
    assert_eq!(budget_score(None, Some(100_000.0), Some(200_000.0), 0.5), 0.0);
}

#[test]
fn test_swapped_budget_bounds_form_the_enclosing_range() {
    // Agents sometimes type min and max the wrong way round
    assert_eq!(
        budget_score(Some(200_000.0), Some(250_000.0), Some(150_000.0), 0.5),
        100.0
    );
}

#[test]
fn test_location_matches_greek_names_case_insensitively() {
    let areas = vec!["Παγκράτι".to_string()];
    assert_eq!(location_score(Some("ΠΑΓΚΡΆΤΙ"), None, &areas, &[], 60.0), 100.0);
    assert_eq!(location_score(Some(" παγκράτι "), None, &areas, &[], 60.0), 100.0);
}

#[test]
fn test_location_municipality_match_earns_partial_credit() {
    let areas = vec!["Κουκάκι".to_string()];
    let municipalities = vec!["Αθήνα".to_string()];
    let score = location_score(
        Some("Παγκράτι"),
        Some("αθήνα"),
        &areas,
        &municipalities,
        60.0,
    );
    assert_eq!(score, 60.0);
}

#[test]
fn test_location_without_preference_is_neutral() {
    assert_eq!(location_score(Some("Anywhere"), None, &[], &[], 60.0), 100.0);
}

#[test]
fn test_location_miss_scores_zero() {
    let areas = vec!["Κολωνάκι".to_string()];
    assert_eq!(location_score(Some("Περιστέρι"), None, &areas, &[], 60.0), 0.0);
    assert_eq!(location_score(None, None, &areas, &[], 60.0), 0.0);
}

#[test]
fn test_size_below_minimum_decays() {
    // 60 sqm against an 80 sqm floor is a 25% shortfall: half score at 0.5 tolerance
    let score = size_score(Some(60.0), Some(80.0), None, 0.5);
    assert!((score - 50.0).abs() < 1e-9, "expected 50, got {}", score);

    assert_eq!(size_score(Some(90.0), Some(80.0), Some(120.0), 0.5), 100.0);
    assert_eq!(size_score(None, Some(80.0), None, 0.5), 0.0);
    assert_eq!(size_score(Some(40.0), Some(80.0), None, 0.5), 0.0);
}

#[test]
fn test_bedroom_shortfall_steps_down() {
    assert_eq!(bedroom_score(Some(3), Some(3), 35.0), 100.0);
    assert_eq!(bedroom_score(Some(4), Some(3), 35.0), 100.0);
    assert_eq!(bedroom_score(Some(2), Some(3), 35.0), 65.0);
    assert_eq!(bedroom_score(Some(1), Some(3), 35.0), 30.0);
    assert_eq!(bedroom_score(Some(0), Some(3), 35.0), 0.0);
    assert_eq!(bedroom_score(None, Some(2), 35.0), 0.0);
    assert_eq!(bedroom_score(None, None, 35.0), 100.0);
}

#[test]
fn test_match_score_always_within_range() {
    let weights = ScoringWeights::default();
    let curves = PenaltyCurves::default();

    let clients = vec![
        create_test_client("full"),
        empty_preferences_client("empty"),
    ];

    let mut listings = vec![
        create_test_listing("priced", Some(200_000.0)),
        create_test_listing("unpriced", None),
    ];
    // Degenerate listing: nothing optional filled in, blank strings where
    // an import left junk behind
    listings.push(PropertyListing {
        id: "degenerate".to_string(),
        title: String::new(),
        property_type: String::new(),
        transaction_type: "SALE".to_string(),
        status: "AVAILABLE".to_string(),
        price: Some(-1.0),
        area: Some(String::new()),
        municipality: Some("  ".to_string()),
        size_net_sqm: Some(0.0),
        bedrooms: Some(0),
        bathrooms: None,
    });

    for client in &clients {
        for listing in &listings {
            let result = calculate_match_score(client, listing, &weights, &curves);
            assert!(
                (0.0..=100.0).contains(&result.score),
                "score {} out of range for client {} listing {}",
                result.score,
                client.id,
                listing.id
            );
            for (name, value) in result.breakdown.dimensions() {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "{} dimension {} out of range",
                    name,
                    value
                );
            }
        }
    }
}

#[test]
fn test_client_without_preferences_scores_neutral() {
    let client = empty_preferences_client("empty");
    let listing = create_test_listing("any", Some(480_000.0));

    let result = calculate_match_score(
        &client,
        &listing,
        &ScoringWeights::default(),
        &PenaltyCurves::default(),
    );

    assert_eq!(result.score, 100.0);
    for (_, value) in result.breakdown.dimensions() {
        assert_eq!(value, 100.0);
    }
}

#[test]
fn test_unnormalized_weights_still_bound_the_score() {
    let weights = ScoringWeights {
        budget: 2.0,
        location: 1.0,
        size: 1.0,
        bedrooms: 1.0,
    };
    let result = calculate_match_score(
        &create_test_client("c"),
        &create_test_listing("p", Some(200_000.0)),
        &weights,
        &PenaltyCurves::default(),
    );
    assert!((0.0..=100.0).contains(&result.score));
}

#[test]
fn test_zero_weights_score_zero() {
    let weights = ScoringWeights {
        budget: 0.0,
        location: 0.0,
        size: 0.0,
        bedrooms: 0.0,
    };
    let result = calculate_match_score(
        &create_test_client("c"),
        &create_test_listing("p", Some(200_000.0)),
        &weights,
        &PenaltyCurves::default(),
    );
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_intent_gates_transaction_type() {
    assert!(intent_allows_transaction(Some("BUY"), "SALE"));
    assert!(!intent_allows_transaction(Some("BUY"), "RENT"));
    assert!(!intent_allows_transaction(Some("SELL"), "SALE"));
    assert!(intent_allows_transaction(None, "RENT"));
}

#[test]
fn test_candidate_requires_available_status() {
    let client = create_test_client("c");
    let mut listing = create_test_listing("p", Some(200_000.0));
    assert!(is_candidate(&client, &listing));

    listing.status = "SOLD".to_string();
    assert!(!is_candidate(&client, &listing));
}

#[test]
fn test_normalize_accepts_both_languages() {
    assert_eq!(mappings::property_type().normalize("flat"), Some("APARTMENT"));
    assert_eq!(
        mappings::property_type().normalize("Μεζονέτα"),
        Some("MAISONETTE")
    );
    assert_eq!(
        mappings::transaction_type().normalize("Ενοικίαση"),
        Some("RENT")
    );
    assert_eq!(mappings::energy_class().normalize("Β+"), Some("B_PLUS"));
    assert_eq!(mappings::client_intent().normalize("αγοραστής"), Some("BUY"));
}

#[test]
fn test_normalize_is_idempotent_across_every_vocabulary() {
    for (field, mapping) in property_enum_mappings()
        .iter()
        .chain(client_enum_mappings())
    {
        for token in mapping.tokens() {
            let first = mapping.normalize(token);
            assert_eq!(first, Some(*token), "{} should map to itself", token);
            let second = mapping.normalize(first.unwrap());
            assert_eq!(second, first, "field {} token {} is not stable", field, token);
        }
    }
}

#[test]
fn test_normalize_unknown_value_returns_none() {
    assert_eq!(mappings::property_type().normalize("spaceship"), None);
    assert_eq!(mappings::condition().normalize("περίεργο"), None);
    assert_eq!(mappings::client_status().normalize(""), None);
}

#[test]
fn test_normalize_enum_value_covers_json_scalars() {
    let furnished = mappings::furnished();
    assert_eq!(normalize_enum_value(&json!("Ναι"), furnished), Some("FURNISHED"));
    assert_eq!(normalize_enum_value(&json!(false), furnished), Some("UNFURNISHED"));
    assert_eq!(
        normalize_enum_value(&json!(4495), mappings::legalization_status()),
        Some("SETTLED")
    );
    assert_eq!(normalize_enum_value(&Value::Null, furnished), None);
    assert_eq!(normalize_enum_value(&json!([1, 2]), furnished), None);
}

#[test]
fn test_property_row_normalization_flags_dirty_values() {
    let mut row = json!({
        "title": "Μονοκατοικία στη Γλυφάδα",
        "propertyType": "μονοκατοικία",
        "transactionType": "for sale",
        "status": "mystery",
        "energyClass": "δ"
    })
    .as_object()
    .cloned()
    .unwrap();

    let unmatched = normalize_property_enums(&mut row);

    assert_eq!(unmatched, vec!["status".to_string()]);
    assert_eq!(row["propertyType"], json!("DETACHED_HOUSE"));
    assert_eq!(row["transactionType"], json!("SALE"));
    assert_eq!(row["status"], Value::Null);
    assert_eq!(row["energyClass"], json!("D"));
    assert_eq!(row["title"], json!("Μονοκατοικία στη Γλυφάδα"));
}
