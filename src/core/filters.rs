use crate::models::{ClientProfile, PropertyListing};

/// Check whether a listing can still be proposed to clients
///
/// Only AVAILABLE listings take part in matchmaking; reserved, sold, rented
/// and withdrawn stock is skipped before scoring.
#[inline]
pub fn is_available(property: &PropertyListing) -> bool {
    property.status.trim().eq_ignore_ascii_case("AVAILABLE")
}

/// Check whether a client record should receive new-listing alerts
///
/// Leads count: a fresh lead with stated preferences is exactly who a new
/// listing should be proposed to. Inactive and archived records are skipped.
#[inline]
pub fn is_active_client(client: &ClientProfile) -> bool {
    let status = client.status.trim();
    status.eq_ignore_ascii_case("ACTIVE") || status.eq_ignore_ascii_case("LEAD")
}

/// Check whether a client's intent is compatible with a transaction type
///
/// BUY pairs with SALE and RENT with RENT. Supply-side intents (SELL, LET)
/// never match a listing. An absent or unrecognized intent is treated as
/// unconstrained, mirroring how absent preferences score neutrally.
#[inline]
pub fn intent_allows_transaction(intent: Option<&str>, transaction_type: &str) -> bool {
    let Some(intent) = intent.map(str::trim).filter(|s| !s.is_empty()) else {
        return true;
    };

    if intent.eq_ignore_ascii_case("BUY") {
        return transaction_type.trim().eq_ignore_ascii_case("SALE");
    }
    if intent.eq_ignore_ascii_case("RENT") {
        return transaction_type.trim().eq_ignore_ascii_case("RENT");
    }
    if intent.eq_ignore_ascii_case("SELL") || intent.eq_ignore_ascii_case("LET") {
        return false;
    }

    true
}

/// Check a listing's type against the client's acceptable property types
///
/// An empty list means any type is fine.
#[inline]
pub fn matches_type_preference(preferred_types: &[String], property_type: &str) -> bool {
    if preferred_types.is_empty() {
        return true;
    }

    let folded = property_type.trim().to_lowercase();
    preferred_types
        .iter()
        .any(|t| t.trim().to_lowercase() == folded)
}

/// Hard constraints a listing must pass before it is worth scoring
#[inline]
pub fn is_candidate(client: &ClientProfile, property: &PropertyListing) -> bool {
    if !is_available(property) {
        return false;
    }

    if !intent_allows_transaction(client.intent.as_deref(), &property.transaction_type) {
        return false;
    }

    if !matches_type_preference(&client.property_types, &property.property_type) {
        return false;
    }

    true
}
