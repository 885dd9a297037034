use crate::models::{ClientProfile, MatchScore, PenaltyCurves, PropertyListing, ScoreBreakdown, ScoringWeights};

/// Score granted to a dimension the client expressed no preference for
const NEUTRAL: f64 = 100.0;

/// Calculate a match score (0-100) for a property against a client's preferences
///
/// Scoring formula:
/// score = (
///     budget_score * 0.35 +        # Price inside the budget range = higher
///     location_score * 0.25 +      # Preferred area/municipality = higher
///     size_score * 0.20 +          # Net sqm inside the desired range = higher
///     bedroom_score * 0.20         # At least the desired bedroom count
/// )
///
/// Each dimension is scored independently on 0-100; an absent client
/// preference scores its dimension as neutral (100) rather than penalizing
/// the listing. Weights are normalized by their sum, so the result stays in
/// 0-100 for any positive weight set.
pub fn calculate_match_score(
    client: &ClientProfile,
    property: &PropertyListing,
    weights: &ScoringWeights,
    curves: &PenaltyCurves,
) -> MatchScore {
    let budget = budget_score(
        property.price,
        client.budget_min,
        client.budget_max,
        curves.budget_tolerance,
    );

    let location = location_score(
        property.area.as_deref(),
        property.municipality.as_deref(),
        &client.preferred_areas,
        &client.preferred_municipalities,
        curves.municipality_credit,
    );

    let size = size_score(
        property.size_net_sqm,
        client.min_size_sqm,
        client.max_size_sqm,
        curves.size_tolerance,
    );

    let bedrooms = bedroom_score(property.bedrooms, client.min_bedrooms, curves.bedroom_step);

    let breakdown = ScoreBreakdown {
        budget,
        location,
        size,
        bedrooms,
    };

    let total_weight = weights.budget + weights.location + weights.size + weights.bedrooms;
    let score = if total_weight > 0.0 {
        (budget * weights.budget
            + location * weights.location
            + size * weights.size
            + bedrooms * weights.bedrooms)
            / total_weight
    } else {
        0.0
    };

    MatchScore {
        score: score.clamp(0.0, 100.0),
        breakdown,
    }
}

/// Calculate the budget dimension score (0-100)
///
/// A price inside `[budget_min, budget_max]` scores 100; outside, the score
/// decays linearly with the relative deviation from the nearest bound and
/// reaches 0 at `tolerance` (e.g. 50% over budget). One-sided budgets apply
/// the same rule against the single bound.
#[inline]
pub fn budget_score(
    price: Option<f64>,
    budget_min: Option<f64>,
    budget_max: Option<f64>,
    tolerance: f64,
) -> f64 {
    let (low, high) = match (budget_min, budget_max) {
        (None, None) => return NEUTRAL,
        // Swapped bounds are user input noise; treat them as the enclosing range
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    };

    let price = match price {
        Some(p) if p > 0.0 => p,
        // A stated budget cannot be judged against an unpriced listing
        _ => return 0.0,
    };

    let deviation = if let Some(hi) = high.filter(|hi| price > *hi) {
        (price - hi) / hi
    } else if let Some(lo) = low.filter(|lo| *lo > 0.0 && price < *lo) {
        (lo - price) / lo
    } else {
        return 100.0;
    };

    graded(deviation, tolerance)
}

/// Calculate the location dimension score (0-100)
///
/// Containment rules over the client's stated place names: an exact area
/// match scores 100, a municipality-level match earns `municipality_credit`,
/// anything else 0. Comparison is case-insensitive and whitespace-trimmed so
/// Greek free-text entries ("Χαλάνδρι" vs "ΧΑΛΆΝΔΡΙ ") still line up when
/// spelled the same way.
#[inline]
pub fn location_score(
    area: Option<&str>,
    municipality: Option<&str>,
    preferred_areas: &[String],
    preferred_municipalities: &[String],
    municipality_credit: f64,
) -> f64 {
    if preferred_areas.is_empty() && preferred_municipalities.is_empty() {
        return NEUTRAL;
    }

    if let Some(area) = area {
        if contains_place(preferred_areas, area) {
            return 100.0;
        }
    }

    if let Some(municipality) = municipality {
        if contains_place(preferred_municipalities, municipality)
            || contains_place(preferred_areas, municipality)
        {
            return municipality_credit.clamp(0.0, 100.0);
        }
    }

    0.0
}

/// Calculate the size dimension score (0-100)
///
/// Net square meters inside `[min_size, max_size]` score 100; outside, the
/// score decays linearly against the nearest bound, reaching 0 at
/// `tolerance` relative deviation.
#[inline]
pub fn size_score(
    size_net_sqm: Option<f64>,
    min_size: Option<f64>,
    max_size: Option<f64>,
    tolerance: f64,
) -> f64 {
    let (low, high) = match (min_size, max_size) {
        (None, None) => return NEUTRAL,
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    };

    let sqm = match size_net_sqm {
        Some(s) if s > 0.0 => s,
        _ => return 0.0,
    };

    let deviation = if let Some(hi) = high.filter(|hi| sqm > *hi) {
        (sqm - hi) / hi
    } else if let Some(lo) = low.filter(|lo| *lo > 0.0 && sqm < *lo) {
        (lo - sqm) / lo
    } else {
        return 100.0;
    };

    graded(deviation, tolerance)
}

/// Calculate the bedroom dimension score (0-100)
///
/// Meeting the desired count scores 100; each missing bedroom subtracts
/// `step` points, floored at 0.
#[inline]
pub fn bedroom_score(bedrooms: Option<u8>, min_bedrooms: Option<u8>, step: f64) -> f64 {
    let wanted = match min_bedrooms {
        None => return NEUTRAL,
        Some(0) => return 100.0,
        Some(n) => n,
    };

    let actual = match bedrooms {
        Some(n) => n,
        None => return 0.0,
    };

    if actual >= wanted {
        return 100.0;
    }

    let shortfall = f64::from(wanted - actual);
    (100.0 - step * shortfall).max(0.0)
}

/// Linear decay from 100 at zero deviation down to 0 at `tolerance`
#[inline]
fn graded(deviation: f64, tolerance: f64) -> f64 {
    if tolerance <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - deviation / tolerance)).clamp(0.0, 100.0)
}

#[inline]
fn contains_place(preferred: &[String], place: &str) -> bool {
    let folded = place.trim().to_lowercase();
    if folded.is_empty() {
        return false;
    }
    preferred
        .iter()
        .any(|p| p.trim().to_lowercase() == folded)
}
