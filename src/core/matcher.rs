use crate::core::{
    filters::{is_active_client, is_candidate},
    scoring::calculate_match_score,
};
use crate::models::{
    ClientProfile, MatchScore, PenaltyCurves, PropertyListing, ScoredClient, ScoredProperty,
    ScoringWeights,
};

/// Result of matching one client against a set of listings
#[derive(Debug)]
pub struct PropertyMatchResult {
    pub matches: Vec<ScoredProperty>,
    pub total_candidates: usize,
}

/// Result of matching one listing against a set of clients
#[derive(Debug)]
pub struct ClientMatchResult {
    pub matches: Vec<ScoredClient>,
    pub total_candidates: usize,
}

/// Knobs applied after scoring
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Maximum number of matches returned
    pub limit: usize,
    /// Matches scoring below this are dropped
    pub min_score: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            min_score: 30.0,
        }
    }
}

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Hard-constraint filtering (availability, intent/transaction, type)
/// 2. Per-dimension scoring with the configured weights and curves
/// 3. Minimum-score cutoff
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    curves: PenaltyCurves,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, curves: PenaltyCurves) -> Self {
        Self { weights, curves }
    }

    pub fn with_default_params() -> Self {
        Self {
            weights: ScoringWeights::default(),
            curves: PenaltyCurves::default(),
        }
    }

    /// Score a single client/property pair without filtering
    ///
    /// This is the raw contract behind `POST /matches/score`: the caller
    /// asked about this exact pair, so status and intent constraints do not
    /// apply here.
    pub fn score_pair(&self, client: &ClientProfile, property: &PropertyListing) -> MatchScore {
        calculate_match_score(client, property, &self.weights, &self.curves)
    }

    /// Find the best listings for a client's stated preferences
    ///
    /// # Arguments
    /// * `client` - The client whose preferences drive the search
    /// * `candidates` - Listings the caller fetched for consideration
    /// * `opts` - Cutoff and pagination knobs
    ///
    /// # Returns
    /// Scored matches sorted by score (ties: cheaper first), truncated to
    /// `opts.limit`, plus the pre-filter candidate count.
    pub fn find_properties(
        &self,
        client: &ClientProfile,
        candidates: Vec<PropertyListing>,
        opts: MatchOptions,
    ) -> PropertyMatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredProperty> = candidates
            .into_iter()
            .filter(|property| is_candidate(client, property))
            .filter_map(|property| {
                let scored = self.score_pair(client, &property);
                if scored.score < opts.min_score {
                    return None;
                }

                Some(ScoredProperty {
                    id: property.id,
                    title: property.title,
                    property_type: property.property_type,
                    transaction_type: property.transaction_type,
                    price: property.price,
                    area: property.area,
                    municipality: property.municipality,
                    size_net_sqm: property.size_net_sqm,
                    bedrooms: property.bedrooms,
                    bathrooms: property.bathrooms,
                    match_score: scored.score,
                    breakdown: scored.breakdown,
                })
            })
            .collect();

        // Sort by score (descending), then by price (ascending, unpriced last)
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| match (a.price, b.price) {
                    (Some(pa), Some(pb)) => {
                        pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal)
                    }
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
        });

        matches.truncate(opts.limit);

        PropertyMatchResult {
            matches,
            total_candidates,
        }
    }

    /// Find the clients a fresh listing should be proposed to
    ///
    /// The reverse direction of `find_properties`, used for new-listing
    /// alerts: the same scoring runs over every active client whose intent
    /// fits the listing.
    pub fn find_clients(
        &self,
        property: &PropertyListing,
        clients: Vec<ClientProfile>,
        opts: MatchOptions,
    ) -> ClientMatchResult {
        let total_candidates = clients.len();

        let mut matches: Vec<ScoredClient> = clients
            .into_iter()
            .filter(|client| is_active_client(client) && is_candidate(client, property))
            .filter_map(|client| {
                let scored = self.score_pair(&client, property);
                if scored.score < opts.min_score {
                    return None;
                }

                Some(ScoredClient {
                    id: client.id,
                    full_name: client.full_name,
                    intent: client.intent,
                    budget_min: client.budget_min,
                    budget_max: client.budget_max,
                    match_score: scored.score,
                    breakdown: scored.breakdown,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(opts.limit);

        ClientMatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
