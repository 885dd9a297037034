use serde::{Deserialize, Serialize};

/// CRM client record with stated search preferences
///
/// Every preference field may be absent: clients are imported from
/// spreadsheets and filled in over time. Absent preferences are treated as
/// "no constraint" by the scoring code, never as a penalty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: String,
    pub full_name: String,
    /// BUY / RENT (demand side) or SELL / LET (supply side)
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub budget_min: Option<f64>,
    #[serde(default)]
    pub budget_max: Option<f64>,
    /// Preferred neighbourhoods, free text as entered by the agent
    #[serde(default)]
    pub preferred_areas: Vec<String>,
    #[serde(default)]
    pub preferred_municipalities: Vec<String>,
    /// Acceptable property types (canonical tokens); empty = any
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub min_size_sqm: Option<f64>,
    #[serde(default)]
    pub max_size_sqm: Option<f64>,
    #[serde(default)]
    pub min_bedrooms: Option<u8>,
    #[serde(default = "default_client_status")]
    pub status: String,
}

fn default_client_status() -> String {
    "ACTIVE".to_string()
}

/// Property listing as stored by the CRM
///
/// `price`, `size_net_sqm` and the room counts are nullable in the schema
/// (price-on-request listings, land without rooms), so they stay optional
/// here and the scoring code degrades per dimension instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub property_type: String,
    /// SALE or RENT
    pub transaction_type: String,
    #[serde(default = "default_listing_status")]
    pub status: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub size_net_sqm: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<u8>,
}

fn default_listing_status() -> String {
    "AVAILABLE".to_string()
}

/// Per-dimension sub-scores, each on the 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub location: f64,
    pub size: f64,
    pub bedrooms: f64,
}

impl ScoreBreakdown {
    /// Dimension name/value pairs, in weight order
    pub fn dimensions(&self) -> [(&'static str, f64); 4] {
        [
            ("budget", self.budget),
            ("location", self.location),
            ("size", self.size),
            ("bedrooms", self.bedrooms),
        ]
    }
}

/// Result of scoring one client against one property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Property candidate that passed filtering and scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProperty {
    pub id: String,
    pub title: String,
    pub property_type: String,
    pub transaction_type: String,
    pub price: Option<f64>,
    pub area: Option<String>,
    pub municipality: Option<String>,
    pub size_net_sqm: Option<f64>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Client candidate for a new-listing alert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredClient {
    pub id: String,
    pub full_name: String,
    pub intent: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Relative importance of each scoring dimension
///
/// Weights are normalized by their sum when combined, so they do not have
/// to add up to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub budget: f64,
    pub location: f64,
    pub size: f64,
    pub bedrooms: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 0.35,
            location: 0.25,
            size: 0.20,
            bedrooms: 0.20,
        }
    }
}

/// Shape of the graded penalties applied outside a preferred range
///
/// Tolerances are relative deviations at which a dimension bottoms out,
/// e.g. a `budget_tolerance` of 0.5 means a price 50% over budget scores 0.
#[derive(Debug, Clone, Copy)]
pub struct PenaltyCurves {
    pub budget_tolerance: f64,
    pub size_tolerance: f64,
    /// Points lost per missing bedroom
    pub bedroom_step: f64,
    /// Location score granted on a municipality-only match
    pub municipality_credit: f64,
}

impl Default for PenaltyCurves {
    fn default() -> Self {
        Self {
            budget_tolerance: 0.5,
            size_tolerance: 0.5,
            bedroom_step: 35.0,
            municipality_credit: 60.0,
        }
    }
}
