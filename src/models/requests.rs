use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::models::domain::{ClientProfile, PropertyListing};
use crate::normalize::EntityKind;

/// Request to score a single client / property pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    pub client: ClientProfile,
    pub property: PropertyListing,
}

/// Request to rank a pool of listings for one client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindPropertiesRequest {
    pub client: ClientProfile,
    pub properties: Vec<PropertyListing>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_score: Option<f64>,
}

/// Request to rank interested clients for one listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindClientsRequest {
    pub property: PropertyListing,
    pub clients: Vec<ClientProfile>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_score: Option<f64>,
}

/// Request to normalize already-parsed import rows
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NormalizeRowsRequest {
    pub entity: EntityKind,
    #[validate(length(max = 10000))]
    pub rows: Vec<Map<String, Value>>,
}

/// Query string for the CSV import endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvImportQuery {
    pub entity: EntityKind,
}
