// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ClientProfile, MatchScore, PenaltyCurves, PropertyListing, ScoreBreakdown, ScoredClient,
    ScoredProperty, ScoringWeights,
};
pub use requests::{
    CsvImportQuery, FindClientsRequest, FindPropertiesRequest, NormalizeRowsRequest,
    ScorePairRequest,
};
pub use responses::{ErrorResponse, FindClientsResponse, FindPropertiesResponse, HealthResponse};
