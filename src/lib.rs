//! propmatch - matching and import service for the Oikos real-estate CRM
//!
//! This library powers two things: the client/property match scoring used to
//! rank listings for a client (and clients for a fresh listing), and the
//! enum normalization pipeline that cleans up CSV imports from agency
//! spreadsheets, Greek and English alike.

pub mod config;
pub mod core;
pub mod models;
pub mod normalize;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, MatchOptions, Matcher};
pub use crate::models::{
    ClientProfile, FindPropertiesRequest, FindPropertiesResponse, MatchScore, PropertyListing,
    ScoreBreakdown, ScoringWeights,
};
pub use crate::normalize::{normalize_enum_value, EntityKind, EnumMapping, ImportReport};
