// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{intent_allows_transaction, is_active_client, is_available, is_candidate, matches_type_preference};
pub use matcher::{ClientMatchResult, MatchOptions, Matcher, PropertyMatchResult};
pub use scoring::{bedroom_score, budget_score, calculate_match_score, location_score, size_score};
