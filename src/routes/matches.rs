use crate::config::MatchingConfig;
use crate::core::{MatchOptions, Matcher};
use crate::models::{
    ErrorResponse, FindClientsRequest, FindClientsResponse, FindPropertiesRequest,
    FindPropertiesResponse, HealthResponse, ScorePairRequest,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingConfig,
}

impl AppState {
    /// Resolves per-request knobs against the configured defaults and caps.
    fn match_options(&self, limit: Option<u16>, min_score: Option<f64>) -> MatchOptions {
        let limit = limit
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit);
        MatchOptions {
            limit: limit as usize,
            min_score: min_score.unwrap_or(self.matching.min_score),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/find", web::post().to(find_properties))
        .route("/matches/clients", web::post().to(find_clients));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single client / property pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "client": { ... },
///   "property": { ... }
/// }
/// ```
///
/// Always returns a score with its per-dimension breakdown; incomplete
/// records score their missing dimensions, they never error.
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let result = state.matcher.score_pair(&req.client, &req.property);

    tracing::debug!(
        client = %req.client.id,
        property = %req.property.id,
        score = result.score,
        "Scored pair"
    );

    HttpResponse::Ok().json(result)
}

/// Rank a pool of listings for one client
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "client": { ... },
///   "properties": [ ... ],
///   "limit": 20,
///   "minScore": 30.0
/// }
/// ```
async fn find_properties(
    state: web::Data<AppState>,
    req: web::Json<FindPropertiesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for find_properties request: field_errors={:?}",
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let opts = state.match_options(req.limit, req.min_score);

    tracing::info!(
        client = %req.client.id,
        candidates = req.properties.len(),
        limit = opts.limit,
        "Finding properties for client"
    );

    let result = state.matcher.find_properties(&req.client, req.properties, opts);

    let response = FindPropertiesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for client {} (from {} candidates)",
        response.matches.len(),
        req.client.id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Rank interested clients for one listing
///
/// POST /api/v1/matches/clients
///
/// The reverse direction, used when a fresh listing comes in and the agency
/// wants to know who to call first.
async fn find_clients(
    state: web::Data<AppState>,
    req: web::Json<FindClientsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for find_clients request: field_errors={:?}",
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let opts = state.match_options(req.limit, req.min_score);

    tracing::info!(
        property = %req.property.id,
        candidates = req.clients.len(),
        limit = opts.limit,
        "Finding clients for listing"
    );

    let result = state.matcher.find_clients(&req.property, req.clients, opts);

    let response = FindClientsResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} clients for listing {} (from {} candidates)",
        response.matches.len(),
        req.property.id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
