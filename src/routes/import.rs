use crate::models::{CsvImportQuery, ErrorResponse, NormalizeRowsRequest};
use crate::normalize;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure import routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/import/normalize", web::post().to(normalize_rows))
        .route("/import/csv", web::post().to(import_csv));
}

/// Normalize enum columns of already-parsed import rows
///
/// POST /api/v1/import/normalize
///
/// Request body:
/// ```json
/// {
///   "entity": "property",
///   "rows": [ { "propertyType": "Διαμέρισμα", ... } ]
/// }
/// ```
///
/// Unrecognized values are nulled out and reported per row; the call itself
/// never fails on dirty data.
async fn normalize_rows(req: web::Json<NormalizeRowsRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for normalize request: field_errors={:?}",
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let report = normalize::normalize_rows(req.entity, req.rows);

    HttpResponse::Ok().json(report)
}

/// Import a CSV export end to end
///
/// POST /api/v1/import/csv?entity=property
///
/// The body is the raw CSV file. Parsing failures are the caller's data
/// problem and come back as 400.
async fn import_csv(query: web::Query<CsvImportQuery>, body: web::Bytes) -> impl Responder {
    match normalize::import_csv(query.entity, body.as_ref()) {
        Ok(report) => {
            tracing::info!(
                entity = query.entity.as_str(),
                total = report.total,
                flagged = report.flagged_count,
                "Imported CSV batch"
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            tracing::info!("CSV import failed: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "CSV import failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
