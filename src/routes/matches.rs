use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::apply_criteria;
use crate::models::{
    ErrorResponse, HealthResponse, ListMatchesQuery, ListMatchesResponse, MatchCategory,
    MatchCriteria, MatchStatus, MatchStatusResponse, SortKey, UpdateMatchStatusRequest,
};
use crate::routes::{store_error_response, AppState};

/// Configure match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(list_matches))
        .route("/matches/{id}/status", web::post().to(update_status));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List a viewer's matches with filter/sort criteria applied
///
/// GET /api/v1/matches?profileId={id}&query={q}&filter={all|80+|pending|intro-requested}&sort={score|recent}
async fn list_matches(
    state: web::Data<AppState>,
    query: web::Query<ListMatchesQuery>,
) -> impl Responder {
    let category = match parse_category(&query.filter) {
        Some(c) => c,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_filter".to_string(),
                message: "Filter must be one of: all, 80+, pending, intro-requested".to_string(),
                status_code: 400,
            });
        }
    };

    let sort = match parse_sort(&query.sort) {
        Some(s) => s,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_sort".to_string(),
                message: "Sort must be one of: score, recent".to_string(),
                status_code: 400,
            });
        }
    };

    let summaries = match state.store.matches_for_profile(&query.profile_id) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to list matches for {}: {}", query.profile_id, e);
            return store_error_response(e);
        }
    };

    let total = summaries.len();
    let criteria = MatchCriteria {
        query: query.query.clone(),
        category,
        sort,
    };
    let matches = apply_criteria(&summaries, &criteria);

    tracing::debug!(
        "Returning {} of {} matches for profile {}",
        matches.len(),
        total,
        query.profile_id
    );

    HttpResponse::Ok().json(ListMatchesResponse { matches, total })
}

/// Advance a match along its lifecycle
///
/// POST /api/v1/matches/{id}/status
///
/// Request body:
/// ```json
/// { "status": "viewed|intro-requested|connected|declined" }
/// ```
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateMatchStatusRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let status = match req.status.to_lowercase().as_str() {
        "viewed" => MatchStatus::Viewed,
        "intro-requested" => MatchStatus::IntroRequested,
        "connected" => MatchStatus::Connected,
        "declined" => MatchStatus::Declined,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_status".to_string(),
                message: "Status must be one of: viewed, intro-requested, connected, declined"
                    .to_string(),
                status_code: 400,
            });
        }
    };

    let match_id = path.into_inner();
    match state.store.update_match_status(&match_id, status) {
        Ok(record) => {
            tracing::info!("Match {} moved to {:?}", match_id, status);
            HttpResponse::Ok().json(MatchStatusResponse { record })
        }
        Err(e) => {
            tracing::warn!("Status update rejected for match {}: {}", match_id, e);
            store_error_response(e)
        }
    }
}

fn parse_category(raw: &str) -> Option<MatchCategory> {
    match raw {
        "all" => Some(MatchCategory::All),
        "80+" => Some(MatchCategory::HighScore),
        "pending" => Some(MatchCategory::Pending),
        "intro-requested" => Some(MatchCategory::IntroRequested),
        _ => None,
    }
}

fn parse_sort(raw: &str) -> Option<SortKey> {
    match raw {
        "score" => Some(SortKey::Score),
        "recent" => Some(SortKey::Recent),
        _ => None,
    }
}
