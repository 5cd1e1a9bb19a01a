use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateIntroRequest, ErrorResponse, IntroCreatedResponse, IntroResolvedResponse, IntroStatus,
    RespondIntroRequest,
};
use crate::routes::{store_error_response, AppState};

/// Configure introduction request routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/intros", web::post().to(create_intro))
        .route("/intros", web::get().to(list_intros))
        .route("/intros/{id}/respond", web::post().to(respond_intro));
}

/// Create an introduction request over a match
///
/// POST /api/v1/intros
///
/// Request body:
/// ```json
/// { "matchId": "string", "senderId": "string", "message": "string" }
/// ```
async fn create_intro(
    state: web::Data<AppState>,
    req: web::Json<CreateIntroRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for intro request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .store
        .create_intro(&req.match_id, &req.sender_id, req.message.clone())
    {
        Ok(intro) => {
            tracing::info!(
                "Intro {} created: {} -> {} over match {}",
                intro.id,
                intro.sender_id,
                intro.receiver_id,
                intro.match_id
            );
            HttpResponse::Ok().json(IntroCreatedResponse {
                success: true,
                intro,
            })
        }
        Err(e) => {
            tracing::warn!("Intro creation failed for match {}: {}", req.match_id, e);
            store_error_response(e)
        }
    }
}

/// Intros visible to a profile, as sender or receiver
///
/// GET /api/v1/intros?profileId={id}
async fn list_intros(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let profile_id = match query.get("profileId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "missing_profile_id".to_string(),
                message: "profileId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.store.intros_for_profile(profile_id) {
        Ok(intros) => HttpResponse::Ok().json(serde_json::json!({
            "profileId": profile_id,
            "count": intros.len(),
            "intros": intros,
        })),
        Err(e) => store_error_response(e),
    }
}

/// Resolve a pending introduction request
///
/// POST /api/v1/intros/{id}/respond
///
/// Request body:
/// ```json
/// { "action": "accept|decline|expire" }
/// ```
async fn respond_intro(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<RespondIntroRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let status = match req.action.to_lowercase().as_str() {
        "accept" => IntroStatus::Accepted,
        "decline" => IntroStatus::Declined,
        "expire" => IntroStatus::Expired,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_action".to_string(),
                message: "Action must be one of: accept, decline, expire".to_string(),
                status_code: 400,
            });
        }
    };

    let intro_id = path.into_inner();
    match state.store.resolve_intro(&intro_id, status) {
        Ok(intro) => {
            tracing::info!("Intro {} resolved to {:?}", intro_id, status);
            HttpResponse::Ok().json(IntroResolvedResponse {
                success: true,
                intro,
            })
        }
        Err(e) => {
            tracing::warn!("Intro resolution rejected for {}: {}", intro_id, e);
            store_error_response(e)
        }
    }
}
