use actix_web::{web, HttpResponse, Responder};

use crate::models::{DemoLoginRequest, SessionResponse, UserRole};
use crate::routes::{store_error_response, AppState};
use crate::services::{DEMO_INVESTOR_PROFILE, DEMO_STARTUP_PROFILE};

/// Configure demo session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/session/demo", web::post().to(demo_login));
}

/// Log in as one of the seeded demo accounts
///
/// POST /api/v1/session/demo
///
/// Request body:
/// ```json
/// { "role": "startup|investor" }
/// ```
///
/// Returns the demo profile together with its matches and intro requests,
/// the same payload a real session bootstrap would carry.
async fn demo_login(state: web::Data<AppState>, req: web::Json<DemoLoginRequest>) -> impl Responder {
    let profile_id = match req.role {
        UserRole::Startup => DEMO_STARTUP_PROFILE,
        UserRole::Investor => DEMO_INVESTOR_PROFILE,
    };

    let profile = match state.store.get_profile(profile_id) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Demo profile missing ({}): {}", profile_id, e);
            return store_error_response(e);
        }
    };

    let matches = match state.store.matches_for_profile(profile_id) {
        Ok(m) => m,
        Err(e) => return store_error_response(e),
    };

    let intro_requests = match state.store.intros_for_profile(profile_id) {
        Ok(i) => i,
        Err(e) => return store_error_response(e),
    };

    tracing::info!(
        "Demo login as {:?}: {} matches, {} intros",
        req.role,
        matches.len(),
        intro_requests.len()
    );

    HttpResponse::Ok().json(SessionResponse {
        profile,
        matches,
        intro_requests,
    })
}
