use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    ErrorResponse, InvestorOnboardingRequest, InvestorProfile, OnboardingResponse,
    StartupOnboardingRequest, StartupProfile, UserRole,
};
use crate::routes::{store_error_response, AppState};

/// Configure onboarding routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/onboarding/startup", web::post().to(complete_startup))
        .route("/onboarding/investor", web::post().to(complete_investor));
}

/// Complete startup onboarding
///
/// POST /api/v1/onboarding/startup
///
/// Creates the startup entity from the validated payload, generates matches
/// against every stored investor with the real scorer, and marks the account
/// onboarded.
async fn complete_startup(
    state: web::Data<AppState>,
    req: web::Json<StartupOnboardingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Startup onboarding validation failed: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.store.get_profile(&req.profile_id) {
        Ok(p) => p,
        Err(e) => return store_error_response(e),
    };
    if profile.role != UserRole::Startup {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "wrong_role".to_string(),
            message: "Profile is not a startup account".to_string(),
            status_code: 400,
        });
    }
    // One startup entity per account; repeat submissions are edits, not onboarding
    if profile.onboarding_complete {
        return HttpResponse::Conflict().json(ErrorResponse {
            error: "already_onboarded".to_string(),
            message: "Profile has already completed onboarding".to_string(),
            status_code: 409,
        });
    }

    let now = Utc::now();
    let startup = StartupProfile {
        id: Uuid::new_v4().to_string(),
        profile_id: req.profile_id.clone(),
        company_name: req.company_name.clone(),
        tagline: req.tagline.clone(),
        description: req.description.clone(),
        website: req.website.clone(),
        logo_url: None,
        founded_year: req.founded_year,
        team_size: req.team_size,
        location: req.location.clone(),
        sector: req.sector,
        stage: req.stage,
        funding_target: req.funding_target,
        funding_raised: req.funding_raised,
        pitch_deck_url: req.pitch_deck_url.clone(),
        highlights: req.highlights.clone(),
        created_at: now,
        updated_at: now,
    };

    let investors = match state.store.list_investors() {
        Ok(i) => i,
        Err(e) => return store_error_response(e),
    };

    let result = state
        .matcher
        .match_startup(&startup, &investors, state.match_limit);
    let matches_created = result.matches.len();

    if let Err(e) = state.store.insert_startup(startup) {
        return store_error_response(e);
    }
    if let Err(e) = state.store.insert_matches(result.matches) {
        return store_error_response(e);
    }
    let profile = match state.store.mark_onboarded(&req.profile_id) {
        Ok(p) => p,
        Err(e) => return store_error_response(e),
    };

    tracing::info!(
        "Startup onboarding complete for {}: {} matches from {} candidates",
        req.profile_id,
        matches_created,
        result.total_candidates
    );

    HttpResponse::Ok().json(OnboardingResponse {
        profile,
        matches_created,
        total_candidates: result.total_candidates,
    })
}

/// Complete investor onboarding
///
/// POST /api/v1/onboarding/investor
async fn complete_investor(
    state: web::Data<AppState>,
    req: web::Json<InvestorOnboardingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Investor onboarding validation failed: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = match state.store.get_profile(&req.profile_id) {
        Ok(p) => p,
        Err(e) => return store_error_response(e),
    };
    if profile.role != UserRole::Investor {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "wrong_role".to_string(),
            message: "Profile is not an investor account".to_string(),
            status_code: 400,
        });
    }
    // One investor entity per account; repeat submissions are edits, not onboarding
    if profile.onboarding_complete {
        return HttpResponse::Conflict().json(ErrorResponse {
            error: "already_onboarded".to_string(),
            message: "Profile has already completed onboarding".to_string(),
            status_code: 409,
        });
    }

    let now = Utc::now();
    let investor = InvestorProfile {
        id: Uuid::new_v4().to_string(),
        profile_id: req.profile_id.clone(),
        firm_name: req.firm_name.clone(),
        title: req.title.clone(),
        bio: req.bio.clone(),
        website: req.website.clone(),
        logo_url: None,
        location: req.location.clone(),
        investor_type: req.investor_type,
        check_size_min: req.check_size_min,
        check_size_max: req.check_size_max,
        preferred_stages: req.preferred_stages.clone(),
        preferred_sectors: req.preferred_sectors.clone(),
        portfolio_count: req.portfolio_count,
        thesis: req.thesis.clone(),
        created_at: now,
        updated_at: now,
    };

    let startups = match state.store.list_startups() {
        Ok(s) => s,
        Err(e) => return store_error_response(e),
    };

    let result = state
        .matcher
        .match_investor(&investor, &startups, state.match_limit);
    let matches_created = result.matches.len();

    if let Err(e) = state.store.insert_investor(investor) {
        return store_error_response(e);
    }
    if let Err(e) = state.store.insert_matches(result.matches) {
        return store_error_response(e);
    }
    let profile = match state.store.mark_onboarded(&req.profile_id) {
        Ok(p) => p,
        Err(e) => return store_error_response(e),
    };

    tracing::info!(
        "Investor onboarding complete for {}: {} matches from {} candidates",
        req.profile_id,
        matches_created,
        result.total_candidates
    );

    HttpResponse::Ok().json(OnboardingResponse {
        profile,
        matches_created,
        total_candidates: result.total_candidates,
    })
}
