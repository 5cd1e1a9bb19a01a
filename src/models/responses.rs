use serde::{Deserialize, Serialize};

use crate::models::domain::{IntroRequest, MatchRecord, MatchSummary, Profile};

/// Response for the match list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMatchesResponse {
    pub matches: Vec<MatchSummary>,
    /// Size of the viewer's unfiltered match list
    pub total: usize,
}

/// Response after a status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatusResponse {
    #[serde(rename = "match")]
    pub record: MatchRecord,
}

/// Response after creating an introduction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroCreatedResponse {
    pub success: bool,
    pub intro: IntroRequest,
}

/// Response after resolving an introduction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroResolvedResponse {
    pub success: bool,
    pub intro: IntroRequest,
}

/// Everything a freshly logged-in demo session needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub profile: Profile,
    pub matches: Vec<MatchSummary>,
    #[serde(rename = "introRequests")]
    pub intro_requests: Vec<IntroRequest>,
}

/// Response after completing onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub profile: Profile,
    #[serde(rename = "matchesCreated")]
    pub matches_created: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
