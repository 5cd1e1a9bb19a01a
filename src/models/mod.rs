// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FundingStage, IntroRequest, IntroStatus, InvestorProfile, InvestorType, MatchCategory,
    MatchCriteria, MatchRecord, MatchStatus, MatchSummary, Profile, ScoreBreakdown, ScoringWeights,
    Sector, SortKey, StartupProfile, UserRole,
};
pub use requests::{
    CreateIntroRequest, DemoLoginRequest, InvestorOnboardingRequest, ListMatchesQuery,
    RespondIntroRequest, StartupOnboardingRequest, UpdateMatchStatusRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, IntroCreatedResponse, IntroResolvedResponse,
    ListMatchesResponse, MatchStatusResponse, OnboardingResponse, SessionResponse,
};
