use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Startup,
    Investor,
}

/// Funding stage of a startup / preferred stage of an investor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Growth,
}

/// Industry sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    AiMl,
    Fintech,
    Healthtech,
    Cleantech,
    Saas,
    Consumer,
    Edtech,
    Foodtech,
    Agtech,
    Biotech,
    Hardware,
    Marketplace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestorType {
    Angel,
    Vc,
    FamilyOffice,
    Corporate,
}

/// Account-level profile shared by both roles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "onboardingComplete", default)]
    pub onboarding_complete: bool,
}

/// Startup entity produced by onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupProfile {
    pub id: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "foundedYear")]
    pub founded_year: u16,
    #[serde(rename = "teamSize")]
    pub team_size: u32,
    pub location: String,
    pub sector: Sector,
    pub stage: FundingStage,
    #[serde(rename = "fundingTarget")]
    pub funding_target: u64,
    #[serde(rename = "fundingRaised")]
    pub funding_raised: u64,
    #[serde(rename = "pitchDeckUrl", default)]
    pub pitch_deck_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Investor entity produced by onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub id: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "firmName")]
    pub firm_name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    pub location: String,
    #[serde(rename = "investorType")]
    pub investor_type: InvestorType,
    #[serde(rename = "checkSizeMin")]
    pub check_size_min: u64,
    #[serde(rename = "checkSizeMax")]
    pub check_size_max: u64,
    #[serde(rename = "preferredStages")]
    pub preferred_stages: Vec<FundingStage>,
    #[serde(rename = "preferredSectors")]
    pub preferred_sectors: Vec<Sector>,
    #[serde(rename = "portfolioCount")]
    pub portfolio_count: u32,
    pub thesis: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle of a match
///
/// Transitions are one-way: pending -> viewed -> intro-requested -> connected,
/// with declined reachable from any state before connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Pending,
    Viewed,
    IntroRequested,
    Connected,
    Declined,
}

impl MatchStatus {
    /// Whether moving from `self` to `to` is a legal forward transition
    pub fn can_transition_to(self, to: MatchStatus) -> bool {
        use MatchStatus::*;
        match (self, to) {
            (Pending, Viewed)
            | (Pending, IntroRequested)
            | (Viewed, IntroRequested)
            | (IntroRequested, Connected) => true,
            (from, Declined) => from != Connected && from != Declined,
            _ => false,
        }
    }
}

/// Lifecycle of an introduction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntroStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
}

impl IntroStatus {
    /// Intros only ever move out of pending
    pub fn can_transition_to(self, to: IntroStatus) -> bool {
        self == IntroStatus::Pending && to != IntroStatus::Pending
    }
}

/// The four sub-scores that make up a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "stageAlignment")]
    pub stage_alignment: u8,
    #[serde(rename = "sectorMatch")]
    pub sector_match: u8,
    #[serde(rename = "checkSizeFit")]
    pub check_size_fit: u8,
    #[serde(rename = "locationBonus")]
    pub location_bonus: u8,
}

impl ScoreBreakdown {
    /// Sum of the four components; the match total is defined as this sum
    pub fn total(&self) -> u8 {
        self.stage_alignment + self.sector_match + self.check_size_fit + self.location_bonus
    }
}

/// A scored pairing between one startup and one investor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    #[serde(rename = "startupId")]
    pub startup_id: String,
    #[serde(rename = "investorId")]
    pub investor_id: String,
    pub score: u8,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
    pub status: MatchStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "viewedAt", default)]
    pub viewed_at: Option<DateTime<Utc>>,
}

/// A user-initiated ask to connect over a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroRequest {
    pub id: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "receiverId")]
    pub receiver_id: String,
    pub message: String,
    pub status: IntroStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "respondedAt", default)]
    pub responded_at: Option<DateTime<Utc>>,
}

/// Match joined with the counterparty's display data for one viewer
///
/// A startup viewer sees the investor firm, an investor viewer sees the
/// startup company. This is the shape the filter/sort pipeline operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    #[serde(rename = "counterpartyId")]
    pub counterparty_id: String,
    #[serde(rename = "counterpartyName")]
    pub counterparty_name: String,
    #[serde(rename = "counterpartyLocation")]
    pub counterparty_location: String,
    pub score: u8,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
    pub status: MatchStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Category filter for the match list; selections are mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCategory {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "80+")]
    HighScore,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "intro-requested")]
    IntroRequested,
}

/// Sort key for the match list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Recent,
}

/// Filter/sort criteria selected by the viewer
#[derive(Debug, Clone, Default)]
pub struct MatchCriteria {
    pub query: Option<String>,
    pub category: MatchCategory,
    pub sort: SortKey,
}

/// Scoring weights; caps for the four sub-scores, must sum to 100
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub stage: u8,
    pub sector: u8,
    pub check_size: u8,
    pub location: u8,
}

impl ScoringWeights {
    pub fn total(&self) -> u16 {
        self.stage as u16 + self.sector as u16 + self.check_size as u16 + self.location as u16
    }

    /// Weights are only usable when the caps sum to exactly 100
    pub fn is_valid(&self) -> bool {
        self.total() == 100
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stage: 25,
            sector: 35,
            check_size: 25,
            location: 15,
        }
    }
}
