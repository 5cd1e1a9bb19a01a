use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{FundingStage, InvestorType, Sector, UserRole};

/// Query parameters for the match list endpoint
///
/// `filter` and `sort` arrive as raw strings and are parsed in the handler
/// so unknown values produce a structured 400 instead of a deserializer error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMatchesQuery {
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_filter() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "score".to_string()
}

/// Request to advance a match along its lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMatchStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Request to create an introduction over a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIntroRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "sender_id", rename = "senderId")]
    pub sender_id: String,
    #[validate(length(
        min = 50,
        max = 500,
        message = "Message must be between 50 and 500 characters"
    ))]
    pub message: String,
}

/// Request to accept, decline or expire a pending introduction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RespondIntroRequest {
    #[validate(length(min = 1))]
    pub action: String,
}

/// Demo session login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoLoginRequest {
    pub role: UserRole,
}

/// Startup onboarding payload; field rules mirror the signup form limits
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartupOnboardingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    #[validate(length(min = 2, message = "Company name must be at least 2 characters"))]
    #[serde(alias = "company_name", rename = "companyName")]
    pub company_name: String,
    #[validate(length(min = 10, max = 100))]
    pub tagline: String,
    #[validate(length(min = 50, max = 1000))]
    pub description: String,
    #[validate(url)]
    #[serde(default)]
    pub website: Option<String>,
    #[validate(range(min = 2000, max = 2100))]
    #[serde(alias = "founded_year", rename = "foundedYear")]
    pub founded_year: u16,
    #[validate(range(min = 1, max = 10000))]
    #[serde(alias = "team_size", rename = "teamSize")]
    pub team_size: u32,
    #[validate(length(min = 2))]
    pub location: String,
    pub sector: Sector,
    pub stage: FundingStage,
    #[validate(range(min = 10000, message = "Funding target must be at least $10,000"))]
    #[serde(alias = "funding_target", rename = "fundingTarget")]
    pub funding_target: u64,
    #[serde(alias = "funding_raised", rename = "fundingRaised", default)]
    pub funding_raised: u64,
    #[validate(length(min = 1, max = 5), custom(function = validate_highlights))]
    #[serde(default)]
    pub highlights: Vec<String>,
    #[validate(url)]
    #[serde(alias = "pitch_deck_url", rename = "pitchDeckUrl", default)]
    pub pitch_deck_url: Option<String>,
}

/// Investor onboarding payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_check_sizes))]
pub struct InvestorOnboardingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    #[validate(length(min = 2, message = "Firm name must be at least 2 characters"))]
    #[serde(alias = "firm_name", rename = "firmName")]
    pub firm_name: String,
    #[validate(length(min = 2))]
    pub title: String,
    #[validate(length(min = 50, max = 500))]
    pub bio: String,
    #[validate(url)]
    #[serde(default)]
    pub website: Option<String>,
    #[validate(length(min = 2))]
    pub location: String,
    #[serde(alias = "investor_type", rename = "investorType")]
    pub investor_type: InvestorType,
    #[validate(range(min = 1000, message = "Minimum check size must be at least $1,000"))]
    #[serde(alias = "check_size_min", rename = "checkSizeMin")]
    pub check_size_min: u64,
    #[validate(range(min = 1000, message = "Maximum check size must be at least $1,000"))]
    #[serde(alias = "check_size_max", rename = "checkSizeMax")]
    pub check_size_max: u64,
    #[validate(length(min = 1, message = "Please select at least one stage"))]
    #[serde(alias = "preferred_stages", rename = "preferredStages")]
    pub preferred_stages: Vec<FundingStage>,
    #[validate(length(min = 1, message = "Please select at least one sector"))]
    #[serde(alias = "preferred_sectors", rename = "preferredSectors")]
    pub preferred_sectors: Vec<Sector>,
    #[validate(length(min = 100, max = 1000))]
    pub thesis: String,
    #[serde(alias = "portfolio_count", rename = "portfolioCount", default)]
    pub portfolio_count: u32,
}

fn validate_highlights(highlights: &[String]) -> Result<(), ValidationError> {
    if highlights.iter().any(|h| h.trim().len() < 10) {
        let mut err = ValidationError::new("highlight_too_short");
        err.message = Some("Each highlight must be at least 10 characters".into());
        return Err(err);
    }
    Ok(())
}

fn validate_check_sizes(req: &InvestorOnboardingRequest) -> Result<(), ValidationError> {
    if req.check_size_max < req.check_size_min {
        let mut err = ValidationError::new("check_size_range");
        err.message = Some("Maximum check size must be greater than or equal to minimum".into());
        return Err(err);
    }
    Ok(())
}
