use crate::models::{InvestorProfile, ScoreBreakdown, ScoringWeights, StartupProfile};

/// A computed match score: the total and the four sub-scores it sums from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
}

/// Calculate a match score (0-100) for a startup/investor pair
///
/// Scoring formula:
/// score = stage_alignment   (full weight if the startup's stage is in the
///                            investor's preferred stages)
///       + sector_match      (full weight if the startup's sector is in the
///                            investor's preferred sectors)
///       + check_size_fit    (full weight if the funding target falls inside
///                            the investor's check-size range)
///       + location_bonus    (full weight on a case-insensitive location match)
///
/// Deterministic, no side effects. The total is the arithmetic sum of the
/// breakdown components and is bounded by the weight caps, which sum to 100.
pub fn calculate_match_score(
    startup: &StartupProfile,
    investor: &InvestorProfile,
    weights: &ScoringWeights,
) -> MatchScore {
    let breakdown = ScoreBreakdown {
        stage_alignment: stage_alignment_score(startup, investor, weights.stage),
        sector_match: sector_match_score(startup, investor, weights.sector),
        check_size_fit: check_size_fit_score(startup, investor, weights.check_size),
        location_bonus: location_bonus_score(startup, investor, weights.location),
    };

    MatchScore {
        total: breakdown.total(),
        breakdown,
    }
}

/// Full weight iff the investor lists the startup's stage
#[inline]
fn stage_alignment_score(startup: &StartupProfile, investor: &InvestorProfile, weight: u8) -> u8 {
    if investor.preferred_stages.contains(&startup.stage) {
        weight
    } else {
        0
    }
}

/// Full weight iff the investor lists the startup's sector
#[inline]
fn sector_match_score(startup: &StartupProfile, investor: &InvestorProfile, weight: u8) -> u8 {
    if investor.preferred_sectors.contains(&startup.sector) {
        weight
    } else {
        0
    }
}

/// Full weight iff the funding target falls inside the check-size range
#[inline]
fn check_size_fit_score(startup: &StartupProfile, investor: &InvestorProfile, weight: u8) -> u8 {
    if startup.funding_target >= investor.check_size_min
        && startup.funding_target <= investor.check_size_max
    {
        weight
    } else {
        0
    }
}

/// Full weight iff the two locations match, ignoring case and whitespace
#[inline]
fn location_bonus_score(startup: &StartupProfile, investor: &InvestorProfile, weight: u8) -> u8 {
    if startup
        .location
        .trim()
        .eq_ignore_ascii_case(investor.location.trim())
    {
        weight
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestorType, Sector};
    use chrono::Utc;

    fn create_test_startup(stage: FundingStage, funding_target: u64) -> StartupProfile {
        StartupProfile {
            id: "startup-1".to_string(),
            profile_id: "profile-1".to_string(),
            company_name: "Test Startup".to_string(),
            tagline: "A test startup".to_string(),
            description: "A startup used in tests".to_string(),
            website: None,
            logo_url: None,
            founded_year: 2022,
            team_size: 5,
            location: "San Francisco, CA".to_string(),
            sector: Sector::Saas,
            stage,
            funding_target,
            funding_raised: 0,
            pitch_deck_url: None,
            highlights: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_investor(check_min: u64, check_max: u64) -> InvestorProfile {
        InvestorProfile {
            id: "investor-1".to_string(),
            profile_id: "profile-2".to_string(),
            firm_name: "Test Capital".to_string(),
            title: "Partner".to_string(),
            bio: "An investor used in tests".to_string(),
            website: None,
            logo_url: None,
            location: "San Francisco, CA".to_string(),
            investor_type: InvestorType::Vc,
            check_size_min: check_min,
            check_size_max: check_max,
            preferred_stages: vec![FundingStage::Seed, FundingStage::SeriesA],
            preferred_sectors: vec![Sector::Saas, Sector::Fintech],
            portfolio_count: 10,
            thesis: "Early stage software".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_score_within_valid_range() {
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let investor = create_test_investor(100_000, 600_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert!(score.total <= 100);
    }

    #[test]
    fn test_total_equals_breakdown_sum() {
        let startup = create_test_startup(FundingStage::Growth, 5_000_000);
        let investor = create_test_investor(25_000, 250_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.total, score.breakdown.total());
    }

    #[test]
    fn test_stage_in_preferred_list_earns_full_weight() {
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let investor = create_test_investor(100_000, 600_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.stage_alignment, 25);
    }

    #[test]
    fn test_stage_outside_preferred_list_earns_zero() {
        let startup = create_test_startup(FundingStage::Growth, 500_000);
        let investor = create_test_investor(100_000, 600_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.stage_alignment, 0);
    }

    #[test]
    fn test_check_size_no_overlap_earns_zero() {
        // Target 500k against a 25k-250k check range
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let investor = create_test_investor(25_000, 250_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.check_size_fit, 0);
    }

    #[test]
    fn test_check_size_overlap_earns_full_weight() {
        // Target 500k against a 100k-600k check range
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let investor = create_test_investor(100_000, 600_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.check_size_fit, 25);
    }

    #[test]
    fn test_location_match_is_case_insensitive() {
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let mut investor = create_test_investor(100_000, 600_000);
        investor.location = "san francisco, ca".to_string();
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.location_bonus, 15);
    }

    #[test]
    fn test_different_locations_earn_no_bonus() {
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let mut investor = create_test_investor(100_000, 600_000);
        investor.location = "New York, NY".to_string();
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.breakdown.location_bonus, 0);
    }

    #[test]
    fn test_perfect_match_scores_100() {
        let startup = create_test_startup(FundingStage::Seed, 500_000);
        let investor = create_test_investor(100_000, 600_000);
        let score = calculate_match_score(&startup, &investor, &ScoringWeights::default());

        assert_eq!(score.total, 100);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let startup = create_test_startup(FundingStage::SeriesA, 2_000_000);
        let investor = create_test_investor(500_000, 5_000_000);
        let weights = ScoringWeights::default();

        let first = calculate_match_score(&startup, &investor, &weights);
        let second = calculate_match_score(&startup, &investor, &weights);

        assert_eq!(first, second);
    }
}
