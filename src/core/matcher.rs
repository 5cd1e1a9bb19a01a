use chrono::Utc;
use uuid::Uuid;

use crate::core::scoring::{calculate_match_score, MatchScore};
use crate::models::{InvestorProfile, MatchRecord, MatchStatus, ScoringWeights, StartupProfile};

/// Result of generating matches for one side of the marketplace
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchRecord>,
    pub total_candidates: usize,
}

/// Match generator - scores one profile against a candidate pool and keeps
/// the strongest pairings
///
/// Scoring itself is delegated to [`calculate_match_score`]; the matcher only
/// orchestrates ranking, thresholding and record creation.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: u8) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score: 0,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Generate matches for a startup against a pool of investors
    ///
    /// Every candidate is scored; candidates below the minimum score are
    /// dropped, the rest are ranked by score descending and truncated to
    /// `limit`. New records start in pending.
    pub fn match_startup(
        &self,
        startup: &StartupProfile,
        investors: &[InvestorProfile],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = investors.len();

        let mut matches: Vec<MatchRecord> = investors
            .iter()
            .filter_map(|investor| {
                let score = calculate_match_score(startup, investor, &self.weights);
                if score.total >= self.min_score {
                    Some(new_record(&startup.id, &investor.id, score))
                } else {
                    None
                }
            })
            .collect();

        rank_and_truncate(&mut matches, limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Generate matches for an investor against a pool of startups
    pub fn match_investor(
        &self,
        investor: &InvestorProfile,
        startups: &[StartupProfile],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = startups.len();

        let mut matches: Vec<MatchRecord> = startups
            .iter()
            .filter_map(|startup| {
                let score = calculate_match_score(startup, investor, &self.weights);
                if score.total >= self.min_score {
                    Some(new_record(&startup.id, &investor.id, score))
                } else {
                    None
                }
            })
            .collect();

        rank_and_truncate(&mut matches, limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn new_record(startup_id: &str, investor_id: &str, score: MatchScore) -> MatchRecord {
    MatchRecord {
        id: Uuid::new_v4().to_string(),
        startup_id: startup_id.to_string(),
        investor_id: investor_id.to_string(),
        score: score.total,
        score_breakdown: score.breakdown,
        status: MatchStatus::Pending,
        created_at: Utc::now(),
        viewed_at: None,
    }
}

fn rank_and_truncate(matches: &mut Vec<MatchRecord>, limit: usize) {
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestorType, Sector};

    fn create_startup(id: &str, stage: FundingStage, sector: Sector) -> StartupProfile {
        StartupProfile {
            id: id.to_string(),
            profile_id: format!("profile-{}", id),
            company_name: format!("Startup {}", id),
            tagline: "Tagline".to_string(),
            description: "Description".to_string(),
            website: None,
            logo_url: None,
            founded_year: 2023,
            team_size: 4,
            location: "Austin, TX".to_string(),
            sector,
            stage,
            funding_target: 500_000,
            funding_raised: 100_000,
            pitch_deck_url: None,
            highlights: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_investor(id: &str, stages: Vec<FundingStage>, sectors: Vec<Sector>) -> InvestorProfile {
        InvestorProfile {
            id: id.to_string(),
            profile_id: format!("profile-{}", id),
            firm_name: format!("Firm {}", id),
            title: "Partner".to_string(),
            bio: "Bio".to_string(),
            website: None,
            logo_url: None,
            location: "Austin, TX".to_string(),
            investor_type: InvestorType::Vc,
            check_size_min: 100_000,
            check_size_max: 1_000_000,
            preferred_stages: stages,
            preferred_sectors: sectors,
            portfolio_count: 12,
            thesis: "Thesis".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_match_startup_ranks_by_score() {
        let matcher = Matcher::with_default_weights();
        let startup = create_startup("s1", FundingStage::Seed, Sector::Fintech);

        let investors = vec![
            // Stage only
            create_investor("i1", vec![FundingStage::Seed], vec![Sector::Biotech]),
            // Stage and sector
            create_investor(
                "i2",
                vec![FundingStage::Seed],
                vec![Sector::Fintech, Sector::Saas],
            ),
            // Neither
            create_investor("i3", vec![FundingStage::Growth], vec![Sector::Hardware]),
        ];

        let result = matcher.match_startup(&startup, &investors, 10);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches[0].investor_id, "i2");
        for pair in result.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_min_score_threshold_drops_weak_candidates() {
        let matcher = Matcher::new(ScoringWeights::default(), 50);
        let startup = create_startup("s1", FundingStage::Growth, Sector::Agtech);

        // Nothing in common with the startup besides location and check size
        let investors = vec![create_investor(
            "i1",
            vec![FundingStage::Seed],
            vec![Sector::Fintech],
        )];

        let result = matcher.match_startup(&startup, &investors, 10);
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let investor = create_investor(
            "i1",
            vec![FundingStage::Seed],
            vec![Sector::Saas, Sector::Fintech],
        );

        let startups: Vec<StartupProfile> = (0..20)
            .map(|i| create_startup(&format!("s{}", i), FundingStage::Seed, Sector::Saas))
            .collect();

        let result = matcher.match_investor(&investor, &startups, 5);
        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_new_records_start_pending_with_consistent_breakdown() {
        let matcher = Matcher::with_default_weights();
        let startup = create_startup("s1", FundingStage::Seed, Sector::Saas);
        let investors = vec![create_investor(
            "i1",
            vec![FundingStage::Seed],
            vec![Sector::Saas],
        )];

        let result = matcher.match_startup(&startup, &investors, 10);
        let record = &result.matches[0];

        assert_eq!(record.status, MatchStatus::Pending);
        assert!(record.viewed_at.is_none());
        assert_eq!(record.score, record.score_breakdown.total());
    }
}
