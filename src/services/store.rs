use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    IntroRequest, IntroStatus, InvestorProfile, MatchRecord, MatchStatus, MatchSummary, Profile,
    StartupProfile, UserRole,
};

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Lock poisoned")]
    Poisoned,
}

impl StoreError {
    fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    profiles: HashMap<String, Profile>,
    startups: HashMap<String, StartupProfile>,
    investors: HashMap<String, InvestorProfile>,
    matches: HashMap<String, MatchRecord>,
    intros: HashMap<String, IntroRequest>,
}

/// In-memory backing store
///
/// Single-process repository behind one `RwLock`. Passed around explicitly as
/// shared state rather than living in a module-level global, so the core
/// scorer and filter stay testable in isolation. Nothing here is durable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Profiles

    pub fn insert_profile(&self, profile: Profile) -> Result<(), StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        tables.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    pub fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .profiles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("profile", id))
    }

    /// Flip the onboarding flag once the role entity exists
    pub fn mark_onboarded(&self, profile_id: &str) -> Result<Profile, StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let profile = tables
            .profiles
            .get_mut(profile_id)
            .ok_or_else(|| StoreError::not_found("profile", profile_id))?;
        profile.onboarding_complete = true;
        Ok(profile.clone())
    }

    // Startups

    pub fn insert_startup(&self, startup: StartupProfile) -> Result<(), StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        tables.startups.insert(startup.id.clone(), startup);
        Ok(())
    }

    pub fn get_startup(&self, id: &str) -> Result<StartupProfile, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .startups
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("startup", id))
    }

    pub fn startup_for_profile(&self, profile_id: &str) -> Result<StartupProfile, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .startups
            .values()
            .find(|s| s.profile_id == profile_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("startup", profile_id))
    }

    pub fn list_startups(&self) -> Result<Vec<StartupProfile>, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.startups.values().cloned().collect())
    }

    // Investors

    pub fn insert_investor(&self, investor: InvestorProfile) -> Result<(), StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        tables.investors.insert(investor.id.clone(), investor);
        Ok(())
    }

    pub fn get_investor(&self, id: &str) -> Result<InvestorProfile, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .investors
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("investor", id))
    }

    pub fn investor_for_profile(&self, profile_id: &str) -> Result<InvestorProfile, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .investors
            .values()
            .find(|i| i.profile_id == profile_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("investor", profile_id))
    }

    pub fn list_investors(&self) -> Result<Vec<InvestorProfile>, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.investors.values().cloned().collect())
    }

    // Matches

    pub fn insert_match(&self, record: MatchRecord) -> Result<(), StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        tables.matches.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn insert_matches(&self, records: Vec<MatchRecord>) -> Result<(), StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        for record in records {
            tables.matches.insert(record.id.clone(), record);
        }
        Ok(())
    }

    pub fn get_match(&self, id: &str) -> Result<MatchRecord, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .matches
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("match", id))
    }

    /// Matches for a viewer, joined with the counterparty's display data
    ///
    /// A startup account sees investor firms; an investor account sees
    /// startup companies. Matches whose counterparty entity is missing are
    /// skipped rather than surfaced half-joined.
    pub fn matches_for_profile(&self, profile_id: &str) -> Result<Vec<MatchSummary>, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let profile = tables
            .profiles
            .get(profile_id)
            .ok_or_else(|| StoreError::not_found("profile", profile_id))?;

        let summaries = match profile.role {
            UserRole::Startup => {
                let startup = tables
                    .startups
                    .values()
                    .find(|s| s.profile_id == profile_id)
                    .ok_or_else(|| StoreError::not_found("startup", profile_id))?;
                tables
                    .matches
                    .values()
                    .filter(|m| m.startup_id == startup.id)
                    .filter_map(|m| {
                        tables.investors.get(&m.investor_id).map(|inv| MatchSummary {
                            id: m.id.clone(),
                            counterparty_id: inv.id.clone(),
                            counterparty_name: inv.firm_name.clone(),
                            counterparty_location: inv.location.clone(),
                            score: m.score,
                            score_breakdown: m.score_breakdown,
                            status: m.status,
                            created_at: m.created_at,
                        })
                    })
                    .collect()
            }
            UserRole::Investor => {
                let investor = tables
                    .investors
                    .values()
                    .find(|i| i.profile_id == profile_id)
                    .ok_or_else(|| StoreError::not_found("investor", profile_id))?;
                tables
                    .matches
                    .values()
                    .filter(|m| m.investor_id == investor.id)
                    .filter_map(|m| {
                        tables.startups.get(&m.startup_id).map(|s| MatchSummary {
                            id: m.id.clone(),
                            counterparty_id: s.id.clone(),
                            counterparty_name: s.company_name.clone(),
                            counterparty_location: s.location.clone(),
                            score: m.score,
                            score_breakdown: m.score_breakdown,
                            status: m.status,
                            created_at: m.created_at,
                        })
                    })
                    .collect()
            }
        };

        Ok(summaries)
    }

    /// Advance a match along its one-way lifecycle
    ///
    /// Rejects transitions the state machine does not allow. Moving into
    /// viewed stamps `viewed_at`.
    pub fn update_match_status(
        &self,
        match_id: &str,
        status: MatchStatus,
    ) -> Result<MatchRecord, StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let record = tables
            .matches
            .get_mut(match_id)
            .ok_or_else(|| StoreError::not_found("match", match_id))?;

        if !record.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: format!("{:?}", record.status),
                to: format!("{:?}", status),
            });
        }

        record.status = status;
        if status == MatchStatus::Viewed && record.viewed_at.is_none() {
            record.viewed_at = Some(Utc::now());
        }
        Ok(record.clone())
    }

    // Introduction requests

    /// Create an introduction request over a match
    ///
    /// The receiver is resolved from the match and the sender's role, and the
    /// match itself moves to intro-requested in the same write.
    pub fn create_intro(
        &self,
        match_id: &str,
        sender_id: &str,
        message: String,
    ) -> Result<IntroRequest, StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let sender = tables
            .profiles
            .get(sender_id)
            .ok_or_else(|| StoreError::not_found("profile", sender_id))?;
        let sender_role = sender.role;

        let record = tables
            .matches
            .get(match_id)
            .ok_or_else(|| StoreError::not_found("match", match_id))?;

        if !record.status.can_transition_to(MatchStatus::IntroRequested) {
            return Err(StoreError::InvalidTransition {
                from: format!("{:?}", record.status),
                to: format!("{:?}", MatchStatus::IntroRequested),
            });
        }

        let receiver_id = match sender_role {
            UserRole::Startup => tables
                .investors
                .get(&record.investor_id)
                .map(|i| i.profile_id.clone())
                .ok_or_else(|| StoreError::not_found("investor", &record.investor_id))?,
            UserRole::Investor => tables
                .startups
                .get(&record.startup_id)
                .map(|s| s.profile_id.clone())
                .ok_or_else(|| StoreError::not_found("startup", &record.startup_id))?,
        };

        let intro = IntroRequest {
            id: Uuid::new_v4().to_string(),
            match_id: match_id.to_string(),
            sender_id: sender_id.to_string(),
            receiver_id,
            message,
            status: IntroStatus::Pending,
            created_at: Utc::now(),
            responded_at: None,
        };

        if let Some(record) = tables.matches.get_mut(match_id) {
            record.status = MatchStatus::IntroRequested;
        }
        tables.intros.insert(intro.id.clone(), intro.clone());

        Ok(intro)
    }

    pub fn get_intro(&self, id: &str) -> Result<IntroRequest, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .intros
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("intro", id))
    }

    /// Resolve a pending intro to accepted, declined or expired
    pub fn resolve_intro(
        &self,
        intro_id: &str,
        status: IntroStatus,
    ) -> Result<IntroRequest, StoreError> {
        let mut tables = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let intro = tables
            .intros
            .get_mut(intro_id)
            .ok_or_else(|| StoreError::not_found("intro", intro_id))?;

        if !intro.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: format!("{:?}", intro.status),
                to: format!("{:?}", status),
            });
        }

        intro.status = status;
        intro.responded_at = Some(Utc::now());
        let intro = intro.clone();

        // An accepted intro connects the match
        if status == IntroStatus::Accepted {
            if let Some(record) = tables.matches.get_mut(&intro.match_id) {
                if record.status.can_transition_to(MatchStatus::Connected) {
                    record.status = MatchStatus::Connected;
                }
            }
        }

        Ok(intro)
    }

    /// Intros visible to a profile, as sender or receiver
    pub fn intros_for_profile(&self, profile_id: &str) -> Result<Vec<IntroRequest>, StoreError> {
        let tables = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables
            .intros
            .values()
            .filter(|ir| ir.sender_id == profile_id || ir.receiver_id == profile_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingStage, InvestorType, ScoreBreakdown, Sector};

    fn seed_pair(store: &MemoryStore) -> (String, String, String, String) {
        let founder = Profile {
            id: "p-founder".to_string(),
            email: "founder@example.com".to_string(),
            role: UserRole::Startup,
            name: "Founder".to_string(),
            avatar_url: None,
            created_at: Utc::now(),
            onboarding_complete: true,
        };
        let partner = Profile {
            id: "p-partner".to_string(),
            email: "partner@example.com".to_string(),
            role: UserRole::Investor,
            name: "Partner".to_string(),
            avatar_url: None,
            created_at: Utc::now(),
            onboarding_complete: true,
        };
        store.insert_profile(founder).unwrap();
        store.insert_profile(partner).unwrap();

        let startup = StartupProfile {
            id: "s-1".to_string(),
            profile_id: "p-founder".to_string(),
            company_name: "Acme Robotics".to_string(),
            tagline: "Robots".to_string(),
            description: "Robots for warehouses".to_string(),
            website: None,
            logo_url: None,
            founded_year: 2022,
            team_size: 8,
            location: "Boston, MA".to_string(),
            sector: Sector::Hardware,
            stage: FundingStage::Seed,
            funding_target: 1_000_000,
            funding_raised: 250_000,
            pitch_deck_url: None,
            highlights: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let investor = InvestorProfile {
            id: "i-1".to_string(),
            profile_id: "p-partner".to_string(),
            firm_name: "North Capital".to_string(),
            title: "GP".to_string(),
            bio: "Hardware investor".to_string(),
            website: None,
            logo_url: None,
            location: "Boston, MA".to_string(),
            investor_type: InvestorType::Vc,
            check_size_min: 250_000,
            check_size_max: 2_000_000,
            preferred_stages: vec![FundingStage::Seed],
            preferred_sectors: vec![Sector::Hardware],
            portfolio_count: 20,
            thesis: "Deep tech".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        store.insert_startup(startup).unwrap();
        store.insert_investor(investor).unwrap();

        let record = MatchRecord {
            id: "m-1".to_string(),
            startup_id: "s-1".to_string(),
            investor_id: "i-1".to_string(),
            score: 100,
            score_breakdown: ScoreBreakdown {
                stage_alignment: 25,
                sector_match: 35,
                check_size_fit: 25,
                location_bonus: 15,
            },
            status: MatchStatus::Pending,
            created_at: Utc::now(),
            viewed_at: None,
        };
        store.insert_match(record).unwrap();

        (
            "p-founder".to_string(),
            "p-partner".to_string(),
            "s-1".to_string(),
            "m-1".to_string(),
        )
    }

    #[test]
    fn test_matches_join_counterparty_by_role() {
        let store = MemoryStore::new();
        let (founder, partner, _, _) = seed_pair(&store);

        let founder_view = store.matches_for_profile(&founder).unwrap();
        assert_eq!(founder_view.len(), 1);
        assert_eq!(founder_view[0].counterparty_name, "North Capital");

        let partner_view = store.matches_for_profile(&partner).unwrap();
        assert_eq!(partner_view.len(), 1);
        assert_eq!(partner_view[0].counterparty_name, "Acme Robotics");
    }

    #[test]
    fn test_status_update_enforces_state_machine() {
        let store = MemoryStore::new();
        let (_, _, _, match_id) = seed_pair(&store);

        let viewed = store
            .update_match_status(&match_id, MatchStatus::Viewed)
            .unwrap();
        assert_eq!(viewed.status, MatchStatus::Viewed);
        assert!(viewed.viewed_at.is_some());

        let err = store
            .update_match_status(&match_id, MatchStatus::Pending)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
    }

    #[test]
    fn test_intro_flow_flips_match_and_resolves_receiver() {
        let store = MemoryStore::new();
        let (founder, partner, _, match_id) = seed_pair(&store);

        let intro = store
            .create_intro(&match_id, &founder, "Would love to connect about our seed round".into())
            .unwrap();
        assert_eq!(intro.receiver_id, partner);
        assert_eq!(intro.status, IntroStatus::Pending);

        let record = store.get_match(&match_id).unwrap();
        assert_eq!(record.status, MatchStatus::IntroRequested);

        // Duplicate request against the same match is rejected
        let err = store
            .create_intro(&match_id, &founder, "Again".into())
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
    }

    #[test]
    fn test_accepted_intro_connects_match() {
        let store = MemoryStore::new();
        let (founder, _, _, match_id) = seed_pair(&store);

        let intro = store
            .create_intro(&match_id, &founder, "Hello".into())
            .unwrap();
        let resolved = store.resolve_intro(&intro.id, IntroStatus::Accepted).unwrap();

        assert_eq!(resolved.status, IntroStatus::Accepted);
        assert!(resolved.responded_at.is_some());
        assert_eq!(
            store.get_match(&match_id).unwrap().status,
            MatchStatus::Connected
        );
    }

    #[test]
    fn test_declined_intro_leaves_match_intro_requested() {
        let store = MemoryStore::new();
        let (founder, _, _, match_id) = seed_pair(&store);

        let intro = store
            .create_intro(&match_id, &founder, "Hello".into())
            .unwrap();
        store.resolve_intro(&intro.id, IntroStatus::Declined).unwrap();

        assert_eq!(
            store.get_match(&match_id).unwrap().status,
            MatchStatus::IntroRequested
        );

        // Resolved intros cannot be re-resolved
        let err = store
            .resolve_intro(&intro.id, IntroStatus::Accepted)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidTransition { .. }));
    }

    #[test]
    fn test_missing_entities_report_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_match("nope").unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            store.matches_for_profile("nope").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }
}
