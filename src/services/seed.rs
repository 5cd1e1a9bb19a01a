use chrono::{Duration, Utc};

use crate::core::Matcher;
use crate::models::{
    FundingStage, InvestorProfile, InvestorType, Profile, Sector, StartupProfile, UserRole,
};
use crate::services::store::{MemoryStore, StoreError};

/// Profile ids of the two demo accounts
pub const DEMO_STARTUP_PROFILE: &str = "profile-demo-startup";
pub const DEMO_INVESTOR_PROFILE: &str = "profile-demo-investor";

/// Load the deterministic demo data set into the store
///
/// Scores come from the real scorer; nothing here is randomized, so demo
/// sessions see the same matches on every boot. Returns the number of match
/// records created.
pub fn seed_demo(store: &MemoryStore, matcher: &Matcher) -> Result<usize, StoreError> {
    let now = Utc::now();

    for profile in demo_profiles() {
        store.insert_profile(profile)?;
    }
    for startup in demo_startups() {
        store.insert_startup(startup)?;
    }
    for investor in demo_investors() {
        store.insert_investor(investor)?;
    }

    let startups = store.list_startups()?;
    let investors = store.list_investors()?;

    // Matches for the demo founder's startup against every investor
    let demo_startup = store.startup_for_profile(DEMO_STARTUP_PROFILE)?;
    let mut result = matcher.match_startup(&demo_startup, &investors, investors.len());
    // Stagger creation times so "most recent" ordering is visible in the demo
    for (i, record) in result.matches.iter_mut().enumerate() {
        record.created_at = now - Duration::days(i as i64);
    }
    let mut created = result.matches.len();
    store.insert_matches(result.matches)?;

    // Matches for the demo investor against every other startup
    let demo_investor = store.investor_for_profile(DEMO_INVESTOR_PROFILE)?;
    let other_startups: Vec<StartupProfile> = startups
        .into_iter()
        .filter(|s| s.id != demo_startup.id)
        .collect();
    let mut result = matcher.match_investor(&demo_investor, &other_startups, other_startups.len());
    for (i, record) in result.matches.iter_mut().enumerate() {
        record.created_at = now - Duration::days(i as i64);
    }
    created += result.matches.len();
    store.insert_matches(result.matches)?;

    tracing::info!("Seeded demo data: {} matches", created);
    Ok(created)
}

fn demo_profiles() -> Vec<Profile> {
    let now = Utc::now();
    vec![
        Profile {
            id: DEMO_STARTUP_PROFILE.to_string(),
            email: "demo-founder@launchbridge.dev".to_string(),
            role: UserRole::Startup,
            name: "Dana Reyes".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: DEMO_INVESTOR_PROFILE.to_string(),
            email: "demo-investor@launchbridge.dev".to_string(),
            role: UserRole::Investor,
            name: "Marcus Webb".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-founder-2".to_string(),
            email: "lena@verdant.example".to_string(),
            role: UserRole::Startup,
            name: "Lena Ortiz".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-founder-3".to_string(),
            email: "sam@clearledger.example".to_string(),
            role: UserRole::Startup,
            name: "Sam Ito".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-founder-4".to_string(),
            email: "priya@carebloom.example".to_string(),
            role: UserRole::Startup,
            name: "Priya Nair".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-investor-2".to_string(),
            email: "jordan@harborpeak.example".to_string(),
            role: UserRole::Investor,
            name: "Jordan Blake".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-investor-3".to_string(),
            email: "amara@foundrylane.example".to_string(),
            role: UserRole::Investor,
            name: "Amara Diallo".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
        Profile {
            id: "profile-investor-4".to_string(),
            email: "theo@meridian.example".to_string(),
            role: UserRole::Investor,
            name: "Theo Lindqvist".to_string(),
            avatar_url: None,
            created_at: now,
            onboarding_complete: true,
        },
    ]
}

fn demo_startups() -> Vec<StartupProfile> {
    let now = Utc::now();
    let startup = |id: &str,
                   profile_id: &str,
                   name: &str,
                   tagline: &str,
                   location: &str,
                   sector: Sector,
                   stage: FundingStage,
                   target: u64,
                   raised: u64| StartupProfile {
        id: id.to_string(),
        profile_id: profile_id.to_string(),
        company_name: name.to_string(),
        tagline: tagline.to_string(),
        description: format!("{} - {}", name, tagline),
        website: None,
        logo_url: None,
        founded_year: 2022,
        team_size: 6,
        location: location.to_string(),
        sector,
        stage,
        funding_target: target,
        funding_raised: raised,
        pitch_deck_url: None,
        highlights: vec!["Growing 20% month over month".to_string()],
        created_at: now,
        updated_at: now,
    };

    vec![
        startup(
            "startup-demo",
            DEMO_STARTUP_PROFILE,
            "Relay Robotics",
            "Warehouse automation that installs in a day",
            "San Francisco, CA",
            Sector::Hardware,
            FundingStage::Seed,
            2_000_000,
            400_000,
        ),
        startup(
            "startup-verdant",
            "profile-founder-2",
            "Verdant Grid",
            "Software for community solar operators",
            "Austin, TX",
            Sector::Cleantech,
            FundingStage::Seed,
            1_500_000,
            300_000,
        ),
        startup(
            "startup-clearledger",
            "profile-founder-3",
            "ClearLedger",
            "Real-time treasury for mid-market CFOs",
            "New York, NY",
            Sector::Fintech,
            FundingStage::SeriesA,
            8_000_000,
            2_500_000,
        ),
        startup(
            "startup-carebloom",
            "profile-founder-4",
            "CareBloom Health",
            "Remote monitoring for post-acute care",
            "Boston, MA",
            Sector::Healthtech,
            FundingStage::PreSeed,
            750_000,
            100_000,
        ),
    ]
}

fn demo_investors() -> Vec<InvestorProfile> {
    let now = Utc::now();
    let investor = |id: &str,
                    profile_id: &str,
                    firm: &str,
                    location: &str,
                    investor_type: InvestorType,
                    check_min: u64,
                    check_max: u64,
                    stages: Vec<FundingStage>,
                    sectors: Vec<Sector>| InvestorProfile {
        id: id.to_string(),
        profile_id: profile_id.to_string(),
        firm_name: firm.to_string(),
        title: "General Partner".to_string(),
        bio: format!("{} backs ambitious founders early.", firm),
        website: None,
        logo_url: None,
        location: location.to_string(),
        investor_type,
        check_size_min: check_min,
        check_size_max: check_max,
        preferred_stages: stages,
        preferred_sectors: sectors,
        portfolio_count: 18,
        thesis: "Category-defining companies at the earliest stages".to_string(),
        created_at: now,
        updated_at: now,
    };

    vec![
        investor(
            "investor-demo",
            DEMO_INVESTOR_PROFILE,
            "Webb Frontier Capital",
            "San Francisco, CA",
            InvestorType::Vc,
            500_000,
            5_000_000,
            vec![FundingStage::Seed, FundingStage::SeriesA],
            vec![Sector::Hardware, Sector::Fintech, Sector::Saas],
        ),
        investor(
            "investor-harborpeak",
            "profile-investor-2",
            "Harbor Peak Ventures",
            "New York, NY",
            InvestorType::Vc,
            1_000_000,
            10_000_000,
            vec![FundingStage::SeriesA, FundingStage::SeriesB],
            vec![Sector::Fintech, Sector::Marketplace],
        ),
        investor(
            "investor-foundrylane",
            "profile-investor-3",
            "Foundry Lane",
            "Austin, TX",
            InvestorType::Angel,
            50_000,
            500_000,
            vec![FundingStage::PreSeed, FundingStage::Seed],
            vec![Sector::Cleantech, Sector::Agtech, Sector::Healthtech],
        ),
        investor(
            "investor-meridian",
            "profile-investor-4",
            "Meridian Family Office",
            "San Francisco, CA",
            InvestorType::FamilyOffice,
            250_000,
            3_000_000,
            vec![FundingStage::Seed, FundingStage::SeriesA, FundingStage::SeriesB],
            vec![Sector::Hardware, Sector::Biotech, Sector::Healthtech],
        ),
    ]
}
