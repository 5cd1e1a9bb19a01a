// Criterion benchmarks for LaunchBridge Match

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launchbridge_match::core::{apply_criteria, calculate_match_score, Matcher};
use launchbridge_match::models::{
    FundingStage, InvestorProfile, InvestorType, MatchCriteria, MatchStatus, MatchSummary,
    ScoreBreakdown, ScoringWeights, Sector, StartupProfile,
};

fn create_startup(id: usize) -> StartupProfile {
    let stages = [
        FundingStage::PreSeed,
        FundingStage::Seed,
        FundingStage::SeriesA,
        FundingStage::SeriesB,
    ];
    let sectors = [
        Sector::Saas,
        Sector::Fintech,
        Sector::Hardware,
        Sector::Healthtech,
    ];
    StartupProfile {
        id: format!("s-{}", id),
        profile_id: format!("p-{}", id),
        company_name: format!("Startup {}", id),
        tagline: "Tagline".to_string(),
        description: "Description".to_string(),
        website: None,
        logo_url: None,
        founded_year: 2020 + (id % 5) as u16,
        team_size: 2 + (id % 40) as u32,
        location: if id % 3 == 0 {
            "San Francisco, CA".to_string()
        } else {
            "Austin, TX".to_string()
        },
        sector: sectors[id % sectors.len()],
        stage: stages[id % stages.len()],
        funding_target: 250_000 * ((id % 20) as u64 + 1),
        funding_raised: 50_000 * (id % 10) as u64,
        pitch_deck_url: None,
        highlights: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn create_investor() -> InvestorProfile {
    InvestorProfile {
        id: "i-0".to_string(),
        profile_id: "p-i-0".to_string(),
        firm_name: "Benchmark Fixture Capital".to_string(),
        title: "Partner".to_string(),
        bio: "Bio".to_string(),
        website: None,
        logo_url: None,
        location: "San Francisco, CA".to_string(),
        investor_type: InvestorType::Vc,
        check_size_min: 250_000,
        check_size_max: 3_000_000,
        preferred_stages: vec![FundingStage::Seed, FundingStage::SeriesA],
        preferred_sectors: vec![Sector::Saas, Sector::Fintech],
        portfolio_count: 25,
        thesis: "Thesis".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn create_summary(id: usize) -> MatchSummary {
    MatchSummary {
        id: format!("m-{}", id),
        counterparty_id: format!("cp-{}", id),
        counterparty_name: format!("Counterparty Fund {}", id),
        counterparty_location: "Austin, TX".to_string(),
        score: (id % 101) as u8,
        score_breakdown: ScoreBreakdown {
            stage_alignment: 0,
            sector_match: 0,
            check_size_fit: 0,
            location_bonus: 0,
        },
        status: if id % 4 == 0 {
            MatchStatus::Pending
        } else {
            MatchStatus::Viewed
        },
        created_at: Utc::now(),
    }
}

fn bench_scoring(c: &mut Criterion) {
    let startup = create_startup(1);
    let investor = create_investor();
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&startup),
                black_box(&investor),
                black_box(&weights),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let investor = create_investor();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let candidates: Vec<StartupProfile> =
            (0..*candidate_count).map(create_startup).collect();

        group.bench_with_input(
            BenchmarkId::new("match_investor", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.match_investor(black_box(&investor), black_box(&candidates), 20)
                });
            },
        );
    }

    group.finish();
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let summaries: Vec<MatchSummary> = (0..100).map(create_summary).collect();
    let criteria = MatchCriteria {
        query: Some("fund 1".to_string()),
        ..Default::default()
    };

    c.bench_function("filter_pipeline_100_matches", |b| {
        b.iter(|| apply_criteria(black_box(&summaries), black_box(&criteria)));
    });
}

criterion_group!(benches, bench_scoring, bench_matching, bench_filter_pipeline);
criterion_main!(benches);
