use crate::models::{MatchCategory, MatchCriteria, MatchStatus, MatchSummary, SortKey};

/// Apply the viewer's filter/sort criteria to a match list
///
/// Returns a new ordered subset; the input is never mutated. An empty or
/// missing query matches everything.
pub fn apply_criteria(matches: &[MatchSummary], criteria: &MatchCriteria) -> Vec<MatchSummary> {
    let mut filtered: Vec<MatchSummary> = matches
        .iter()
        .filter(|m| matches_query(m, criteria.query.as_deref()))
        .filter(|m| matches_category(m, criteria.category))
        .cloned()
        .collect();

    sort_matches(&mut filtered, criteria.sort);
    filtered
}

/// Case-insensitive substring match against the counterparty display name
#[inline]
pub fn matches_query(summary: &MatchSummary, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(q) if q.is_empty() => true,
        Some(q) => summary
            .counterparty_name
            .to_lowercase()
            .contains(&q.to_lowercase()),
    }
}

/// Single-selection category filter over score and status
#[inline]
pub fn matches_category(summary: &MatchSummary, category: MatchCategory) -> bool {
    match category {
        MatchCategory::All => true,
        MatchCategory::HighScore => summary.score >= 80,
        MatchCategory::Pending => summary.status == MatchStatus::Pending,
        MatchCategory::IntroRequested => summary.status == MatchStatus::IntroRequested,
    }
}

/// Sort by score descending or creation time descending
///
/// Ordering among exact ties is not part of the contract.
pub fn sort_matches(matches: &mut [MatchSummary], sort: SortKey) {
    match sort {
        SortKey::Score => matches.sort_by(|a, b| b.score.cmp(&a.score)),
        SortKey::Recent => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}
