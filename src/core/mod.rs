// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{apply_criteria, matches_category, matches_query, sort_matches};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_match_score, MatchScore};
