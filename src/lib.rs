//! LaunchBridge Match - matching service for the LaunchBridge platform
//!
//! This library provides the match-scoring engine used to pair startups with
//! investors: a deterministic four-factor scorer, the filter/sort pipeline
//! behind the match list, and the in-memory demo store the HTTP API serves
//! from.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{apply_criteria, calculate_match_score, MatchScore, Matcher};
pub use models::{
    InvestorProfile, MatchCategory, MatchCriteria, MatchRecord, MatchSummary, ScoreBreakdown,
    ScoringWeights, StartupProfile,
};
