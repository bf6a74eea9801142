//! Training candidate database models
//!
//! Rows produced by the candidate queries: active vocabulary LEFT JOINed
//! against the requesting user's success counters, so the counter is NULL
//! for never-trained items.

use sqlx::FromRow;

/// Candidate row for word training
#[derive(Debug, Clone, FromRow)]
pub struct WordCandidateModel {
    pub id: i64,
    pub german: String,
    pub norsk: String,
    pub success_counter: Option<i64>,
}

/// Candidate row for verb training
#[derive(Debug, Clone, FromRow)]
pub struct VerbCandidateModel {
    pub id: i64,
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
    pub success_counter: Option<i64>,
}
