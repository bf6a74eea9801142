//! Verb database model

use sqlx::FromRow;

/// Database model for the verbs table
#[derive(Debug, Clone, FromRow)]
pub struct VerbModel {
    pub id: i64,
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
    pub active: bool,
}
