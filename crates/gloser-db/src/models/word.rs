//! Word database model

use sqlx::FromRow;

/// Database model for the words table
#[derive(Debug, Clone, FromRow)]
pub struct WordModel {
    pub id: i64,
    pub german: String,
    pub norsk: String,
    pub active: bool,
}
