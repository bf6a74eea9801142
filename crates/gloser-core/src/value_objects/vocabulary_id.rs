//! Vocabulary ID - numeric identity of a word or verb row
//!
//! Ids are assigned by the store on insert; an entry that has not been
//! persisted yet carries no id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a vocabulary entry (word or verb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyId(i64);

impl VocabularyId {
    /// Create a new VocabularyId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, VocabularyIdParseError> {
        s.parse::<i64>()
            .map(VocabularyId)
            .map_err(|_| VocabularyIdParseError::InvalidFormat)
    }
}

/// Error when parsing a VocabularyId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyIdParseError {
    #[error("invalid vocabulary id format")]
    InvalidFormat,
}

impl fmt::Display for VocabularyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VocabularyId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<VocabularyId> for i64 {
    fn from(id: VocabularyId) -> Self {
        id.0
    }
}

impl std::str::FromStr for VocabularyId {
    type Err = VocabularyIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VocabularyId::parse(s)
    }
}
