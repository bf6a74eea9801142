//! Training candidates - active vocabulary annotated with a user's history
//!
//! Every active item is a candidate for every user; the success counter is
//! `None` when this user has never trained the item (the training relation
//! is sparse).

use crate::value_objects::VocabularyId;

/// An active word eligible for training, with this user's success count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
    pub success_counter: Option<i64>,
}

impl WordCandidate {
    /// Check if this user has trained the word before
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.success_counter.is_some()
    }
}

/// An active verb eligible for training, with this user's success count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbCandidate {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
    pub success_counter: Option<i64>,
}

impl VerbCandidate {
    /// Check if this user has trained the verb before
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.success_counter.is_some()
    }
}
