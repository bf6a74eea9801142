//! Word entity - a German/Norsk vocabulary pair

use crate::value_objects::VocabularyId;

/// Vocabulary word. `id` is `None` until the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: Option<VocabularyId>,
    pub german: String,
    pub norsk: String,
    pub active: bool,
}

impl Word {
    /// Create a new unpersisted word
    pub fn new(german: String, norsk: String) -> Self {
        Self {
            id: None,
            german,
            norsk,
            active: true,
        }
    }

    /// Create a word addressed at an existing row (for updates)
    pub fn persisted(id: VocabularyId, german: String, norsk: String) -> Self {
        Self {
            id: Some(id),
            german,
            norsk,
            active: true,
        }
    }

    /// Check if the entry has been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
