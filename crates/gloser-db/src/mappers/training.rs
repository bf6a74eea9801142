//! Training candidate model mappers

use gloser_core::entities::{VerbCandidate, WordCandidate};
use gloser_core::value_objects::VocabularyId;

use crate::models::{VerbCandidateModel, WordCandidateModel};

/// Convert WordCandidateModel to WordCandidate
impl From<WordCandidateModel> for WordCandidate {
    fn from(model: WordCandidateModel) -> Self {
        WordCandidate {
            id: VocabularyId::new(model.id),
            german: model.german,
            norsk: model.norsk,
            success_counter: model.success_counter,
        }
    }
}

/// Convert VerbCandidateModel to VerbCandidate
impl From<VerbCandidateModel> for VerbCandidate {
    fn from(model: VerbCandidateModel) -> Self {
        VerbCandidate {
            id: VocabularyId::new(model.id),
            german: model.german,
            norsk: model.norsk,
            norsk_present: model.norsk_present,
            norsk_past: model.norsk_past,
            norsk_past_perfect: model.norsk_past_perfect,
            success_counter: model.success_counter,
        }
    }
}
