//! Verb entity <-> model mapper

use gloser_core::entities::Verb;
use gloser_core::value_objects::VocabularyId;

use crate::models::VerbModel;

/// Convert VerbModel to Verb entity
impl From<VerbModel> for Verb {
    fn from(model: VerbModel) -> Self {
        Verb {
            id: Some(VocabularyId::new(model.id)),
            german: model.german,
            norsk: model.norsk,
            norsk_present: model.norsk_present,
            norsk_past: model.norsk_past,
            norsk_past_perfect: model.norsk_past_perfect,
            active: model.active,
        }
    }
}
