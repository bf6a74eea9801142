//! Word entity <-> model mapper

use gloser_core::entities::Word;
use gloser_core::value_objects::VocabularyId;

use crate::models::WordModel;

/// Convert WordModel to Word entity
impl From<WordModel> for Word {
    fn from(model: WordModel) -> Self {
        Word {
            id: Some(VocabularyId::new(model.id)),
            german: model.german,
            norsk: model.norsk,
            active: model.active,
        }
    }
}
