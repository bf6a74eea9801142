//! Vocabulary service
//!
//! The write pipeline for words and verbs: uniqueness-checked create,
//! update with self-exclusion, idempotent soft delete, and the active
//! list ordered by ascending id.
//!
//! The uniqueness pre-check here is a fast path with a friendlier error;
//! the pre-check and the write share no transaction. The authoritative
//! guard is the partial unique index at the store, whose violations the
//! repositories re-raise as the same duplicate error.

use gloser_core::entities::{Verb, Word};
use gloser_core::{DomainError, VocabularyId};
use tracing::{debug, info, instrument};

use crate::dto::{
    CreateVerbRequest, CreateWordRequest, CreatedResponse, UpdateVerbRequest, UpdateWordRequest,
    VerbResponse, WordResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vocabulary service
pub struct VocabularyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VocabularyService<'a> {
    /// Create a new VocabularyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Words
    // ========================================================================

    /// List active words ordered by ascending id
    #[instrument(skip(self))]
    pub async fn list_words(&self) -> ServiceResult<Vec<WordResponse>> {
        let words = self.ctx.word_repo().find_active().await?;
        Ok(words
            .iter()
            .filter_map(WordResponse::from_persisted)
            .collect())
    }

    /// Create a new word
    #[instrument(skip(self, request), fields(german = %request.german))]
    pub async fn create_word(&self, request: CreateWordRequest) -> ServiceResult<CreatedResponse> {
        self.ensure_word_not_persisted(None, &request.german, &request.norsk)
            .await?;

        let word = Word::new(request.german, request.norsk);
        let id = self.ctx.word_repo().insert(&word).await?;

        info!(%id, "Word created");
        Ok(CreatedResponse { id })
    }

    /// Update an existing word; the row being edited is excluded from the
    /// duplicate check by its id
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update_word(
        &self,
        id: VocabularyId,
        request: UpdateWordRequest,
    ) -> ServiceResult<()> {
        self.ensure_word_not_persisted(Some(id), &request.german, &request.norsk)
            .await?;

        let word = Word::persisted(id, request.german, request.norsk);
        let affected = self.ctx.word_repo().update(id, &word).await?;

        // Zero affected rows means the id does not exist or is inactive -
        // that must not pass as silent success
        if affected == 0 {
            return Err(DomainError::WordNotFound(id).into());
        }

        info!(%id, "Word updated");
        Ok(())
    }

    /// Soft-delete a word. Idempotent: removing an already-inactive id
    /// succeeds without effect.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove_word(&self, id: VocabularyId) -> ServiceResult<()> {
        let affected = self.ctx.word_repo().soft_delete(id).await?;
        if affected == 0 {
            debug!(%id, "Word already inactive");
        } else {
            info!(%id, "Word removed");
        }
        Ok(())
    }

    // ========================================================================
    // Verbs
    // ========================================================================

    /// List active verbs ordered by ascending id
    #[instrument(skip(self))]
    pub async fn list_verbs(&self) -> ServiceResult<Vec<VerbResponse>> {
        let verbs = self.ctx.verb_repo().find_active().await?;
        Ok(verbs
            .iter()
            .filter_map(VerbResponse::from_persisted)
            .collect())
    }

    /// Create a new verb
    #[instrument(skip(self, request), fields(german = %request.german))]
    pub async fn create_verb(&self, request: CreateVerbRequest) -> ServiceResult<CreatedResponse> {
        self.ensure_verb_not_persisted(None, &request.german, &request.norsk)
            .await?;

        let verb = Verb::new(
            request.german,
            request.norsk,
            request.norsk_present,
            request.norsk_past,
            request.norsk_past_perfect,
        );
        let id = self.ctx.verb_repo().insert(&verb).await?;

        info!(%id, "Verb created");
        Ok(CreatedResponse { id })
    }

    /// Update an existing verb
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update_verb(
        &self,
        id: VocabularyId,
        request: UpdateVerbRequest,
    ) -> ServiceResult<()> {
        self.ensure_verb_not_persisted(Some(id), &request.german, &request.norsk)
            .await?;

        let verb = Verb::persisted(
            id,
            request.german,
            request.norsk,
            request.norsk_present,
            request.norsk_past,
            request.norsk_past_perfect,
        );
        let affected = self.ctx.verb_repo().update(id, &verb).await?;

        if affected == 0 {
            return Err(DomainError::VerbNotFound(id).into());
        }

        info!(%id, "Verb updated");
        Ok(())
    }

    /// Soft-delete a verb (idempotent)
    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove_verb(&self, id: VocabularyId) -> ServiceResult<()> {
        let affected = self.ctx.verb_repo().soft_delete(id).await?;
        if affected == 0 {
            debug!(%id, "Verb already inactive");
        } else {
            info!(%id, "Verb removed");
        }
        Ok(())
    }

    // ========================================================================
    // Uniqueness policy
    // ========================================================================

    /// Fail with the duplicate error when an active word already carries
    /// this (german, norsk) pair. German is compared case-sensitively.
    /// `exclude_id` is None for a create (excludes nothing) and the target
    /// id for an update (self-exclusion).
    async fn ensure_word_not_persisted(
        &self,
        exclude_id: Option<VocabularyId>,
        german: &str,
        norsk: &str,
    ) -> ServiceResult<()> {
        let count = self
            .ctx
            .word_repo()
            .count_tuple(german, norsk, exclude_id)
            .await?;

        if count > 0 {
            return Err(duplicate_error(exclude_id, german, norsk).into());
        }
        Ok(())
    }

    /// Verb analogue of the word uniqueness check
    async fn ensure_verb_not_persisted(
        &self,
        exclude_id: Option<VocabularyId>,
        german: &str,
        norsk: &str,
    ) -> ServiceResult<()> {
        let count = self
            .ctx
            .verb_repo()
            .count_tuple(german, norsk, exclude_id)
            .await?;

        if count > 0 {
            return Err(duplicate_error(exclude_id, german, norsk).into());
        }
        Ok(())
    }
}

/// The duplicate identifier names the edited row by id on update and the
/// colliding pair on create
fn duplicate_error(exclude_id: Option<VocabularyId>, german: &str, norsk: &str) -> DomainError {
    match exclude_id {
        Some(id) => DomainError::duplicate_id(id),
        None => DomainError::duplicate_tuple(german, norsk),
    }
}
