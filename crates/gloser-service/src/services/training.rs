//! Training service
//!
//! Assembles the per-user candidate set (every active item, annotated with
//! this user's success counter), picks one uniformly at random, and records
//! successes through the storage-level atomic upsert.
//!
//! Trained and untrained items get equal selection weight.

use gloser_core::{DomainError, UserName, VocabularyId};
use tracing::{info, instrument};

use crate::dto::{VerbTrainingResponse, WordTrainingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Training service
pub struct TrainingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrainingService<'a> {
    /// Create a new TrainingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Pick the next word for this user to train
    #[instrument(skip(self), fields(username = %username))]
    pub async fn next_word(&self, username: &UserName) -> ServiceResult<WordTrainingResponse> {
        let candidates = self.ctx.training_repo().word_candidates(username).await?;

        if candidates.is_empty() {
            return Err(DomainError::EmptyTrainingSet.into());
        }

        let index = self.ctx.randomizer().index_below(candidates.len());
        Ok(WordTrainingResponse::from(&candidates[index]))
    }

    /// Pick the next verb for this user to train
    #[instrument(skip(self), fields(username = %username))]
    pub async fn next_verb(&self, username: &UserName) -> ServiceResult<VerbTrainingResponse> {
        let candidates = self.ctx.training_repo().verb_candidates(username).await?;

        if candidates.is_empty() {
            return Err(DomainError::EmptyTrainingSet.into());
        }

        let index = self.ctx.randomizer().index_below(candidates.len());
        Ok(VerbTrainingResponse::from(&candidates[index]))
    }

    /// Record a successful word training. First success inserts the
    /// counter at 1; later successes increment it in place.
    #[instrument(skip(self), fields(username = %username, id = %id))]
    pub async fn record_word_success(
        &self,
        username: &UserName,
        id: VocabularyId,
    ) -> ServiceResult<()> {
        self.ctx
            .training_repo()
            .record_word_success(username, id)
            .await?;

        info!("Word training success recorded");
        Ok(())
    }

    /// Record a successful verb training
    #[instrument(skip(self), fields(username = %username, id = %id))]
    pub async fn record_verb_success(
        &self,
        username: &UserName,
        id: VocabularyId,
    ) -> ServiceResult<()> {
        self.ctx
            .training_repo()
            .record_verb_success(username, id)
            .await?;

        info!("Verb training success recorded");
        Ok(())
    }
}
