//! PostgreSQL implementation of TrainingRepository
//!
//! Success recording is a single-statement upsert on the (username, item id)
//! natural key, so concurrent successes for the same pair never lose an
//! increment and a cancelled request never leaves a partial row.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gloser_core::entities::{VerbCandidate, WordCandidate};
use gloser_core::traits::{RepoResult, TrainingRepository};
use gloser_core::value_objects::{UserName, VocabularyId};

use crate::models::{VerbCandidateModel, WordCandidateModel};

use super::error::map_db_error;

/// PostgreSQL implementation of TrainingRepository
#[derive(Clone)]
pub struct PgTrainingRepository {
    pool: PgPool,
}

impl PgTrainingRepository {
    /// Create a new PgTrainingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainingRepository for PgTrainingRepository {
    #[instrument(skip(self))]
    async fn word_candidates(&self, username: &UserName) -> RepoResult<Vec<WordCandidate>> {
        let rows = sqlx::query_as::<_, WordCandidateModel>(
            r"
            SELECT w.id, w.german, w.norsk, s.success_counter
            FROM words w
            LEFT JOIN words_training s
              ON s.word_id = w.id AND s.username = $1
            WHERE w.active
            ORDER BY w.id DESC
            ",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(WordCandidate::from).collect())
    }

    #[instrument(skip(self))]
    async fn verb_candidates(&self, username: &UserName) -> RepoResult<Vec<VerbCandidate>> {
        let rows = sqlx::query_as::<_, VerbCandidateModel>(
            r"
            SELECT v.id, v.german, v.norsk, v.norsk_present, v.norsk_past,
                   v.norsk_past_perfect, s.success_counter
            FROM verbs v
            LEFT JOIN verbs_training s
              ON s.verb_id = v.id AND s.username = $1
            WHERE v.active
            ORDER BY v.id DESC
            ",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(VerbCandidate::from).collect())
    }

    #[instrument(skip(self))]
    async fn record_word_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO words_training (username, word_id, success_counter, trained_at)
            VALUES ($1, $2, 1, NOW())
            ON CONFLICT (username, word_id)
            DO UPDATE SET success_counter = words_training.success_counter + 1,
                          trained_at = NOW()
            ",
        )
        .bind(username.as_str())
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_verb_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO verbs_training (username, verb_id, success_counter, trained_at)
            VALUES ($1, $2, 1, NOW())
            ON CONFLICT (username, verb_id)
            DO UPDATE SET success_counter = verbs_training.success_counter + 1,
                          trained_at = NOW()
            ",
        )
        .bind(username.as_str())
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
