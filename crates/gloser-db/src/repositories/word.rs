//! PostgreSQL implementation of WordRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gloser_core::entities::Word;
use gloser_core::error::DomainError;
use gloser_core::traits::{RepoResult, WordRepository};
use gloser_core::value_objects::VocabularyId;

use crate::models::WordModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of WordRepository
#[derive(Clone)]
pub struct PgWordRepository {
    pool: PgPool,
}

impl PgWordRepository {
    /// Create a new PgWordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordRepository for PgWordRepository {
    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordModel>(
            r"
            SELECT id, german, norsk, active
            FROM words
            WHERE active
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Word::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64> {
        // NULL exclude_id matches no row, so a create excludes nothing
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM words
            WHERE active AND german = $1 AND norsk = $2
              AND ($3::BIGINT IS NULL OR id <> $3)
            ",
        )
        .bind(german)
        .bind(norsk)
        .bind(exclude_id.map(VocabularyId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn insert(&self, word: &Word) -> RepoResult<VocabularyId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO words (german, norsk, active)
            VALUES ($1, $2, TRUE)
            RETURNING id
            ",
        )
        .bind(&word.german)
        .bind(&word.norsk)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::duplicate_tuple(&word.german, &word.norsk))
        })?;

        Ok(VocabularyId::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: VocabularyId, word: &Word) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE words
            SET german = $2, norsk = $3
            WHERE id = $1 AND active
            ",
        )
        .bind(id.into_inner())
        .bind(&word.german)
        .bind(&word.norsk)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::duplicate_id(id)))?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE words
            SET active = FALSE
            WHERE id = $1 AND active
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
