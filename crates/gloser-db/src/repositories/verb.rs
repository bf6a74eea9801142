//! PostgreSQL implementation of VerbRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gloser_core::entities::Verb;
use gloser_core::error::DomainError;
use gloser_core::traits::{RepoResult, VerbRepository};
use gloser_core::value_objects::VocabularyId;

use crate::models::VerbModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of VerbRepository
#[derive(Clone)]
pub struct PgVerbRepository {
    pool: PgPool,
}

impl PgVerbRepository {
    /// Create a new PgVerbRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerbRepository for PgVerbRepository {
    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Verb>> {
        let rows = sqlx::query_as::<_, VerbModel>(
            r"
            SELECT id, german, norsk, norsk_present, norsk_past, norsk_past_perfect, active
            FROM verbs
            WHERE active
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Verb::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM verbs
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
    async fn insert(&self, verb: &Verb) -> RepoResult<VocabularyId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO verbs (german, norsk, norsk_present, norsk_past, norsk_past_perfect, active)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING id
            ",
        )
        .bind(&verb.german)
        .bind(&verb.norsk)
        .bind(&verb.norsk_present)
        .bind(&verb.norsk_past)
        .bind(&verb.norsk_past_perfect)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::duplicate_tuple(&verb.german, &verb.norsk))
        })?;

        Ok(VocabularyId::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: VocabularyId, verb: &Verb) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE verbs
            SET german = $2, norsk = $3, norsk_present = $4, norsk_past = $5, norsk_past_perfect = $6
            WHERE id = $1 AND active
            ",
        )
        .bind(id.into_inner())
        .bind(&verb.german)
        .bind(&verb.norsk)
        .bind(&verb.norsk_present)
        .bind(&verb.norsk_past)
        .bind(&verb.norsk_past_perfect)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::duplicate_id(id)))?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE verbs
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
