//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Storage is treated as a transactional
//! key-tuple store: numeric ids plus an `active` flag for soft deletes.

use async_trait::async_trait;

use crate::entities::{User, Verb, VerbCandidate, Word, WordCandidate};
use crate::error::DomainError;
use crate::value_objects::{UserName, VocabularyId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by name
    async fn find_by_name(&self, username: &UserName) -> RepoResult<Option<User>>;

    /// Create a new user with the given password hash
    async fn insert(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for login verification
    async fn get_password_hash(&self, username: &UserName) -> RepoResult<Option<String>>;
}

// ============================================================================
// Word Repository
// ============================================================================

#[async_trait]
pub trait WordRepository: Send + Sync {
    /// List active words ordered by ascending id
    async fn find_active(&self) -> RepoResult<Vec<Word>>;

    /// Count active rows matching (german, norsk) case-sensitively,
    /// excluding `exclude_id` when given. `None` excludes nothing,
    /// which is the correct behavior for a create.
    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64>;

    /// Insert a new word; the store assigns and returns the id.
    /// A unique-constraint violation surfaces as `DuplicateVocabulary`.
    async fn insert(&self, word: &Word) -> RepoResult<VocabularyId>;

    /// Update an active row; returns the number of affected rows
    /// (0 means the row does not exist or is inactive)
    async fn update(&self, id: VocabularyId, word: &Word) -> RepoResult<u64>;

    /// Soft-delete by id; returns the number of affected rows
    /// (0 is acceptable - removal is idempotent)
    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64>;
}

// ============================================================================
// Verb Repository
// ============================================================================

#[async_trait]
pub trait VerbRepository: Send + Sync {
    /// List active verbs ordered by ascending id
    async fn find_active(&self) -> RepoResult<Vec<Verb>>;

    /// Count active rows matching (german, norsk) case-sensitively,
    /// excluding `exclude_id` when given
    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64>;

    /// Insert a new verb; the store assigns and returns the id
    async fn insert(&self, verb: &Verb) -> RepoResult<VocabularyId>;

    /// Update an active row; returns the number of affected rows
    async fn update(&self, id: VocabularyId, verb: &Verb) -> RepoResult<u64>;

    /// Soft-delete by id; returns the number of affected rows
    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64>;
}

// ============================================================================
// Training Repository
// ============================================================================

#[async_trait]
pub trait TrainingRepository: Send + Sync {
    /// Every active word, annotated with this user's success counter,
    /// ordered by descending id as emitted by the underlying query
    async fn word_candidates(&self, username: &UserName) -> RepoResult<Vec<WordCandidate>>;

    /// Every active verb, annotated with this user's success counter,
    /// ordered by descending id
    async fn verb_candidates(&self, username: &UserName) -> RepoResult<Vec<VerbCandidate>>;

    /// Record a successful word training: single atomic upsert -
    /// insert with counter 1, or increment and refresh the timestamp
    async fn record_word_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()>;

    /// Record a successful verb training: single atomic upsert
    async fn record_verb_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()>;
}
