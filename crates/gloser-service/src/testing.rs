//! In-memory repository fakes for service-level tests
//!
//! These stand in for the PostgreSQL repositories so the service behavior
//! runs without a database. The word/verb fakes enforce the same
//! active-scoped (german, norsk) uniqueness the partial indexes provide,
//! and the training fake implements the insert-or-increment upsert.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use gloser_common::auth::{JwtService, PasswordService};
use gloser_common::config::JwtConfig;
use gloser_core::entities::{User, Verb, VerbCandidate, Word, WordCandidate};
use gloser_core::traits::{
    TrainingRepository, UserRepository, VerbRepository, WordRepository,
};
use gloser_core::{
    DomainError, FixedClock, RepoResult, SeededRandomizer, UserName, VocabularyId,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<(User, String)>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the active flag off, simulating account revocation
    pub fn deactivate(&self, username: &str) {
        let mut rows = self.rows.lock().unwrap();
        for (user, _) in rows.iter_mut() {
            if user.username.as_str() == username {
                user.active = false;
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_name(&self, username: &UserName) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(user, _)| user.username == *username)
            .map(|(user, _)| user.clone()))
    }

    async fn insert(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UserAlreadyExists);
        }
        rows.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, username: &UserName) -> RepoResult<Option<String>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(user, _)| user.username == *username)
            .map(|(_, hash)| hash.clone()))
    }
}

// ============================================================================
// Words
// ============================================================================

pub struct InMemoryWordRepository {
    rows: Mutex<Vec<Word>>,
    next_id: AtomicI64,
}

impl InMemoryWordRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn active_duplicate_exists(
        rows: &[Word],
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> bool {
        rows.iter().any(|w| {
            w.active
                && w.german == german
                && w.norsk == norsk
                && (exclude_id.is_none() || w.id != exclude_id)
        })
    }
}

#[async_trait]
impl WordRepository for InMemoryWordRepository {
    async fn find_active(&self) -> RepoResult<Vec<Word>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Word> = rows.iter().filter(|w| w.active).cloned().collect();
        active.sort_by_key(|w| w.id);
        Ok(active)
    }

    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64> {
        let rows = self.rows.lock().unwrap();
        let count = rows
            .iter()
            .filter(|w| {
                w.active
                    && w.german == german
                    && w.norsk == norsk
                    && (exclude_id.is_none() || w.id != exclude_id)
            })
            .count();
        Ok(count as i64)
    }

    async fn insert(&self, word: &Word) -> RepoResult<VocabularyId> {
        let mut rows = self.rows.lock().unwrap();
        // The partial unique index on (german, norsk) WHERE active
        if Self::active_duplicate_exists(&rows, &word.german, &word.norsk, None) {
            return Err(DomainError::duplicate_tuple(&word.german, &word.norsk));
        }
        let id = VocabularyId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.push(Word::persisted(id, word.german.clone(), word.norsk.clone()));
        Ok(id)
    }

    async fn update(&self, id: VocabularyId, word: &Word) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        if Self::active_duplicate_exists(&rows, &word.german, &word.norsk, Some(id)) {
            return Err(DomainError::duplicate_id(id));
        }
        for row in rows.iter_mut() {
            if row.id == Some(id) && row.active {
                row.german = word.german.clone();
                row.norsk = word.norsk.clone();
                return Ok(1);
            }
        }
        Ok(0)
    }

    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut() {
            if row.id == Some(id) && row.active {
                row.active = false;
                return Ok(1);
            }
        }
        Ok(0)
    }
}

// ============================================================================
// Verbs
// ============================================================================

pub struct InMemoryVerbRepository {
    rows: Mutex<Vec<Verb>>,
    next_id: AtomicI64,
}

impl InMemoryVerbRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl VerbRepository for InMemoryVerbRepository {
    async fn find_active(&self) -> RepoResult<Vec<Verb>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Verb> = rows.iter().filter(|v| v.active).cloned().collect();
        active.sort_by_key(|v| v.id);
        Ok(active)
    }

    async fn count_tuple(
        &self,
        german: &str,
        norsk: &str,
        exclude_id: Option<VocabularyId>,
    ) -> RepoResult<i64> {
        let rows = self.rows.lock().unwrap();
        let count = rows
            .iter()
            .filter(|v| {
                v.active
                    && v.german == german
                    && v.norsk == norsk
                    && (exclude_id.is_none() || v.id != exclude_id)
            })
            .count();
        Ok(count as i64)
    }

    async fn insert(&self, verb: &Verb) -> RepoResult<VocabularyId> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|v| v.active && v.german == verb.german && v.norsk == verb.norsk)
        {
            return Err(DomainError::duplicate_tuple(&verb.german, &verb.norsk));
        }
        let id = VocabularyId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.push(Verb::persisted(
            id,
            verb.german.clone(),
            verb.norsk.clone(),
            verb.norsk_present.clone(),
            verb.norsk_past.clone(),
            verb.norsk_past_perfect.clone(),
        ));
        Ok(id)
    }

    async fn update(&self, id: VocabularyId, verb: &Verb) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|v| {
            v.active && v.german == verb.german && v.norsk == verb.norsk && v.id != Some(id)
        }) {
            return Err(DomainError::duplicate_id(id));
        }
        for row in rows.iter_mut() {
            if row.id == Some(id) && row.active {
                row.german = verb.german.clone();
                row.norsk = verb.norsk.clone();
                row.norsk_present = verb.norsk_present.clone();
                row.norsk_past = verb.norsk_past.clone();
                row.norsk_past_perfect = verb.norsk_past_perfect.clone();
                return Ok(1);
            }
        }
        Ok(0)
    }

    async fn soft_delete(&self, id: VocabularyId) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut() {
            if row.id == Some(id) && row.active {
                row.active = false;
                return Ok(1);
            }
        }
        Ok(0)
    }
}

// ============================================================================
// Training
// ============================================================================

pub struct InMemoryTrainingRepository {
    word_repo: Arc<InMemoryWordRepository>,
    verb_repo: Arc<InMemoryVerbRepository>,
    word_counters: Mutex<HashMap<(String, i64), i64>>,
    verb_counters: Mutex<HashMap<(String, i64), i64>>,
}

impl InMemoryTrainingRepository {
    pub fn new(
        word_repo: Arc<InMemoryWordRepository>,
        verb_repo: Arc<InMemoryVerbRepository>,
    ) -> Self {
        Self {
            word_repo,
            verb_repo,
            word_counters: Mutex::new(HashMap::new()),
            verb_counters: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TrainingRepository for InMemoryTrainingRepository {
    async fn word_candidates(&self, username: &UserName) -> RepoResult<Vec<WordCandidate>> {
        let mut words = self.word_repo.find_active().await?;
        // The Postgres query emits candidates in descending id order
        words.sort_by_key(|w| std::cmp::Reverse(w.id));
        let counters = self.word_counters.lock().unwrap();
        Ok(words
            .into_iter()
            .filter_map(|w| {
                w.id.map(|id| WordCandidate {
                    id,
                    success_counter: counters
                        .get(&(username.as_str().to_string(), id.into_inner()))
                        .copied(),
                    german: w.german,
                    norsk: w.norsk,
                })
            })
            .collect())
    }

    async fn verb_candidates(&self, username: &UserName) -> RepoResult<Vec<VerbCandidate>> {
        let mut verbs = self.verb_repo.find_active().await?;
        verbs.sort_by_key(|v| std::cmp::Reverse(v.id));
        let counters = self.verb_counters.lock().unwrap();
        Ok(verbs
            .into_iter()
            .filter_map(|v| {
                v.id.map(|id| VerbCandidate {
                    id,
                    success_counter: counters
                        .get(&(username.as_str().to_string(), id.into_inner()))
                        .copied(),
                    german: v.german,
                    norsk: v.norsk,
                    norsk_present: v.norsk_present,
                    norsk_past: v.norsk_past,
                    norsk_past_perfect: v.norsk_past_perfect,
                })
            })
            .collect())
    }

    async fn record_word_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()> {
        let mut counters = self.word_counters.lock().unwrap();
        *counters
            .entry((username.as_str().to_string(), id.into_inner()))
            .or_insert(0) += 1;
        Ok(())
    }

    async fn record_verb_success(&self, username: &UserName, id: VocabularyId) -> RepoResult<()> {
        let mut counters = self.verb_counters.lock().unwrap();
        *counters
            .entry((username.as_str().to_string(), id.into_inner()))
            .or_insert(0) += 1;
        Ok(())
    }
}

// ============================================================================
// Backend wiring
// ============================================================================

/// Fully wired in-memory backend for service tests
pub struct TestBackend {
    context: ServiceContext,
    clock: Arc<FixedClock>,
    user_repo: Arc<InMemoryUserRepository>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Build a backend with a specific randomizer seed
    pub fn with_seed(seed: u64) -> Self {
        let clock = Arc::new(FixedClock::at(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ));

        let jwt_config = JwtConfig {
            secret: "test-secret-key-that-is-long-enough".to_string(),
            subject: "gloser".to_string(),
            audience: "gloser-client".to_string(),
            token_expiry: 3600,
        };

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let word_repo = Arc::new(InMemoryWordRepository::new());
        let verb_repo = Arc::new(InMemoryVerbRepository::new());
        let training_repo = Arc::new(InMemoryTrainingRepository::new(
            word_repo.clone(),
            verb_repo.clone(),
        ));

        let context = ServiceContextBuilder::new()
            .user_repo(user_repo.clone())
            .word_repo(word_repo)
            .verb_repo(verb_repo)
            .training_repo(training_repo)
            .jwt_service(Arc::new(JwtService::new(&jwt_config, clock.clone())))
            .password_service(Arc::new(PasswordService::new("test-pepper")))
            .randomizer(Arc::new(SeededRandomizer::from_seed(seed)))
            .build()
            .expect("test context wiring is complete");

        Self {
            context,
            clock,
            user_repo,
        }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.context
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    pub fn deactivate_user(&self, username: &str) {
        self.user_repo.deactivate(username);
    }
}
