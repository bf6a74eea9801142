//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use gloser_core::{Role, User, Verb, VerbCandidate, VocabularyId, Word, WordCandidate};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// User profile response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            role: user.role,
        }
    }
}

// ============================================================================
// Vocabulary Responses
// ============================================================================

/// Response carrying the store-assigned id of a freshly created entry
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: VocabularyId,
}

/// Word list entry
#[derive(Debug, Serialize)]
pub struct WordResponse {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
}

impl WordResponse {
    /// Build from a persisted word; `None` for an entry the store has not
    /// assigned an id to (cannot appear in list output)
    pub fn from_persisted(word: &Word) -> Option<Self> {
        word.id.map(|id| Self {
            id,
            german: word.german.clone(),
            norsk: word.norsk.clone(),
        })
    }
}

/// Verb list entry
#[derive(Debug, Serialize)]
pub struct VerbResponse {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
}

impl VerbResponse {
    /// Build from a persisted verb
    pub fn from_persisted(verb: &Verb) -> Option<Self> {
        verb.id.map(|id| Self {
            id,
            german: verb.german.clone(),
            norsk: verb.norsk.clone(),
            norsk_present: verb.norsk_present.clone(),
            norsk_past: verb.norsk_past.clone(),
            norsk_past_perfect: verb.norsk_past_perfect.clone(),
        })
    }
}

// ============================================================================
// Training Responses
// ============================================================================

/// Word presented for training, with this user's success count so far
#[derive(Debug, Serialize)]
pub struct WordTrainingResponse {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
    pub success_counter: Option<i64>,
}

impl From<&WordCandidate> for WordTrainingResponse {
    fn from(candidate: &WordCandidate) -> Self {
        Self {
            id: candidate.id,
            german: candidate.german.clone(),
            norsk: candidate.norsk.clone(),
            success_counter: candidate.success_counter,
        }
    }
}

/// Verb presented for training
#[derive(Debug, Serialize)]
pub struct VerbTrainingResponse {
    pub id: VocabularyId,
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
    pub success_counter: Option<i64>,
}

impl From<&VerbCandidate> for VerbTrainingResponse {
    fn from(candidate: &VerbCandidate) -> Self {
        Self {
            id: candidate.id,
            german: candidate.german.clone(),
            norsk: candidate.norsk.clone(),
            norsk_present: candidate.norsk_present.clone(),
            norsk_past: candidate.norsk_past.clone(),
            norsk_past_perfect: candidate.norsk_past_perfect.clone(),
            success_counter: candidate.success_counter,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            checks: HealthChecks { database },
        }
    }
}
