//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique within this run and across reruns against the same
/// database (the tests never wipe their rows)
pub fn unique_suffix() -> u64 {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    epoch * 100_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    /// Unique manager account
    pub fn manager() -> Self {
        Self::with_role("manager")
    }

    /// Unique trainer account
    pub fn trainer() -> Self {
        Self::with_role("trainer")
    }

    fn with_role(role: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            firstname: "Test".to_string(),
            lastname: format!("User{suffix}"),
            password: "TestPass123!".to_string(),
            role: role.to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub role: String,
}

/// Word create/update payload
#[derive(Debug, Serialize)]
pub struct WordPayload {
    pub german: String,
    pub norsk: String,
}

impl WordPayload {
    pub fn new(german: &str, norsk: &str) -> Self {
        Self {
            german: german.to_string(),
            norsk: norsk.to_string(),
        }
    }

    /// A unique (german, norsk) pair
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::new(&format!("Wort{suffix}"), &format!("ord{suffix}"))
    }
}

/// Verb create/update payload
#[derive(Debug, Serialize)]
pub struct VerbPayload {
    pub german: String,
    pub norsk: String,
    pub norsk_present: String,
    pub norsk_past: String,
    pub norsk_past_perfect: String,
}

impl VerbPayload {
    /// A unique verb with plausible inflections
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let stem = format!("verb{suffix}");
        Self {
            german: format!("machen{suffix}"),
            norsk: stem.clone(),
            norsk_present: format!("{stem}er"),
            norsk_past: format!("{stem}et"),
            norsk_past_perfect: format!("har {stem}et"),
        }
    }
}

/// Created-entry response
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Word list entry
#[derive(Debug, Deserialize)]
pub struct WordResponse {
    pub id: i64,
    pub german: String,
    pub norsk: String,
}

/// Training pick response (word)
#[derive(Debug, Deserialize)]
pub struct WordTrainingResponse {
    pub id: i64,
    pub german: String,
    pub norsk: String,
    pub success_counter: Option<i64>,
}
