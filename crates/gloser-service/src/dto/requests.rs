//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use gloser_core::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub firstname: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub lastname: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    pub role: Role,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// Vocabulary Requests
// ============================================================================

/// Create word request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWordRequest {
    #[validate(length(min = 1, max = 128, message = "German text must be 1-128 characters"))]
    pub german: String,

    #[validate(length(min = 1, max = 128, message = "Norsk text must be 1-128 characters"))]
    pub norsk: String,
}

/// Update word request (full replacement of the text pair)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWordRequest {
    #[validate(length(min = 1, max = 128, message = "German text must be 1-128 characters"))]
    pub german: String,

    #[validate(length(min = 1, max = 128, message = "Norsk text must be 1-128 characters"))]
    pub norsk: String,
}

/// Create verb request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVerbRequest {
    #[validate(length(min = 1, max = 128, message = "German text must be 1-128 characters"))]
    pub german: String,

    #[validate(length(min = 1, max = 128, message = "Norsk text must be 1-128 characters"))]
    pub norsk: String,

    #[validate(length(min = 1, max = 128, message = "Present form must be 1-128 characters"))]
    pub norsk_present: String,

    #[validate(length(min = 1, max = 128, message = "Past form must be 1-128 characters"))]
    pub norsk_past: String,

    #[validate(length(min = 1, max = 128, message = "Past-perfect form must be 1-128 characters"))]
    pub norsk_past_perfect: String,
}

/// Update verb request (full replacement)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVerbRequest {
    #[validate(length(min = 1, max = 128, message = "German text must be 1-128 characters"))]
    pub german: String,

    #[validate(length(min = 1, max = 128, message = "Norsk text must be 1-128 characters"))]
    pub norsk: String,

    #[validate(length(min = 1, max = 128, message = "Present form must be 1-128 characters"))]
    pub norsk_present: String,

    #[validate(length(min = 1, max = 128, message = "Past form must be 1-128 characters"))]
    pub norsk_past: String,

    #[validate(length(min = 1, max = 128, message = "Past-perfect form must be 1-128 characters"))]
    pub norsk_past_perfect: String,
}
