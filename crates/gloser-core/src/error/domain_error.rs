//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::VocabularyId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Word not found: {0}")]
    WordNotFound(VocabularyId),

    #[error("Verb not found: {0}")]
    VerbNotFound(VocabularyId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    /// The token was valid but the account behind it is deactivated.
    /// The message stays generic so callers cannot probe which names exist.
    #[error("No active user for the presented identity")]
    NoActiveUser,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// `identifier` is "id: {id}" when raised from an update,
    /// "{german} | {norsk}" when raised from a create.
    #[error("Vocabulary already exists: {identifier}")]
    DuplicateVocabulary { identifier: String },

    #[error("User name already taken")]
    UserAlreadyExists,

    // =========================================================================
    // Training
    // =========================================================================
    /// A user with zero active vocabulary gets this defined outcome,
    /// never a crash from an empty random range.
    #[error("No vocabulary available for training")]
    EmptyTrainingSet,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Build the duplicate error for a create attempt (no id yet)
    pub fn duplicate_tuple(german: &str, norsk: &str) -> Self {
        Self::DuplicateVocabulary {
            identifier: format!("{german} | {norsk}"),
        }
    }

    /// Build the duplicate error for an update attempt (row addressed by id)
    pub fn duplicate_id(id: VocabularyId) -> Self {
        Self::DuplicateVocabulary {
            identifier: format!("id: {id}"),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::WordNotFound(_) => "UNKNOWN_WORD",
            Self::VerbNotFound(_) => "UNKNOWN_VERB",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUserName(_) => "INVALID_USER_NAME",
            Self::NoActiveUser => "NO_ACTIVE_USER",
            Self::DuplicateVocabulary { .. } => "DUPLICATE_VOCABULARY",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::EmptyTrainingSet => "EMPTY_TRAINING_SET",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a not-found error (maps to 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WordNotFound(_) | Self::VerbNotFound(_))
    }

    /// Check if this is a validation error (maps to 400/422)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidUserName(_))
    }

    /// Check if this is an authentication error (maps to 401)
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::NoActiveUser)
    }

    /// Check if this is a conflict error (maps to 409)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateVocabulary { .. } | Self::UserAlreadyExists
        )
    }

    /// Check if this is the defined empty-training outcome (maps to 204)
    pub fn is_empty_training_set(&self) -> bool {
        matches!(self, Self::EmptyTrainingSet)
    }
}
