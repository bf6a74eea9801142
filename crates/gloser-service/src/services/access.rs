//! Access policies - role gates per route group
//!
//! Two strategies share one contract and are selected at routing time:
//! Managing guards the vocabulary write routes, Training guards the
//! training routes. The state machine per request is
//! Unauthenticated → TokenValidated → {Authorized, Denied}; the token
//! validation itself lives in `AuthService::authorize`.

use gloser_common::AppError;
use gloser_core::Role;

/// Role gate for a route group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Vocabulary management: managers only
    Managing,
    /// Training: any role may train
    Training,
}

impl AccessPolicy {
    /// The scope name used in the fixed unauthorized response
    #[must_use]
    pub const fn scope(self) -> &'static str {
        match self {
            Self::Managing => "managing",
            Self::Training => "training",
        }
    }

    /// Check whether the given role passes this gate
    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        match self {
            Self::Managing => role.is_manager(),
            Self::Training => true,
        }
    }

    /// The fixed rejection for a role that does not pass
    #[must_use]
    pub fn unauthorized(self) -> AppError {
        AppError::NoRights { scope: self.scope() }
    }
}
