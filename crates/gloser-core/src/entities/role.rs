//! User role - determines which route group a user may access

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a user at registration. One role per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May create, update and remove vocabulary
    Manager,
    /// May train against the vocabulary list
    Trainer,
}

impl Role {
    /// Get the lowercase string form used in JSON, JWT claims and storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Trainer => "trainer",
        }
    }

    /// Check if this role carries vocabulary-management rights
    #[inline]
    #[must_use]
    pub fn is_manager(self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a Role from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoleParseError {
    #[error("unknown role")]
    UnknownRole,
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "trainer" => Ok(Self::Trainer),
            _ => Err(RoleParseError::UnknownRole),
        }
    }
}
