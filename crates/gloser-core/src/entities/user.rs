//! User entity - a registered manager or trainer account

use crate::entities::Role;
use crate::value_objects::UserName;

/// Registered user account.
///
/// The password hash is not part of the entity; it is handed to the
/// repository on creation and fetched separately for login verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: UserName,
    pub firstname: String,
    pub lastname: String,
    pub role: Role,
    pub active: bool,
}

impl User {
    /// Create a new active user
    pub fn new(username: UserName, firstname: String, lastname: String, role: Role) -> Self {
        Self {
            username,
            firstname,
            lastname,
            role,
            active: true,
        }
    }

    /// Full display name: "firstname lastname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Check if the account is still active (not revoked)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
