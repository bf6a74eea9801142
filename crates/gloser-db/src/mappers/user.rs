//! User entity <-> model mapper

use gloser_core::entities::{Role, User};
use gloser_core::error::DomainError;
use gloser_core::value_objects::UserName;

use crate::models::UserModel;

/// Convert UserModel to User entity, re-validating the constrained fields
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let username = UserName::new(&model.username)?;
        let role = model
            .role
            .parse::<Role>()
            .map_err(|_| DomainError::DatabaseError(format!("unknown role: {}", model.role)))?;

        Ok(User {
            username,
            firstname: model.firstname,
            lastname: model.lastname,
            role,
            active: model.active,
        })
    }
}
