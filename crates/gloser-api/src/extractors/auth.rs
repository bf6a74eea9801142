//! Authentication extractors
//!
//! Extract the bearer token from the Authorization header and run the
//! role-gated authorization pass. Two extractors share the mechanics and
//! differ only in the access policy they apply - they are the routing-time
//! selection of the manager/trainer strategies.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use gloser_core::entities::User;
use gloser_service::{AccessPolicy, AuthService};

use crate::response::ApiError;
use crate::state::AppState;

/// User authorized for vocabulary management (manager role, active)
#[derive(Debug, Clone)]
pub struct ManagerUser(pub User);

/// User authorized for training (any role, active)
#[derive(Debug, Clone)]
pub struct TrainerUser(pub User);

async fn authorize<S>(parts: &mut Parts, state: &S, policy: AccessPolicy) -> Result<User, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    // A missing or malformed Authorization header gets the fixed rejection
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

    let app_state = AppState::from_ref(state);

    let user = AuthService::new(app_state.service_context())
        .authorize(bearer.token(), policy)
        .await?;

    Ok(user)
}

#[async_trait]
impl<S> FromRequestParts<S> for ManagerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authorize(parts, state, AccessPolicy::Managing)
            .await
            .map(ManagerUser)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TrainerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authorize(parts, state, AccessPolicy::Training)
            .await
            .map(TrainerUser)
    }
}
