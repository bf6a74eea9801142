//! Authentication service
//!
//! Handles user registration, login, and the per-request authorization
//! pass that turns a bearer token into an authorized user.

use gloser_core::entities::User;
use gloser_core::{DomainError, UserName};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::access::AccessPolicy;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let username = UserName::new(&request.username)?;

        // Hash with a fresh salt; the pepper is already inside the service
        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::from)?;

        let user = User::new(username, request.firstname, request.lastname, request.role);

        // A duplicate name surfaces from the store's primary key
        self.ctx.user_repo().insert(&user, &password_hash).await?;

        info!(username = %user.username, role = %user.role, "User registered");

        let token = self
            .ctx
            .jwt_service()
            .issue(&user.username, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token,
            self.ctx.jwt_service().token_expiry(),
            UserResponse::from(&user),
        ))
    }

    /// Login with username and password
    ///
    /// Unknown name, wrong password and deactivated account all produce the
    /// same invalid-credentials error, so callers cannot enumerate users.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let username =
            UserName::new(&request.username).map_err(|_| invalid_credentials("empty name"))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_name(&username)
            .await?
            .ok_or_else(|| invalid_credentials("unknown user"))?;

        if !user.is_active() {
            return Err(invalid_credentials("inactive account"));
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&username)
            .await?
            .ok_or_else(|| invalid_credentials("no password hash"))?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|_| invalid_credentials("wrong password"))?;

        info!(username = %user.username, "User logged in");

        let token = self
            .ctx
            .jwt_service()
            .issue(&user.username, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token,
            self.ctx.jwt_service().token_expiry(),
            UserResponse::from(&user),
        ))
    }

    /// Validate a bearer token and authorize it against the given policy.
    ///
    /// The active flag and role are re-read from the store, not trusted
    /// from the claims - a deactivated user holding a still-valid token
    /// is rejected here.
    #[instrument(skip(self, token))]
    pub async fn authorize(&self, token: &str, policy: AccessPolicy) -> ServiceResult<User> {
        let claims = self
            .ctx
            .jwt_service()
            .validate(token)
            .map_err(ServiceError::from)?;

        let username = claims.user_name().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_name(&username)
            .await?
            .ok_or_else(|| {
                warn!("Authorization failed: no active user");
                ServiceError::Domain(DomainError::NoActiveUser)
            })?;

        if !user.is_active() {
            warn!("Authorization failed: no active user");
            return Err(ServiceError::Domain(DomainError::NoActiveUser));
        }

        if !policy.allows(user.role) {
            warn!(scope = policy.scope(), "Authorization failed: role not allowed");
            return Err(ServiceError::App(policy.unauthorized()));
        }

        info!(username = %user.username, scope = policy.scope(), "Request authorized");

        Ok(user)
    }
}

/// The generic login failure. The reason stays in the log, never in the
/// response.
fn invalid_credentials(reason: &str) -> ServiceError {
    warn!(reason, "Login failed");
    ServiceError::App(gloser_common::AppError::InvalidCredentials)
}
