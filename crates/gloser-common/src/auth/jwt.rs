//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken`
//! crate. Expiry is checked against an injected clock rather than the global
//! system clock, so validation is testable with pinned time.

use std::sync::Arc;

use gloser_core::{Clock, Role, UserName};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (configured constant)
    pub sub: String,
    /// Audience (configured constant)
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Name of the authenticated user
    pub username: String,
    /// Role granted at registration
    pub role: Role,
}

impl Claims {
    /// Get the username as a validated UserName
    ///
    /// # Errors
    /// Returns an error if the claim does not hold a valid user name
    pub fn user_name(&self) -> Result<UserName, AppError> {
        UserName::new(&self.username).map_err(|_| AppError::InvalidToken)
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    subject: String,
    audience: String,
    token_expiry: i64,
    clock: Arc<dyn Clock>,
}

impl JwtService {
    /// Create a new JWT service from configuration and an injected clock
    #[must_use]
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            subject: config.subject.clone(),
            audience: config.audience.clone(),
            token_expiry: config.token_expiry,
            clock,
        }
    }

    /// Token validity window in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed token for a validated user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, username: &UserName, role: Role) -> Result<String, AppError> {
        let iat = self.clock.timestamp();

        let claims = Claims {
            sub: self.subject.clone(),
            aud: self.audience.clone(),
            iat,
            exp: iat + self.token_expiry,
            username: username.as_str().to_string(),
            role,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Errors
    /// `InvalidToken` when the token is malformed, carries a bad signature,
    /// or its audience/subject does not match the configuration;
    /// `TokenExpired` when the validity window has elapsed.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.set_audience(&[self.audience.as_str()]);
        validation.sub = Some(self.subject.clone());
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        if token_data.claims.exp <= self.clock.timestamp() {
            return Err(AppError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("subject", &self.subject)
            .field("audience", &self.audience)
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
