//! Service context - dependency container for services
//!
//! Holds the repositories and shared collaborators needed by services.

use std::sync::Arc;

use gloser_common::auth::{JwtService, PasswordService};
use gloser_core::traits::{
    Randomizer, TrainingRepository, UserRepository, VerbRepository, WordRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repository ports (the only storage access)
/// - JWT service for authentication
/// - Password service keyed with the configured pepper
/// - The randomizer used by training selection
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    word_repo: Arc<dyn WordRepository>,
    verb_repo: Arc<dyn VerbRepository>,
    training_repo: Arc<dyn TrainingRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: Arc<PasswordService>,
    randomizer: Arc<dyn Randomizer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        word_repo: Arc<dyn WordRepository>,
        verb_repo: Arc<dyn VerbRepository>,
        training_repo: Arc<dyn TrainingRepository>,
        jwt_service: Arc<JwtService>,
        password_service: Arc<PasswordService>,
        randomizer: Arc<dyn Randomizer>,
    ) -> Self {
        Self {
            user_repo,
            word_repo,
            verb_repo,
            training_repo,
            jwt_service,
            password_service,
            randomizer,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the word repository
    pub fn word_repo(&self) -> &dyn WordRepository {
        self.word_repo.as_ref()
    }

    /// Get the verb repository
    pub fn verb_repo(&self) -> &dyn VerbRepository {
        self.verb_repo.as_ref()
    }

    /// Get the training repository
    pub fn training_repo(&self) -> &dyn TrainingRepository {
        self.training_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Get the randomizer used for training selection
    pub fn randomizer(&self) -> &dyn Randomizer {
        self.randomizer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    word_repo: Option<Arc<dyn WordRepository>>,
    verb_repo: Option<Arc<dyn VerbRepository>>,
    training_repo: Option<Arc<dyn TrainingRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<Arc<PasswordService>>,
    randomizer: Option<Arc<dyn Randomizer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            word_repo: None,
            verb_repo: None,
            training_repo: None,
            jwt_service: None,
            password_service: None,
            randomizer: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn word_repo(mut self, repo: Arc<dyn WordRepository>) -> Self {
        self.word_repo = Some(repo);
        self
    }

    pub fn verb_repo(mut self, repo: Arc<dyn VerbRepository>) -> Self {
        self.verb_repo = Some(repo);
        self
    }

    pub fn training_repo(mut self, repo: Arc<dyn TrainingRepository>) -> Self {
        self.training_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn randomizer(mut self, randomizer: Arc<dyn Randomizer>) -> Self {
        self.randomizer = Some(randomizer);
        self
    }

    /// Build the context, failing when a dependency was not provided
    pub fn build(self) -> Result<ServiceContext, String> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or("user_repo is required")?,
            word_repo: self.word_repo.ok_or("word_repo is required")?,
            verb_repo: self.verb_repo.ok_or("verb_repo is required")?,
            training_repo: self.training_repo.ok_or("training_repo is required")?,
            jwt_service: self.jwt_service.ok_or("jwt_service is required")?,
            password_service: self.password_service.ok_or("password_service is required")?,
            randomizer: self.randomizer.ok_or("randomizer is required")?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
