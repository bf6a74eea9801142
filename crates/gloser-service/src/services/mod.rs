//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod error;
pub mod training;
pub mod vocabulary;

// Re-export all services for convenience
pub use access::AccessPolicy;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use training::TrainingService;
pub use vocabulary::VocabularyService;
