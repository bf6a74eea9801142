//! # gloser-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, CreateVerbRequest, CreateWordRequest, CreatedResponse, HealthResponse,
    LoginRequest, ReadinessResponse, RegisterRequest, UpdateVerbRequest, UpdateWordRequest,
    UserResponse, VerbResponse, VerbTrainingResponse, WordResponse, WordTrainingResponse,
};
pub use services::{
    AccessPolicy, AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    TrainingService, VocabularyService,
};
