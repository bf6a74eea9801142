//! # gloser-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `gloser-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The schema-level guarantees the domain relies on live in `migrations/`:
//! partial unique indexes on `(german, norsk) WHERE active` back the
//! duplicate check, and the training tables carry a composite primary key
//! on `(username, item id)` so success recording is a single atomic upsert.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgTrainingRepository, PgUserRepository, PgVerbRepository, PgWordRepository,
};
