//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gloser-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod training;
mod user;
mod verb;
mod word;

pub use training::PgTrainingRepository;
pub use user::PgUserRepository;
pub use verb::PgVerbRepository;
pub use word::PgWordRepository;
