//! Database models - SQLx-compatible structs for PostgreSQL tables

mod training;
mod user;
mod verb;
mod word;

pub use training::{VerbCandidateModel, WordCandidateModel};
pub use user::UserModel;
pub use verb::VerbModel;
pub use word::WordModel;
