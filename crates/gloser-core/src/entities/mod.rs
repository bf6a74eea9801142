//! Domain entities - core business objects

mod role;
mod training;
mod user;
mod verb;
mod word;

pub use role::{Role, RoleParseError};
pub use training::{VerbCandidate, WordCandidate};
pub use user::User;
pub use verb::Verb;
pub use word::Word;
