//! Domain traits - repository ports and injectable collaborators

mod clock;
mod random;
mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{Randomizer, SeededRandomizer, ThreadRandomizer};
pub use repositories::{
    RepoResult, TrainingRepository, UserRepository, VerbRepository, WordRepository,
};
