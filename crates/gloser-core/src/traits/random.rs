//! Randomizer port - injectable random index source
//!
//! The training pick needs plain (non-cryptographic) randomness; a seedable
//! implementation makes selection deterministic in tests. Salt generation
//! does NOT go through this port - it uses the OS random source directly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Injectable source of random indices
pub trait Randomizer: Send + Sync {
    /// Uniform random index in `0..bound`. `bound` must be non-zero;
    /// callers check for an empty candidate set before picking.
    fn index_below(&self, bound: usize) -> usize;
}

/// Production randomizer backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomizer;

impl ThreadRandomizer {
    pub fn new() -> Self {
        Self
    }
}

impl Randomizer for ThreadRandomizer {
    fn index_below(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic randomizer seeded explicitly (for tests)
#[derive(Debug)]
pub struct SeededRandomizer {
    rng: Mutex<StdRng>,
}

impl SeededRandomizer {
    /// Create a randomizer from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Randomizer for SeededRandomizer {
    fn index_below(&self, bound: usize) -> usize {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        rng.gen_range(0..bound)
    }
}
