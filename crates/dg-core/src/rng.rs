//! Random number generation for dungeon layouts
//!
//! Uses a seeded ChaCha RNG so a seed always reproduces the same level.
//! One stream is threaded explicitly through every phase that draws from it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number stream
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a value in `lo..hi` (half-open)
    ///
    /// Returns `lo` if the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Returns a value in `lo..=hi`
    ///
    /// Returns `lo` if `hi < lo`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns a uniform sample in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Returns true with probability `p`
    ///
    /// Always draws exactly one sample so the stream position does not
    /// depend on `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}
