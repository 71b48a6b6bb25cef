//! Reproducible random source for `--seed` and tests.

use ::rand::rngs::StdRng;
use ::rand::{RngCore, SeedableRng};

use super::RandomSource;

/// Deterministic source wrapping `rand::rngs::StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRand {
    rng: StdRng,
}

impl SeededRand {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
