use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;
const MODULUS: i64 = i32::MAX as i64;

/// Source of randomness for rollouts and uniform-random move choice.
///
/// The search engine owns one generator and draws every random number from it,
/// so a seeded generator makes a whole search reproducible.
pub trait RandomGenerator: Default {
    /// Returns a uniformly distributed index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Picks one element of `items`, or `None` when it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            None
        } else {
            items.get(self.next_index(items.len()))
        }
    }
}

/// Thread-local generator from `rand`. Not reproducible.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// `StdRng` seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED as u64)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// A linear congruential generator whose sequence never changes between releases.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    /// Any `i64` is accepted; the seed is reduced into the generator's modulus first.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(MODULUS),
        }
    }

    fn next(&mut self) -> i64 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.seed
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        (self.next() % len as i64).unsigned_abs() as usize
    }
}
