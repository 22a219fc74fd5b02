//! Random sources for bean draws.
//!
//! Which beans are drawn on each step is the only non-determinism in a
//! game. It is injected through the [`Rng`] trait:
//! - **Seeded play**: [`SimRng`], reproducible from a `u64` seed
//! - **Unseeded play**: [`OsRngWrapper`], fresh OS randomness every run
//!
//! # Forking
//!
//! ```rust
//! use coffeetin::SimRng;
//!
//! let mut master = SimRng::new(7);
//! let mut first_tin = master.fork();
//! let mut second_tin = master.fork();
//!
//! // Each tin draws from its own stream, still derived from seed 7.
//! let _ = (first_tin.next_usize(5), second_tin.next_usize(5));
//! ```

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng as _, RngCore, SeedableRng};

/// Source of randomness for drawing beans.
///
/// Use `<R: Rng + ?Sized>` bounds so both concrete generators and
/// `Box<dyn Rng>` from [`fork`](Rng::fork) can be passed in.
pub trait Rng {
    /// Generates a random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Generates a random `bool`.
    fn next_bool(&mut self) -> bool;

    /// Generates a random `usize` in the range `[0, max)`.
    ///
    /// `max` must be non-zero.
    fn next_usize(&mut self, max: usize) -> usize;

    /// Forks a new RNG with a derived seed.
    ///
    /// The child stream is independent of the parent but, for seeded
    /// generators, still fully determined by the parent's seed.
    fn fork(&mut self) -> Box<dyn Rng>;
}

// ============================================================================
// Seeded Implementation
// ============================================================================

/// Deterministic RNG: the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: SmallRng,
    seed: u64,
}

impl SimRng {
    /// Creates a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Generates a random `bool`.
    pub fn next_bool(&mut self) -> bool {
        self.inner.r#gen()
    }

    /// Generates a random `usize` in `[0, max)`.
    pub fn next_usize(&mut self, max: usize) -> usize {
        debug_assert!(max > 0, "max must be > 0");
        self.inner.gen_range(0..max)
    }

    /// Forks a child generator seeded from this one.
    pub fn fork(&mut self) -> SimRng {
        SimRng::new(self.next_u64())
    }
}

impl Rng for SimRng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        SimRng::next_u64(self)
    }

    #[inline]
    fn next_bool(&mut self) -> bool {
        SimRng::next_bool(self)
    }

    #[inline]
    fn next_usize(&mut self, max: usize) -> usize {
        SimRng::next_usize(self, max)
    }

    fn fork(&mut self) -> Box<dyn Rng> {
        Box::new(SimRng::fork(self))
    }
}

// ============================================================================
// OS-backed Implementation
// ============================================================================

/// Wrapper around `OsRng` for unseeded games.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngWrapper {
    inner: OsRng,
}

impl OsRngWrapper {
    /// Creates a new OS-backed RNG.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rng for OsRngWrapper {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_bool(&mut self) -> bool {
        self.inner.r#gen()
    }

    fn next_usize(&mut self, max: usize) -> usize {
        debug_assert!(max > 0, "max must be > 0");
        self.inner.gen_range(0..max)
    }

    fn fork(&mut self) -> Box<dyn Rng> {
        // OS randomness has no seed to derive from
        Box::new(OsRngWrapper::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut rng1: Box<dyn Rng> = Box::new(SimRng::new(12345));
        let mut rng2: Box<dyn Rng> = Box::new(SimRng::new(12345));

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn next_usize_stays_in_range() {
        let mut rng = SimRng::new(1);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_usize(max) < max);
            }
        }

        let mut os = OsRngWrapper::new();
        for _ in 0..100 {
            assert!(os.next_usize(3) < 3);
        }
    }

    #[test]
    fn single_choice_is_always_zero() {
        let mut rng = SimRng::new(99);
        for _ in 0..10 {
            assert_eq!(rng.next_usize(1), 0);
        }
    }

    #[test]
    fn fork_is_deterministic_and_distinct() {
        let first = SimRng::new(12345).fork().next_u64();
        let again = SimRng::new(12345).fork().next_u64();
        assert_eq!(first, again);

        let mut master = SimRng::new(12345);
        let mut a = master.fork();
        let mut b = master.fork();
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn fork_via_trait_object() {
        let mut rng: Box<dyn Rng> = Box::new(SimRng::new(7));
        let mut child = rng.fork();
        assert!(child.next_usize(10) < 10);
    }

    #[test]
    fn seed_is_remembered() {
        assert_eq!(SimRng::new(42).seed(), 42);
    }
}
