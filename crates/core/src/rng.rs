//! RNG module - injectable random source for block attributes
//!
//! The engine never reaches for a global RNG. It draws person counts through
//! [`RandomSource`], so hosts can seed it and tests can script exact sequences.
//!
//! Also provides a simple LCG for deterministic play.

use crate::types::PERSON_COUNT_MAX;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate a value in range [0, max). `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Draw a person count in `[0, PERSON_COUNT_MAX)`.
    fn next_person_count(&mut self) -> u32 {
        self.next_range(PERSON_COUNT_MAX)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (a restart can continue the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range requires a non-empty range");
        // Low LCG bits cycle quickly; scale from the high bits instead of `%`.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_coerced() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_person_count_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_person_count() < PERSON_COUNT_MAX);
        }
    }

    #[test]
    fn test_person_counts_spread_over_range() {
        let mut rng = SimpleRng::new(99);
        let mut low = false;
        let mut high = false;
        for _ in 0..1000 {
            let v = rng.next_person_count();
            low |= v < 10;
            high |= v >= 90;
        }
        assert!(low && high);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut source: R) -> u32 {
            source.next_range(100)
        }

        let mut a = SimpleRng::new(5);
        let mut b = SimpleRng::new(5);
        assert_eq!(a.next_range(100), draw(&mut b));
        assert_eq!(a.state(), b.state());
    }
}
