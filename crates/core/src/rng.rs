//! RNG module - injectable randomness for stage generation
//!
//! Stage generation never reaches for a global generator. It draws through
//! the [`RandomSource`] capability, so a seeded [`SimpleRng`] reproduces a
//! course exactly and tests can script every draw with a closure.

/// Uniform integer draws over inclusive ranges.
pub trait RandomSource {
    /// Draw a value in `lo..=hi`. Callers always pass `lo <= hi`.
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;
}

/// Any `FnMut(lo, hi) -> value` is a random source; handy for scripted draws.
impl<F> RandomSource for F
where
    F: FnMut(u32, u32) -> u32,
{
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        self(lo, hi)
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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for reseeding a follow-up round)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        let span = hi.saturating_sub(lo).saturating_add(1);
        lo + self.next_range(span)
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

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_uniform_int_stays_in_inclusive_range() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = rng.uniform_int(4, 6);
            assert!((4..=6).contains(&v), "out of range: {}", v);
            seen[(v - 4) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value should appear: {:?}", seen);
    }

    #[test]
    fn test_uniform_int_degenerate_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..10 {
            assert_eq!(rng.uniform_int(3, 3), 3);
        }
    }

    #[test]
    fn test_closure_is_a_random_source() {
        let mut calls = Vec::new();
        let mut source = |lo: u32, hi: u32| {
            calls.push((lo, hi));
            hi
        };
        assert_eq!(source.uniform_int(0, 4), 4);
        assert_eq!(source.uniform_int(0, 100), 100);
        drop(source);
        assert_eq!(calls, vec![(0, 4), (0, 100)]);
    }
}
