// Randomness for the decay samplers.
//
// Every stochastic operation in the crate draws through the `RandomSource`
// trait, so tests can script exact uniform sequences and verify individual
// rejection/acceptance decisions. The default production source is a
// PCG-LCG generator (RXS-M-XS output permutation) with a bare u64 of state,
// cheap enough to own one stream per simulator instance.

use rand::{Rng, RngCore, SeedableRng};

/// A stream of uniform variates in [0, 1).
///
/// This is the single randomness seam of the crate: one draw per call,
/// state advanced on every draw.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;
}

/// LCG multiplier.
const PRN_MULT: u64 = 6364136223846793005;
/// LCG additive constant.
const PRN_ADD: u64 = 1442695040888963407;

/// Default random source: a PCG variant over a 64-bit LCG.
///
/// Reference: Melissa E. O'Neill, "PCG: A Family of Simple Fast
/// Space-Efficient Statistically Good Algorithms for Random Number
/// Generation".
#[derive(Clone, Copy, Debug)]
pub struct FastRng {
    state: u64,
}

impl FastRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform f64 in [0, 1).
    #[inline(always)]
    pub fn random(&mut self) -> f64 {
        // Equivalent to ldexp(next_u64, -64).
        (self.next_u64() as f64) * 5.421010862427522e-20
    }

    /// Reset the stream to a fresh seed.
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed;
    }
}

impl RandomSource for FastRng {
    #[inline(always)]
    fn uniform(&mut self) -> f64 {
        self.random()
    }
}

impl SeedableRng for FastRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

impl RngCore for FastRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        // Advance the LCG.
        self.state = PRN_MULT.wrapping_mul(self.state).wrapping_add(PRN_ADD);

        // RXS-M-XS output permutation.
        let word = ((self.state >> ((self.state >> 59) + 5)) ^ self.state)
            .wrapping_mul(12605985483714917081);
        (word >> 43) ^ word
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut left = dest;
        while left.len() >= 8 {
            let bytes = self.next_u64().to_le_bytes();
            left[..8].copy_from_slice(&bytes);
            left = &mut left[8..];
        }
        if !left.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            left.copy_from_slice(&bytes[..left.len()]);
        }
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`], e.g.
/// `RngSource(StdRng::seed_from_u64(42))` in tests.
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// A source that replays a fixed sequence of uniforms, for tests that need
/// to force specific acceptance or rejection outcomes.
///
/// Panics when the sequence is exhausted: running out of scripted draws in
/// a test means the draw accounting is wrong.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of scripted draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        let value = *self
            .values
            .get(self.cursor)
            .expect("scripted random sequence exhausted");
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_fast_rng_deterministic() {
        let mut rng1 = FastRng::new(12345);
        let mut rng2 = FastRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.random(), rng2.random());
        }
    }

    #[test]
    fn test_fast_rng_range() {
        let mut rng = FastRng::new(42);
        for _ in 0..10000 {
            let val = rng.uniform();
            assert!((0.0..1.0).contains(&val), "value {} out of [0, 1)", val);
        }
    }

    #[test]
    fn test_fast_rng_reseed() {
        let mut rng = FastRng::new(12345);
        let first = rng.random();
        for _ in 0..100 {
            rng.random();
        }
        rng.reseed(12345);
        assert_eq!(rng.random(), first);
    }

    #[test]
    fn test_fast_rng_as_rand_rng() {
        let mut rng = FastRng::new(7);
        let _: f64 = rng.gen();
        let _: u32 = rng.gen();
        let _: bool = rng.gen();
    }

    #[test]
    fn test_rng_source_adapter() {
        let mut src = RngSource(StdRng::seed_from_u64(1));
        for _ in 0..100 {
            let val = src.uniform();
            assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn test_scripted_source_replays() {
        let mut src = ScriptedSource::new(vec![0.25, 0.5, 0.75]);
        assert_eq!(src.uniform(), 0.25);
        assert_eq!(src.uniform(), 0.5);
        assert_eq!(src.uniform(), 0.75);
        assert_eq!(src.consumed(), 3);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_source_exhaustion_panics() {
        let mut src = ScriptedSource::new(vec![0.1]);
        src.uniform();
        src.uniform();
    }
}
