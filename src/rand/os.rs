//! Sources backed by the `rand` crate.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zeroize::Zeroize;

use super::RandomSource;

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource(OsRng);

impl OsSource {
    /// Read a few bytes to confirm the OS generator works.
    pub fn probe() -> Result<Self, rand::Error> {
        let mut buf = [0u8; 8];
        OsRng.try_fill_bytes(&mut buf)?;
        buf.zeroize();
        Ok(OsSource(OsRng))
    }
}

impl RandomSource for OsSource {
    fn next_uniform(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Deterministic ChaCha stream. The same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededSource(ChaCha8Rng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_uniform(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}
