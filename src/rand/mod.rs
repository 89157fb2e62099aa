//! Random sources for password generation.
//!
//! Every draw the generator makes goes through [`RandomSource`], so callers
//! decide where randomness comes from: the operating system CSPRNG, the
//! cycle-counter mixer as a fallback, or a seeded stream for reproducible
//! output.

mod hw;
mod os;
mod primes;

use serde::{Deserialize, Serialize};

pub use hw::HwSource;
pub use os::{OsSource, SeededSource};

/// Provider of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `[0, bound)`.
    ///
    /// `bound` must be non-zero.
    fn next_uniform(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self, bound: usize) -> usize {
        (**self).next_uniform(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_uniform(&mut self, bound: usize) -> usize {
        (**self).next_uniform(bound)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Operating system CSPRNG
    #[default]
    Os,
    /// CPU cycle counter mixer (weaker fallback)
    Hw,
}

pub fn source_name(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Os => "OS CSPRNG",
        SourceKind::Hw => hw::source_name(),
    }
}

/// Open a source of the requested kind. If the OS generator cannot be read,
/// fall back to the hardware mixer.
pub fn open(kind: SourceKind) -> Box<dyn RandomSource> {
    match kind {
        SourceKind::Os => match OsSource::probe() {
            Ok(source) => {
                log::debug!("using OS random source");
                Box::new(source)
            }
            Err(e) => {
                log::warn!("OS random source unavailable ({e}), falling back to {}", hw::source_name());
                Box::new(HwSource::new())
            }
        },
        SourceKind::Hw => {
            log::debug!("using {} random source", hw::source_name());
            Box::new(HwSource::new())
        }
    }
}

/// Map raw 64-bit outputs into `[0, bound)` without modulo bias by rejecting
/// values below `2^64 mod bound`.
pub(crate) fn uniform_below(bound: usize, mut next: impl FnMut() -> u64) -> usize {
    assert!(bound > 0, "bound must be non-zero");
    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let x = next();
        if x >= threshold {
            return (x % bound) as usize;
        }
    }
}
