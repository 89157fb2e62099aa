//! Cycle-counter entropy mixer, used when the OS generator is unavailable.

use zeroize::Zeroize;

use super::primes::PRIMES;
use super::{RandomSource, uniform_below};

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "system clock"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn entropy() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// State word stirred with fresh timer entropy on every draw.
pub struct HwSource {
    state: u64,
}

impl HwSource {
    pub fn new() -> Self {
        HwSource { state: entropy() }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let ent = entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for HwSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for HwSource {
    fn next_uniform(&mut self, bound: usize) -> usize {
        uniform_below(bound, || self.next_u64())
    }
}

impl Drop for HwSource {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
