/// Multipliers for the state transition: the largest primes below 2^64.
pub const PRIMES: [u64; 8] = [
    18_446_744_073_709_551_557, // 2^64 - 59
    18_446_744_073_709_551_533, // 2^64 - 83
    18_446_744_073_709_551_521, // 2^64 - 95
    18_446_744_073_709_551_437, // 2^64 - 179
    18_446_744_073_709_551_427, // 2^64 - 189
    18_446_744_073_709_551_359, // 2^64 - 257
    18_446_744_073_709_551_337, // 2^64 - 279
    18_446_744_073_709_551_293, // 2^64 - 323
];
