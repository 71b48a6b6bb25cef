// Odd primes used as state multipliers. Any odd multiplier keeps the
// transition a bijection on the state space.
pub const PRIMES: [u64; 8] = [
    18_446_744_073_709_551_557, // 2^64 - 59
    2_305_843_009_213_693_951,  // 2^61 - 1
    1_099_511_628_211,          // FNV-1a 64-bit prime
    4_294_967_291,              // 2^32 - 5
    2_147_483_647,              // 2^31 - 1
    1_000_000_007,
    998_244_353,
    16_777_619,
];
