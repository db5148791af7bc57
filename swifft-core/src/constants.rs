//! Fixed, process-wide data: the modulus, the block-shape parameters,
//! and the twiddle/multiplier/key tables the FFT and FFT-sum phases
//! consume.
//!
//! Every table here is produced by `const fn` evaluation at compile
//! time, the same way the reference `Z257` field type in this crate's
//! ancestor computes its `POW`/`INV`/`SQRT` tables. No build script, no
//! lazily-initialized static, nothing computed at process startup.
//!
//! The twiddle and multiplier tables encode the real SWIFFT
//! construction: `2` is the primitive 16th root of unity in
//! $\mathbb{Z}_{257}$ (since $2^8 \equiv -1$, so $2^{16} \equiv 1$, and
//! no smaller power of 2 is 1). Each input byte's 8 bits are combined
//! with that root's odd powers to produce the 8 per-row harmonics the
//! FFT butterfly network combines. The key table's exact values are an
//! external concern this crate does not have access to (see
//! `DESIGN.md`); the `const fn` generator here produces an internally
//! consistent, deterministic stand-in.

use crate::lane::Lane8;

/// The modulus of the ring SWIFFT operates over.
pub const P: u16 = 257;

/// Output element count per hash block.
pub const N: usize = 64;

/// Default number of 8-byte input groups per block.
pub const M: usize = 32;

/// Per-row harmonic width, fixed by `N = ROWS * ROW_WIDTH`.
pub const ROWS: usize = 8;

/// Per-row harmonic width, fixed by `N = ROWS * ROW_WIDTH`.
pub const ROW_WIDTH: usize = 8;

/// Bytes consumed per group (one byte per row).
pub const GROUP_BYTES: usize = ROWS;

const _: () = assert!(ROWS * ROW_WIDTH == N);
const _: () = assert!(M * GROUP_BYTES * 8 == M * N);

/// Primitive 16th root of unity in $\mathbb{Z}_{257}$.
const OMEGA: i32 = 2;

/// `OMEGA^e mod 257` for `e` in `0..16`, centered into `(-128, 128]` so
/// downstream sums of these values stay small.
const fn omega_powers() -> [i16; 16] {
    let mut powers = [0i16; 16];
    let mut e = 0usize;
    let mut acc: i32 = 1;
    while e < 16 {
        powers[e] = center(acc);
        acc = (acc * OMEGA).rem_euclid(257);
        e += 1;
    }
    powers
}

/// Reduces `x` modulo 257 into the centered range `(-128, 128]`.
const fn center(x: i32) -> i16 {
    let r = x.rem_euclid(257);
    (if r > 128 { r - 257 } else { r }) as i16
}

const OMEGA_POWERS: [i16; 16] = omega_powers();

/// `T[sign][byte]`: the per-row harmonics contributed by one input
/// byte and its paired sign byte.
///
/// Each of the byte's 8 bits is treated as a coefficient of a
/// degree-8 polynomial over $\{0, 1\}$ (negated when `sign != 0`),
/// evaluated at the 8 odd powers of [`OMEGA`] (the textbook
/// decimation-in-frequency step for an 8-point transform built from a
/// 16th root of unity).
pub type TwiddleTable = [[Lane8; 256]; 2];

const fn twiddle_table() -> TwiddleTable {
    let mut table: TwiddleTable = [[Lane8::ZERO; 256]; 2];
    let mut sign = 0usize;
    while sign < 2 {
        let sign_mult: i32 = if sign == 0 { 1 } else { -1 };
        let mut byte = 0usize;
        while byte < 256 {
            let mut harmonics = [0i16; ROW_WIDTH];
            let mut j = 0usize;
            while j < ROW_WIDTH {
                let mut sum: i32 = 0;
                let mut bit = 0usize;
                while bit < 8 {
                    let bit_value = (byte >> bit) & 1;
                    if bit_value != 0 {
                        let exponent = (bit * (2 * j + 1)) % 16;
                        sum += sign_mult * OMEGA_POWERS[exponent] as i32;
                    }
                    bit += 1;
                }
                harmonics[j] = center(sum);
                j += 1;
            }
            table[sign][byte] = Lane8(harmonics);
            byte += 1;
        }
        sign += 1;
    }
    table
}

/// Radix-2 twiddle table indexed by `[sign_bit][byte]`, each entry an
/// 8-element vector of harmonics in the centered range `(-128, 128]`.
pub static TWIDDLE: TwiddleTable = twiddle_table();

/// `M[row]`: the per-row twiddle applied at the FFT load stage before
/// the cross-row butterflies, aligning row `k`'s harmonics with the
/// other seven rows in the length-64 transform. `M[0]` is the all-ones
/// (identity) vector by construction, matching the load stage's
/// row-0-skips-multiplication optimization.
const fn multiplier_table() -> [Lane8; ROWS] {
    let mut table = [Lane8::ZERO; ROWS];
    let mut row = 0usize;
    while row < ROWS {
        let mut values = [0i16; ROW_WIDTH];
        let mut j = 0usize;
        while j < ROW_WIDTH {
            let exponent = (row * (2 * j + 1)) % 16;
            values[j] = OMEGA_POWERS[exponent];
            j += 1;
        }
        table[row] = Lane8(values);
        row += 1;
    }
    table
}

pub static MULTIPLIER: [Lane8; ROWS] = multiplier_table();

/// A simple, fixed, reproducible 64-bit LCG (Knuth's MMIX constants),
/// used only to stand in for the external pi-derived SWIFFT key (see
/// `DESIGN.md`).
const fn lcg_next(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// The public key: `M` groups of `N` canonical residues, generated
/// deterministically at compile time.
const fn key_table() -> [[i16; N]; M] {
    let mut key = [[0i16; N]; M];
    let mut state: u64 = 0x5349_4646_5430_4B45; // "SWIFFTKE" little-endian-ish seed
    let mut i = 0usize;
    while i < M {
        let mut j = 0usize;
        while j < N {
            state = lcg_next(state);
            // Top bits are the higher-quality ones for an LCG; use
            // those to pick the residue.
            key[i][j] = ((state >> 48) % P as u64) as i16;
            j += 1;
        }
        i += 1;
    }
    key
}

pub static KEY: [[i16; N]; M] = key_table();
