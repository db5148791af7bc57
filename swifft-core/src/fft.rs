//! The FFT phase: an 8-point radix-2 butterfly network of depth 3 that
//! turns each group of 8 input bytes (plus their paired sign bytes)
//! into 64 intermediate signed elements.
//!
//! The interleaving of [`Lane::q_reduce`] and [`Lane::shift`] between
//! butterfly stages is load-bearing. It keeps every intermediate
//! within safe `i16` range without a reduction after every single
//! operation. See `DESIGN.md` for the magnitude bounds behind the
//! specific points chosen here.

use crate::constants::{GROUP_BYTES, MULTIPLIER, N, ROWS, TWIDDLE};
use crate::lane::{Lane, Lane8};

/// Runs one group's worth of butterfly stages on `v` in place.
fn butterfly(v: &mut [Lane8; ROWS], i: usize, j: usize) {
    let mut a = v[i];
    let mut b = v[j];
    Lane::add_sub(&mut a, &mut b);
    v[i] = a;
    v[j] = b;
}

/// Computes the FFT phase over `m` groups of [`GROUP_BYTES`] bytes each.
///
/// - `input` and `sign` must each have length `m * GROUP_BYTES`.
/// - `out` must have length `m * N`.
///
/// A byte's paired sign byte is treated as negative when nonzero and
/// positive when zero, matching the convention used by
/// `compute_signed`'s zero-sign block.
pub fn fft(input: &[u8], sign: &[u8], m: usize, out: &mut [i16]) {
    debug_assert_eq!(input.len(), m * GROUP_BYTES);
    debug_assert_eq!(sign.len(), m * GROUP_BYTES);
    debug_assert_eq!(out.len(), m * N);

    for g in 0..m {
        let base = g * GROUP_BYTES;

        // Load stage: row k's harmonics are the twiddle entry for its
        // byte/sign pair, scaled by that row's multiplier. Row 0's
        // multiplier is the identity, so the multiply is skipped.
        let mut v: [Lane8; ROWS] = core::array::from_fn(|k| {
            let byte = input[base + k] as usize;
            let sign_bit = usize::from(sign[base + k] != 0);
            let t = TWIDDLE[sign_bit][byte];
            if k == 0 {
                t
            } else {
                t.safe_mult(MULTIPLIER[k])
            }
        });

        // Butterfly stage 1.
        butterfly(&mut v, 0, 1);
        butterfly(&mut v, 2, 3);
        butterfly(&mut v, 4, 5);
        butterfly(&mut v, 6, 7);

        v[2] = v[2].q_reduce();
        v[3] = v[3].shift(4);
        v[6] = v[6].q_reduce();
        v[7] = v[7].shift(4);

        // Butterfly stage 2.
        butterfly(&mut v, 0, 2);
        butterfly(&mut v, 1, 3);
        butterfly(&mut v, 4, 6);
        butterfly(&mut v, 5, 7);

        v[4] = v[4].q_reduce();
        v[5] = v[5].shift(2);
        v[6] = v[6].shift(4);
        v[7] = v[7].shift(6);

        // Butterfly stage 3.
        butterfly(&mut v, 0, 4);
        butterfly(&mut v, 1, 5);
        butterfly(&mut v, 2, 6);
        butterfly(&mut v, 3, 7);

        for k in 0..ROWS {
            v[k] = v[k].q_reduce();
        }

        let out_base = g * N;
        for (k, row) in v.iter().enumerate() {
            out[out_base + k * ROWS..out_base + k * ROWS + ROWS].copy_from_slice(&row.0);
        }
    }
}
