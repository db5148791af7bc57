//! The FFT-sum phase: a keyed linear combination that folds the `m * N`
//! FFT outputs of a block down to the final `N`-element hash.
//!
//! Implemented with [`Lane1`] rather than [`Lane8`]. The reduction here
//! runs across groups at a fixed output position, not across the
//! within-group rows the FFT's butterfly network touches, so there is
//! no natural width-8 batch to exploit. The width-1 lane still routes
//! through the same [`crate::lane::Lane::safe_mult`]/
//! [`crate::lane::Lane::q_reduce`] primitives the FFT uses, instead of
//! a second hand-rolled fold.

use crate::constants::N;
use crate::lane::Lane1;

/// Computes `out[j] = mod_p(sum_i q_reduce(safe_mult(fftout[i][j], key[i][j])))`
/// for `i` in `0..m`.
///
/// `fftout` must have length `m * N`; `key` must have at least `m` rows
/// of `N` canonical residues each.
pub fn fftsum(key: &[[i16; N]], fftout: &[i16], m: usize, out: &mut [i16; N]) {
    debug_assert_eq!(fftout.len(), m * N);
    debug_assert!(key.len() >= m);

    let mut acc = [0i16; N];
    for i in 0..m {
        for (j, slot) in acc.iter_mut().enumerate() {
            let term = Lane1([fftout[i * N + j]])
                .safe_mult(Lane1([key[i][j]]))
                .q_reduce()
                .0[0];
            *slot += term;
        }
    }
    for (j, slot) in out.iter_mut().enumerate() {
        *slot = Lane1([acc[j]]).mod_p().0[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KEY, M};

    #[test]
    fn all_zero_fft_output_gives_all_zero_hash() {
        let fftout = [0i16; M * N];
        let mut out = [0i16; N];
        fftsum(&KEY, &fftout, M, &mut out);
        assert_eq!(out, [0i16; N]);
    }

    #[test]
    fn fftsum_is_deterministic() {
        let mut fftout = [3i16; M * N];
        fftout[0] = -9;
        let mut out1 = [0i16; N];
        let mut out2 = [0i16; N];
        fftsum(&KEY, &fftout, M, &mut out1);
        fftsum(&KEY, &fftout, M, &mut out2);
        assert_eq!(out1, out2);
    }

    #[test]
    fn output_is_canonical() {
        let fftout = [12345i16; M * N];
        let mut out = [0i16; N];
        fftsum(&KEY, &fftout, M, &mut out);
        for v in out {
            assert!((0..257).contains(&v));
        }
    }

    #[test]
    fn matches_naive_reference_mod_257() {
        let fftout: [i16; M * N] = core::array::from_fn(|i| ((i * 37) % 500) as i16 - 250);
        let mut out = [0i16; N];
        fftsum(&KEY, &fftout, M, &mut out);

        for j in 0..N {
            let mut expected: i64 = 0;
            for i in 0..M {
                expected += fftout[i * N + j] as i64 * KEY[i][j] as i64;
            }
            assert_eq!(out[j] as i64, expected.rem_euclid(257), "j={j}");
        }
    }

    #[test]
    fn changing_one_fft_value_changes_the_hash() {
        let base = [5i16; M * N];
        let mut perturbed = base;
        perturbed[N] += 1; // first element of group 1

        let mut base_out = [0i16; N];
        let mut perturbed_out = [0i16; N];
        fftsum(&KEY, &base, M, &mut base_out);
        fftsum(&KEY, &perturbed, M, &mut perturbed_out);
        assert_ne!(base_out, perturbed_out);
    }
}
