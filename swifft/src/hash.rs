//! Computing SWIFFT hash values.
//!
//! # Arguments and returns
//!
//! Following the ancestor FFI crate's convention, these functions take
//! their output buffer by `&mut` reference rather than returning it.
//! Useful when the caller is driving many blocks and wants to reuse
//! one allocation.

use swifft_core::{KEY, M, N};

use crate::batch::{drive2, drive3};
use crate::buffer::{HashBlock, InputBlock, SignBlock};

/// Computes the SWIFFT compression of `input`, treating every byte as
/// nonnegative.
///
/// The result is composable with other hash values via
/// [`crate::arithmetic::add`]/[`crate::arithmetic::sub`]/[`crate::arithmetic::mul`].
///
/// # Arguments
/// * `input` - the input of 256 bytes (2048 bit)
/// * `output` - the resulting hash value, of 64 elements (1024 bit)
pub fn compute(input: &InputBlock, output: &mut HashBlock) {
    compute_signed(input, &SignBlock::ZERO, output);
}

/// Computes the SWIFFT compression of multiple blocks.
///
/// # Arguments
/// * `input` - the blocks of input, each of 256 bytes (2048 bit)
/// * `output` - the resulting blocks of hash values, each of 64 elements
pub fn compute_multiple(input: &[InputBlock], output: &mut [HashBlock]) {
    drive2(input, output, |i, o| compute(i, o));
}

/// Computes the SWIFFT compression of `input`, with `sign_input`
/// marking which bytes of `input` are negative.
///
/// # Arguments
/// * `input` - the input of 256 bytes (2048 bit)
/// * `sign_input` - the sign bits paired with `input`, of 256 bytes
/// * `output` - the resulting hash value, of 64 elements (1024 bit)
pub fn compute_signed(input: &InputBlock, sign_input: &SignBlock, output: &mut HashBlock) {
    let mut fft_output = [0i16; M * N];
    swifft_core::fft(&input.0, &sign_input.0, M, &mut fft_output);
    swifft_core::fftsum(&KEY, &fft_output, M, &mut output.0);
}

/// Computes the SWIFFT compression of multiple signed blocks.
///
/// # Arguments
/// * `input` - the blocks of input, each of 256 bytes (2048 bit)
/// * `sign_input` - the blocks of sign bits paired with `input`
/// * `output` - the resulting blocks of hash values, each of 64 elements
pub fn compute_multiple_signed(
    input: &[InputBlock],
    sign_input: &[SignBlock],
    output: &mut [HashBlock],
) {
    drive3(input, sign_input, output, |i, s, o| compute_signed(i, s, o));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        let input = InputBlock([7; 256]);
        let mut h1 = HashBlock::ZERO;
        let mut h2 = HashBlock::ZERO;
        compute(&input, &mut h1);
        compute(&input, &mut h2);
        assert_eq!(h1, h2);
    }

    #[test]
    fn compute_output_is_in_canonical_range() {
        let input = InputBlock([0xAB; 256]);
        let mut hash = HashBlock::ZERO;
        compute(&input, &mut hash);
        for v in hash.0 {
            assert!((0..257).contains(&v));
        }
    }

    #[test]
    fn compute_is_not_constant() {
        let mut zero_hash = HashBlock::ZERO;
        let mut one_hash = HashBlock::ZERO;
        compute(&InputBlock::ZERO, &mut zero_hash);
        let mut one_input = InputBlock::ZERO;
        one_input.0[0] = 1;
        compute(&one_input, &mut one_hash);
        assert_ne!(zero_hash, one_hash);
    }

    #[test]
    fn compute_matches_compute_signed_with_zero_sign() {
        let input = InputBlock([42; 256]);
        let mut via_compute = HashBlock::ZERO;
        let mut via_signed = HashBlock::ZERO;
        compute(&input, &mut via_compute);
        compute_signed(&input, &SignBlock::ZERO, &mut via_signed);
        assert_eq!(via_compute, via_signed);
    }

    #[test]
    fn compute_signed_differs_from_unsigned_for_nonzero_sign() {
        let input = InputBlock([5; 256]);
        let mut negative_sign = SignBlock::ZERO;
        negative_sign.0[0] = 1;

        let mut positive = HashBlock::ZERO;
        let mut negative = HashBlock::ZERO;
        compute(&input, &mut positive);
        compute_signed(&input, &negative_sign, &mut negative);
        assert_ne!(positive, negative);
    }

    #[test]
    fn compute_multiple_matches_per_block_compute() {
        let inputs: Vec<InputBlock> = (0..20u32).map(|k| InputBlock([k as u8; 256])).collect();
        let mut batched = vec![HashBlock::ZERO; inputs.len()];
        compute_multiple(&inputs, &mut batched);

        for (input, expected) in inputs.iter().zip(batched.iter()) {
            let mut single = HashBlock::ZERO;
            compute(input, &mut single);
            assert_eq!(single, *expected);
        }
    }

    #[test]
    fn compute_multiple_below_threshold_matches_above() {
        // The same logical computation, with a batch small enough to
        // stay sequential and one large enough to parallelize, must
        // agree element-for-element.
        let small: Vec<InputBlock> = (0..3u32).map(|k| InputBlock([k as u8; 256])).collect();
        let large: Vec<InputBlock> = (0..20u32).map(|k| InputBlock([k as u8; 256])).collect();

        let mut small_out = vec![HashBlock::ZERO; small.len()];
        let mut large_out = vec![HashBlock::ZERO; large.len()];
        compute_multiple(&small, &mut small_out);
        compute_multiple(&large, &mut large_out);

        for i in 0..small.len() {
            assert_eq!(small_out[i], large_out[i]);
        }
    }

    #[test]
    fn compute_multiple_signed_matches_per_block_compute_signed() {
        let inputs: Vec<InputBlock> = (0..10u32).map(|k| InputBlock([k as u8; 256])).collect();
        let signs: Vec<SignBlock> = (0..10u32)
            .map(|k| SignBlock([(k % 2) as u8; 256]))
            .collect();
        let mut batched = vec![HashBlock::ZERO; inputs.len()];
        compute_multiple_signed(&inputs, &signs, &mut batched);

        for ((input, sign), expected) in inputs.iter().zip(signs.iter()).zip(batched.iter()) {
            let mut single = HashBlock::ZERO;
            compute_signed(input, sign, &mut single);
            assert_eq!(single, *expected);
        }
    }
}
