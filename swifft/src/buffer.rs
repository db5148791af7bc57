//! Fixed-size buffer types for SWIFFT's inputs and outputs.
//!
//! These mirror the ancestor FFI crate's `AlignedBuffer`-based
//! `Input`/`SignInput`/`Output`/`CompactOutput` family, but without the
//! `#[repr(C, align(64))]` packing that existed there to match an
//! external C ABI. There is no C boundary here, so a plain array
//! newtype is all a block needs.

use swifft_core::{GROUP_BYTES, M, N};

/// Bytes consumed by one SWIFFT input block: `M` groups of
/// [`GROUP_BYTES`] bytes each, 2048 bits in total.
pub const INPUT_BLOCK_BYTES: usize = M * GROUP_BYTES;

/// Elements in one hash block: `N`, 1024 bits at 16 bits per element.
pub const HASH_BLOCK_LEN: usize = N;

/// Bytes in one compacted hash block: one byte per [`HASH_BLOCK_LEN`]
/// element, each 16-bit element truncated to 8 bits.
pub const COMPACT_BLOCK_LEN: usize = N;

/// A single 2048-bit SWIFFT input block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBlock(pub [u8; INPUT_BLOCK_BYTES]);

/// The sign bits paired with an [`InputBlock`]: a nonzero byte marks
/// the corresponding input byte as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignBlock(pub [u8; INPUT_BLOCK_BYTES]);

/// A composable SWIFFT hash value: `N` canonical residues of
/// $\mathbb{Z}_{257}$.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBlock(pub [i16; HASH_BLOCK_LEN]);

/// A compacted, non-composable hash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactBlock(pub [u8; COMPACT_BLOCK_LEN]);

impl InputBlock {
    /// The all-zero input block.
    pub const ZERO: Self = Self([0; INPUT_BLOCK_BYTES]);
}

impl SignBlock {
    /// The all-positive sign block (every byte treated as nonnegative).
    pub const ZERO: Self = Self([0; INPUT_BLOCK_BYTES]);
}

impl HashBlock {
    /// The all-zero hash value, the additive identity under
    /// [`crate::arithmetic::add`].
    pub const ZERO: Self = Self([0; HASH_BLOCK_LEN]);
}

impl Default for InputBlock {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Default for SignBlock {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Default for HashBlock {
    fn default() -> Self {
        Self::ZERO
    }
}
