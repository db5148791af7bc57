//! Compacting a composable hash value into its final, non-composable
//! form.
//!
//! The ancestor FFI crate's `SWIFFT_Compact` halves a 128-byte output
//! into a 64-byte `CompactOutput` by some bit-packing scheme internal
//! to the upstream C library; that scheme isn't part of this crate's
//! inputs. [`Compactor`] names the operation as a trait instead of a
//! single fixed function, so a caller who needs to match a specific
//! external compaction format can supply their own implementation.
//! [`TruncatingCompactor`] (keeps each element's low byte) is provided
//! as a working default, not a claim of interoperability with any
//! particular external deployment.

use crate::batch::drive2;
use crate::buffer::{CompactBlock, HashBlock};

/// Maps a composable [`HashBlock`] to its final, non-composable
/// [`CompactBlock`] form.
///
/// Implementations need not be injective, and a compacted value is not
/// expected to support [`crate::arithmetic::add`]/`sub`/`mul`.
pub trait Compactor {
    /// Compacts `hash` into `output`.
    fn compact(&self, hash: &HashBlock, output: &mut CompactBlock);

    /// Compacts each block in `hash` into the corresponding block in `output`.
    fn compact_multiple(&self, hash: &[HashBlock], output: &mut [CompactBlock]) {
        drive2(hash, output, |h, o| self.compact(h, o));
    }
}

/// Compacts a hash value by truncating each canonical residue to its
/// low byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingCompactor;

impl Compactor for TruncatingCompactor {
    fn compact(&self, hash: &HashBlock, output: &mut CompactBlock) {
        for (dst, &src) in output.0.iter_mut().zip(hash.0.iter()) {
            *dst = src as u8;
        }
    }
}

/// Compacts `hash` using [`TruncatingCompactor`].
pub fn compact(hash: &HashBlock, output: &mut CompactBlock) {
    TruncatingCompactor.compact(hash, output);
}

/// Compacts multiple blocks using [`TruncatingCompactor`].
pub fn compact_multiple(hash: &[HashBlock], output: &mut [CompactBlock]) {
    TruncatingCompactor.compact_multiple(hash, output);
}
