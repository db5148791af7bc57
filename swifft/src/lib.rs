//! A Rust implementation of the SWIFFT lattice-based compression
//! function: a public, provably collision-resistant (under worst-case
//! lattice assumptions) function from 2048-bit blocks to a composable
//! 1024-bit hash value.
//!
//! Hash values support an element-wise ring structure
//! ([`arithmetic::add`]/[`arithmetic::sub`]/[`arithmetic::mul`]) useful
//! for building larger constructions (Merkle-tree-like compositions,
//! accumulator schemes) on top of a single compression primitive.
//! [`compact::compact`] produces the final, non-composable digest a
//! caller actually stores or transmits.
//!
//! ```
//! use swifft::{buffer::InputBlock, hash};
//!
//! let input = InputBlock([7; 256]);
//! let mut hash_value = Default::default();
//! hash::compute(&input, &mut hash_value);
//! ```

pub mod arithmetic;
pub mod batch;
pub mod buffer;
pub mod compact;
pub mod hash;

pub use buffer::{CompactBlock, HashBlock, InputBlock, SignBlock};
pub use compact::{Compactor, TruncatingCompactor};
