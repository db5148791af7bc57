//! Low-level lattice-arithmetic engine for the SWIFFT compression
//! function.
//!
//! No notion of "a hash" or "a block" here; that vocabulary, and the
//! buffer types that carry it, live one layer up in `swifft`. This
//! crate has the arithmetic those types are built from: the [`lane`]
//! kernel, the compile-time [`constants`] tables, and the two
//! transform phases ([`fft`], [`fftsum`]) composed into a SWIFFT
//! compression.
//!
//! No error channel. Every public function is total over its
//! documented domain; length preconditions are a caller contract
//! checked with `debug_assert!`, not a runtime condition to recover
//! from.

#![forbid(unsafe_code)]

pub mod constants;
pub mod fft;
pub mod fftsum;
pub mod lane;

pub use constants::{GROUP_BYTES, KEY, M, MULTIPLIER, N, P, ROWS, ROW_WIDTH, TWIDDLE};
pub use fft::fft;
pub use fftsum::fftsum;
pub use lane::{Lane, Lane1, Lane8};
