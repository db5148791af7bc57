//! The modular arithmetic kernel. A fixed-width vector of signed
//! 16-bit lanes, each holding a residue of $\mathbb{Z}_{257}$ in some
//! not-necessarily-canonical representation, plus the five primitives
//! ([`Lane::add_sub`], [`Lane::q_reduce`], [`Lane::mod_p`],
//! [`Lane::safe_mult`], [`Lane::shift`]) every other component in this
//! crate is built from.
//!
//! Correctness does not depend on the lane count `O`, only the store
//! pattern a caller builds around it. The FFT (`crate::fft`) always
//! uses [`Lane8`], fixed by the shape of the twiddle and multiplier
//! tables. [`Lane1`] exists to exercise the kernel's lane-count
//! independence directly in tests.

use crate::constants::P;

/// A vector of `O` signed 16-bit residues of $\mathbb{Z}_{257}$.
///
/// Elements are not required to be in the canonical range `0..=256`
/// except immediately after [`Lane::mod_p`]; in between, they only need
/// to stay within `i16`, which the reduction schedule in `crate::fft`
/// guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Lane<const O: usize>(pub [i16; O]);

/// The per-row lane width fixed by the shape of the twiddle and
/// multiplier tables (`crate::constants::TWIDDLE`, `MULTIPLIER`).
pub type Lane8 = Lane<8>;

/// A single-element lane, useful for exercising the kernel
/// scalar-at-a-time and proving it agrees with [`Lane8`].
pub type Lane1 = Lane<1>;

impl<const O: usize> Lane<O> {
    /// The zero vector.
    pub const ZERO: Self = Self([0; O]);

    /// Broadcasts `value` to every lane.
    #[inline]
    pub const fn splat(value: i16) -> Self {
        Self([value; O])
    }

    /// Pointwise fold of a widened accumulator back into `i16` range,
    /// using the identity `x = 256 * (x >> 8) + (x & 0xFF)` together
    /// with `256 \equiv -1 \pmod{257}$, so `x \equiv (x \& 0xFF) - (x >> 8)`.
    ///
    /// The result is congruent to `x` modulo [`P`] but not necessarily
    /// canonical; it is the shared building block behind [`Lane::q_reduce`],
    /// [`Lane::safe_mult`], and [`Lane::shift`].
    #[inline]
    const fn fold(x: i32) -> i16 {
        let folded = (x & 0xFF) - (x >> 8);
        debug_assert!(folded >= i16::MIN as i32 && folded <= i16::MAX as i32);
        folded as i16
    }

    /// The radix-2 butterfly primitive: `(a, b) -> (a + b, a - b)`, in place.
    ///
    /// Callers keep `a` and `b` small enough beforehand that the sum
    /// and difference do not overflow `i16`. The FFT's reduction
    /// schedule (`crate::fft`) is the proof that they do.
    #[inline]
    pub fn add_sub(a: &mut Self, b: &mut Self) {
        for i in 0..O {
            let sum = a.0[i] + b.0[i];
            let diff = a.0[i] - b.0[i];
            a.0[i] = sum;
            b.0[i] = diff;
        }
    }

    /// Partial reduction modulo [`P`]: brings every lane into a bounded
    /// but not necessarily canonical range, cheaply enough to call
    /// between butterfly stages without hurting throughput.
    #[inline]
    pub fn q_reduce(self) -> Self {
        let mut out = self;
        for i in 0..O {
            out.0[i] = Self::fold(self.0[i] as i32);
        }
        out
    }

    /// Full canonical reduction modulo [`P`], into `0..=256`.
    #[inline]
    pub fn mod_p(self) -> Self {
        let mut out = self;
        for i in 0..O {
            out.0[i] = (self.0[i] as i32).rem_euclid(P as i32) as i16;
        }
        out
    }

    /// Pointwise product, safe against 16-bit overflow regardless of
    /// how large (within `i16`) either operand is. The product is
    /// computed in `i32` and immediately folded back down with the
    /// same identity [`Lane::q_reduce`] uses.
    ///
    /// Used at the FFT load stage and in the FFT-sum accumulation,
    /// where one operand (a twiddle or key value) is canonical but the
    /// other may not yet have been reduced.
    #[inline]
    pub fn safe_mult(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..O {
            out.0[i] = Self::fold(self.0[i] as i32 * rhs.0[i] as i32);
        }
        out
    }

    /// Multiplies every lane by $2^k$ modulo [`P]`.
    ///
    /// `2` has multiplicative order 16 in $\mathbb{Z}_{257}$ (since
    /// $2^8 \equiv -1$ and hence $2^{16} \equiv 1$), so it is the
    /// primitive 16th root of unity the FFT's twiddle steps multiply
    /// by. Multiplication by one of its powers therefore needs no
    /// general multiply: a left shift followed by the same fold
    /// [`Lane::q_reduce`] uses.
    #[inline]
    pub fn shift(self, k: u32) -> Self {
        let mut out = self;
        for i in 0..O {
            out.0[i] = Self::fold((self.0[i] as i32) << k);
        }
        out
    }
}

impl<const O: usize> Default for Lane<O> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}
