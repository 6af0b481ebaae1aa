//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! used by both the X25519 key exchange and the Ed25519 signature
//! scheme.
//!
//! ## Representation
//!
//! Field elements are represented as 16 signed 64-bit limbs in radix
//! 2¹⁶: limb `i` carries the bits at weight 2^(16·i). A limb nominally
//! holds a value in `[0, 0xFFFF]`, but additions, subtractions and the
//! inner multiplication loop are allowed to leave limbs far outside
//! that range ("lazy reduction"); the carry passes restore the nominal
//! range.
//!
//! The signed 64-bit limb type gives ample headroom: a full 16×16
//! schoolbook product of carry-saturated limbs, folded with the ×38
//! reduction constant, stays below 2⁴⁵ in magnitude.
//!
//! ## Reduction identity
//!
//! Since 2²⁵⁵ ≡ 19 (mod p) and limbs carry 16 bits, a limb at position
//! 16 or above folds into the limb sixteen positions lower multiplied
//! by 38 (= 2·19; the doubling accounts for the one bit by which
//! 16 × 16 = 256 overshoots 255). The same identity shows up in the
//! carry pass as the constant 37: the wrap of the top limb contributes
//! `(c−1) + 37·(c−1)` to limb 0.
//!
//! ## Constant-time behavior
//!
//! No operation branches on, or indexes memory by, secret data.
//! Conditional swaps and the canonical reduction use arithmetic masks;
//! equality is decided on the packed canonical encodings, never on raw
//! limbs (two distinct limb vectors can denote the same field element).

use std::ops::{Add, Mul, Neg, Sub};

use crate::util::consttime_equal;

/// Field element modulo 2²⁵⁵ − 19 in radix-2¹⁶ representation.
///
/// The 16 limbs are only canonical after [`FieldElement::pack`]; all
/// other operations may return partially reduced values by design.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i64; 16]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0; 16]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// The Edwards curve constant `d = -121665/121666`.
    pub(crate) const D: Self = FieldElement([
        0x78a3, 0x1359, 0x4dca, 0x75eb, 0xd8ab, 0x4141, 0x0a4d, 0x0070, 0xe898, 0x7779, 0x4079,
        0x8cc7, 0xfe73, 0x2b6f, 0x6cee, 0x5203,
    ]);

    /// Twice the Edwards curve constant, `2d`, used by point addition.
    pub(crate) const D2: Self = FieldElement([
        0xf159, 0x26b2, 0x9b94, 0xebd6, 0xb156, 0x8283, 0x149a, 0x00e0, 0xd130, 0xeef3, 0x80f2,
        0x198e, 0xfce7, 0x56df, 0xd9dc, 0x2406,
    ]);

    /// A square root of −1, used during point decompression.
    pub(crate) const SQRT_M1: Self = FieldElement([
        0xa0b0, 0x4a0e, 0x1b27, 0xc4ee, 0xe478, 0xad2f, 0x1806, 0x2f43, 0xd7a7, 0x3dfb, 0x0099,
        0x2b4d, 0xdf0b, 0x4fc1, 0x2480, 0x2b83,
    ]);

    /// The Montgomery ladder constant `(486662 − 2) / 4 = 121665`.
    pub(crate) const M121665: Self =
        FieldElement([0xdb41, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Affine x-coordinate of the Ed25519 base point.
    pub(crate) const BASE_X: Self = FieldElement([
        0xd51a, 0x8f25, 0x2d60, 0xc956, 0xa7b2, 0x9525, 0xc760, 0x692c, 0xdc5c, 0xfdd6, 0xe231,
        0xc0a4, 0x53fe, 0xcd6e, 0x36d3, 0x2169,
    ]);

    /// Affine y-coordinate of the Ed25519 base point (4/5).
    pub(crate) const BASE_Y: Self = FieldElement([
        0x6658, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666,
        0x6666, 0x6666, 0x6666, 0x6666, 0x6666,
    ]);

    /// One carry-propagation pass.
    ///
    /// Normalizes every limb into `[0, 0xFFFF]` while pushing the
    /// excess upward, then folds the overflow of the top limb back
    /// into limb 0 through the `(c−1) + 37·(c−1)` identity. A single
    /// pass does not guarantee canonical limbs for arbitrary inputs;
    /// the multiplication runs two passes and [`FieldElement::pack`]
    /// runs three, which is exactly enough for the magnitudes each
    /// site can produce.
    fn carry(&mut self) {
        let mut c: i64 = 1;
        for limb in self.0.iter_mut() {
            let v = *limb + c + 0xffff;
            c = v >> 16;
            *limb = v - (c << 16);
        }
        self.0[0] += c - 1 + 37 * (c - 1);
    }

    /// Constant-time conditional swap.
    ///
    /// Swaps `self` and `rhs` when `bit == 1`; leaves both untouched
    /// when `bit == 0`. The selection is an XOR mask, so the executed
    /// instruction sequence is identical for both bit values.
    pub(crate) fn swap(&mut self, rhs: &mut Self, bit: i64) {
        let mask = !(bit - 1);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let t = mask & (*s ^ *r);
            *s ^= t;
            *r ^= t;
        }
    }

    /// Computes the square of this field element.
    ///
    /// Squaring is a plain self-multiplication in this representation;
    /// the dedicated name exists because repeated squaring dominates
    /// the inversion chains and keeps them legible.
    #[inline(always)]
    pub(crate) fn square(self) -> Self {
        self * self
    }

    /// Computes the multiplicative inverse via Fermat's little theorem.
    ///
    /// Raises `self` to `p − 2 = 2²⁵⁵ − 21` with a fixed
    /// square-and-multiply chain that skips the multiply at bit
    /// positions 2 and 4 — the addition-chain form of that exponent.
    /// The chain length is fixed, so the operation is constant-time.
    ///
    /// Inverting zero is mathematically undefined; this function then
    /// returns zero, matching the reference convention. Callers must
    /// not rely on inverting zero.
    pub(crate) fn invert(self) -> Self {
        let mut c = self;
        for i in (0..=253).rev() {
            c = c.square();
            if i != 2 && i != 4 {
                c = c * self;
            }
        }
        c
    }

    /// Raises this field element to `(p − 5) / 8 = 2²⁵² − 3`.
    ///
    /// This fixed chain (skip the multiply at bit position 1 only) is
    /// the square-root step of Edwards point decompression.
    pub(crate) fn pow2523(self) -> Self {
        let mut c = self;
        for i in (0..=250).rev() {
            c = c.square();
            if i != 1 {
                c = c * self;
            }
        }
        c
    }

    /// Canonical encoding into 32 little-endian bytes.
    ///
    /// Three carry passes bring every limb into `[0, 0xFFFF]`; two
    /// rounds of constant-time conditional subtraction of p then map
    /// the value into `[0, p)`. The result serializes each limb as two
    /// little-endian bytes.
    pub(crate) fn pack(&self) -> [u8; 32] {
        let mut t = *self;
        t.carry();
        t.carry();
        t.carry();

        let mut m = FieldElement::ZERO;
        for _ in 0..2 {
            m.0[0] = t.0[0] - 0xffed;
            for i in 1..15 {
                m.0[i] = t.0[i] - 0xffff - ((m.0[i - 1] >> 16) & 1);
                m.0[i - 1] &= 0xffff;
            }
            m.0[15] = t.0[15] - 0x7fff - ((m.0[14] >> 16) & 1);
            let borrow = (m.0[15] >> 16) & 1;
            m.0[14] &= 0xffff;

            // keep t when the subtraction borrowed, take t - p otherwise
            t.swap(&mut m, 1 - borrow);
        }

        let mut out = [0u8; 32];
        for i in 0..16 {
            out[2 * i] = (t.0[i] & 0xff) as u8;
            out[2 * i + 1] = (t.0[i] >> 8) as u8;
        }
        out
    }

    /// Decodes a field element from 32 little-endian bytes.
    ///
    /// Two bytes feed each limb; the topmost bit of the encoding is
    /// masked off (it carries the sign of x in packed Edwards points,
    /// not field data).
    pub(crate) fn unpack(bytes: &[u8; 32]) -> Self {
        let mut o = [0i64; 16];
        for i in 0..16 {
            o[i] = bytes[2 * i] as i64 + ((bytes[2 * i + 1] as i64) << 8);
        }
        o[15] &= 0x7fff;
        FieldElement(o)
    }

    /// Constant-time inequality test.
    ///
    /// Both elements are packed to canonical form and compared
    /// byte-wise in constant time. Raw limb comparison would be both
    /// wrong (representations are not unique) and a timing hazard.
    pub(crate) fn ct_ne(&self, rhs: &Self) -> bool {
        !consttime_equal(&self.pack(), &rhs.pack())
    }

    /// Parity of the canonical encoding (bit 0 of byte 0).
    ///
    /// This is the "sign" of a field element in the Ed25519 point
    /// compression convention.
    pub(crate) fn parity(&self) -> u8 {
        self.pack()[0] & 1
    }
}

/// Limb-wise addition without reduction.
///
/// The result may exceed the nominal limb range; callers reduce through
/// multiplication carries or [`FieldElement::pack`] before relying on
/// canonical values.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut o = self.0;
        for (l, r) in o.iter_mut().zip(rhs.0.iter()) {
            *l += r;
        }
        FieldElement(o)
    }
}

/// Limb-wise subtraction without reduction.
///
/// Limbs may go negative here; the signed limb type and the later
/// carry passes absorb the underflow.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut o = self.0;
        for (l, r) in o.iter_mut().zip(rhs.0.iter()) {
            *l -= r;
        }
        FieldElement(o)
    }
}

/// Limb-wise negation without reduction.
impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(self.0.map(|x| -x))
    }
}

/// Field multiplication.
///
/// Full 16×16 schoolbook multiplication into a 31-limb intermediate,
/// followed by the modular fold — every limb at position 16 + i
/// contributes `38×` to position i — and exactly two carry passes.
/// Two passes are required for the intermediate magnitudes this
/// product can reach; one is insufficient and a third would do no
/// further work.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.0;
        let b = rhs.0;

        let mut t = [0i64; 31];
        for i in 0..16 {
            for j in 0..16 {
                t[i + j] += a[i] * b[j];
            }
        }

        for i in 0..15 {
            t[i] += 38 * t[i + 16];
        }
        // t[15] is already below the fold boundary

        let mut o = FieldElement([0; 16]);
        o.0.copy_from_slice(&t[..16]);
        o.carry();
        o.carry();
        o
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;

    fn canonical_sample() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        bytes[31] &= 0x7f; // stay below 2^255
        bytes
    }

    #[test]
    fn pack_inverts_unpack_on_canonical_values() {
        let bytes = canonical_sample();
        assert_eq!(FieldElement::unpack(&bytes).pack(), bytes);
    }

    #[test]
    fn modulus_packs_to_zero() {
        // p = 2^255 - 19 in limb form
        let mut p = FieldElement([0xffff; 16]);
        p.0[0] = 0xffed;
        p.0[15] = 0x7fff;

        assert_eq!(p.pack(), FieldElement::ZERO.pack());
    }

    #[test]
    fn multiplication_commutes() {
        let a = FieldElement::unpack(&canonical_sample());
        let b = FieldElement::D;
        assert_eq!((a * b).pack(), (b * a).pack());
    }

    #[test]
    fn invert_gives_multiplicative_inverse() {
        let a = FieldElement::unpack(&canonical_sample());
        assert_eq!((a * a.invert()).pack(), FieldElement::ONE.pack());
    }

    #[test]
    fn sqrt_m1_squares_to_minus_one() {
        let minus_one = FieldElement::ZERO - FieldElement::ONE;
        assert_eq!(
            FieldElement::SQRT_M1.square().pack(),
            minus_one.pack()
        );
    }

    #[test]
    fn swap_is_conditional() {
        let mut a = FieldElement::ONE;
        let mut b = FieldElement::D;

        a.swap(&mut b, 0);
        assert_eq!(a.pack(), FieldElement::ONE.pack());

        a.swap(&mut b, 1);
        assert_eq!(a.pack(), FieldElement::D.pack());
        assert_eq!(b.pack(), FieldElement::ONE.pack());
    }
}
