//! Extended-coordinate arithmetic on the twisted Edwards curve.
//!
//! Ed25519 works on the twisted Edwards curve
//!
//! ```text
//! -x² + y² = 1 + d·x²·y²,  d = -121665/121666
//! ```
//!
//! Points are held in extended coordinates `(X : Y : Z : T)` with
//! affine coordinates `(X/Z, Y/Z)` and the auxiliary product
//! `T/Z = (X/Z)·(Y/Z)`. The extra coordinate lets point addition run
//! without a single field inversion; the one inversion per operation
//! happens only when a point is packed to its 32-byte form.
//!
//! The addition law used here is complete for this curve: it is valid
//! for equal inputs (doubling), for the identity `(0 : 1 : 1 : 0)`,
//! and for every other combination, which is what allows the uniform
//! cswap/add/add/cswap ladder in [`ExtendedPoint::scalarmult`].

use super::field::FieldElement;
use crate::error::CryptoError;

/// A curve point in extended coordinates.
#[derive(Clone, Copy)]
pub(crate) struct ExtendedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl ExtendedPoint {
    /// The neutral element of the group.
    pub(crate) const IDENTITY: Self = ExtendedPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The Ed25519 base point in extended coordinates.
    pub(crate) fn base() -> Self {
        ExtendedPoint {
            x: FieldElement::BASE_X,
            y: FieldElement::BASE_Y,
            z: FieldElement::ONE,
            t: FieldElement::BASE_X * FieldElement::BASE_Y,
        }
    }

    /// Complete point addition in extended coordinates.
    ///
    /// Safe for `self == rhs` (doubling) and for the identity; no
    /// inversion, eight multiplications.
    pub(crate) fn add(&self, rhs: &ExtendedPoint) -> ExtendedPoint {
        let a = (self.y - self.x) * (rhs.y - rhs.x);
        let b = (self.x + self.y) * (rhs.x + rhs.y);
        let c = (self.t * rhs.t) * FieldElement::D2;
        let d = self.z * rhs.z;
        let d = d + d;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        ExtendedPoint {
            x: e * f,
            y: h * g,
            z: g * f,
            t: e * h,
        }
    }

    /// Constant-time conditional swap of two points.
    pub(crate) fn cswap(&mut self, rhs: &mut ExtendedPoint, bit: i64) {
        self.x.swap(&mut rhs.x, bit);
        self.y.swap(&mut rhs.y, bit);
        self.z.swap(&mut rhs.z, bit);
        self.t.swap(&mut rhs.t, bit);
    }

    /// Packs this point into its 32-byte compressed form.
    ///
    /// Scales to affine with one inversion, packs the y-coordinate and
    /// folds the parity of x into the top bit of the last byte.
    pub(crate) fn pack(&self) -> [u8; 32] {
        let zi = self.z.invert();
        let tx = self.x * zi;
        let ty = self.y * zi;

        let mut out = ty.pack();
        out[31] ^= tx.parity() << 7;
        out
    }

    /// Recovers the *negated* point from a 32-byte compressed form.
    ///
    /// The x-coordinate is recomputed from the curve equation:
    ///
    /// ```text
    /// x² = (y² − 1) / (d·y² + 1)
    /// ```
    ///
    /// via the `(p−5)/8` exponentiation. If the first candidate root
    /// fails the curve-equation check it is multiplied by √−1; if the
    /// second candidate fails as well the encoding does not name a
    /// curve point and [`CryptoError::DecompressionFailure`] is
    /// returned. Finally the sign of the recovered x is compared with
    /// the encoded sign bit and the point negated on agreement —
    /// verification consumes `-A` directly, which saves the caller an
    /// explicit negation.
    pub(crate) fn unpack_negated(packed: &[u8; 32]) -> Result<ExtendedPoint, CryptoError> {
        let z = FieldElement::ONE;
        let y = FieldElement::unpack(packed);

        let y2 = y.square();
        let mut den = y2 * FieldElement::D;
        let num = y2 - z;
        den = den + z;

        // candidate x = num^3 * den * (num^7 * den^7)^((p-5)/8) ... computed
        // through the den^6 shortcut of the reference
        let den2 = den.square();
        let den4 = den2.square();
        let den6 = den4 * den2;
        let mut t = den6 * num;
        t = t * den;

        t = t.pow2523();
        t = t * num;
        t = t * den;
        t = t * den;
        let mut x = t * den;

        let mut chk = x.square() * den;
        if chk.ct_ne(&num) {
            x = x * FieldElement::SQRT_M1;
        }

        chk = x.square() * den;
        if chk.ct_ne(&num) {
            return Err(CryptoError::DecompressionFailure);
        }

        if x.parity() == (packed[31] >> 7) {
            x = FieldElement::ZERO - x;
        }

        let t = x * y;
        Ok(ExtendedPoint { x, y, z, t })
    }

    /// Scalar multiplication `s · q` by the uniform double-and-add
    /// ladder.
    ///
    /// Walks bits 255 down to 0 of the scalar, performing the same
    /// cswap/add/add/cswap sequence for every bit, so the executed
    /// branch pattern is independent of the scalar.
    pub(crate) fn scalarmult(q: &ExtendedPoint, s: &[u8; 32]) -> ExtendedPoint {
        let mut p = ExtendedPoint::IDENTITY;
        let mut q = *q;

        for i in (0..=255u16).rev() {
            let bit = ((s[(i >> 3) as usize] >> (i & 7)) & 1) as i64;
            p.cswap(&mut q, bit);
            q = q.add(&p);
            p = p.add(&p);
            p.cswap(&mut q, bit);
        }

        p
    }

    /// Scalar multiplication of the fixed base point.
    pub(crate) fn scalarbase(s: &[u8; 32]) -> ExtendedPoint {
        Self::scalarmult(&Self::base(), s)
    }
}

#[cfg(test)]
mod tests {
    use super::ExtendedPoint;

    fn sample_point() -> ExtendedPoint {
        let mut s = [0u8; 32];
        s[0] = 5;
        ExtendedPoint::scalarbase(&s)
    }

    #[test]
    fn unpack_negated_inverts_pack() {
        let p = sample_point();
        let packed = p.pack();

        let neg = ExtendedPoint::unpack_negated(&packed).unwrap();
        let repacked = neg.pack();

        // negation preserves y and flips only the sign of x
        assert_eq!(repacked[..31], packed[..31]);
        assert_eq!(repacked[31], packed[31] ^ 0x80);
    }

    #[test]
    fn point_plus_its_negation_is_the_identity() {
        let p = sample_point();
        let neg = ExtendedPoint::unpack_negated(&p.pack()).unwrap();

        let sum = p.add(&neg);
        assert_eq!(sum.pack(), ExtendedPoint::IDENTITY.pack());
    }

    #[test]
    fn off_curve_encodings_are_rejected() {
        // roughly half of all y values have no matching x on the curve
        let mut rejected = 0;
        for v in 2u8..32 {
            let mut packed = [0u8; 32];
            packed[0] = v;
            if ExtendedPoint::unpack_negated(&packed).is_err() {
                rejected += 1;
            }
        }
        assert!(rejected > 0, "a range of small y values cannot all lie on the curve");
    }

    #[test]
    fn identity_packs_to_y_equals_one() {
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(ExtendedPoint::IDENTITY.pack(), expected);
    }

    #[test]
    fn addition_is_consistent_with_the_ladder() {
        // 2·B + 3·B must equal 5·B
        let scalars: Vec<ExtendedPoint> = [2u8, 3, 5]
            .iter()
            .map(|&v| {
                let mut s = [0u8; 32];
                s[0] = v;
                ExtendedPoint::scalarbase(&s)
            })
            .collect();

        let sum = scalars[0].add(&scalars[1]);
        assert_eq!(sum.pack(), scalars[2].pack());
    }
}
