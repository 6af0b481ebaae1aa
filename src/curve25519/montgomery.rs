//! X25519 key exchange over the Montgomery form of Curve25519.
//!
//! Computes Diffie–Hellman shared secrets by constant-time scalar
//! multiplication of Montgomery u-coordinates, as specified in
//! RFC 7748.
//!
//! ## Algorithm
//!
//! The Montgomery ladder maintains two projective point pairs
//! `(x2 : z2)` and `(x3 : z3)` whose difference is the input point.
//! For each scalar bit from 254 down to 0 it conditionally swaps the
//! pairs (keyed on the bit, via an XOR mask) and performs one combined
//! differential addition and doubling step. Every iteration executes
//! the identical instruction sequence, so the scalar never influences
//! the branch pattern or memory access pattern.
//!
//! The affine result is recovered at the end with a single field
//! inversion: `u = x2 / z2`.
//!
//! ## Clamping
//!
//! [`generate_keys`] clamps the 32-byte seed before use: the low three
//! bits are cleared (forcing a multiple of 8, which neutralizes the
//! small 8-torsion subgroup), bit 255 is cleared and bit 254 set
//! (pinning the scalar length the ladder assumes). [`scalar_mult`]
//! itself applies **no** clamping — callers exchange clamped secrets,
//! and the raw-scalar behavior is what the published test vectors
//! (e.g. `3 × basepoint`) exercise.

use super::field::FieldElement;
use super::{KeyPair, clamp};
use crate::error::CryptoError;

/// The canonical Curve25519 base point: u = 9.
pub const BASEPOINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0,
];

/// Multiplies the curve point `public` by the scalar `secret`.
///
/// Both inputs must be exactly 32 bytes; anything else is rejected
/// with [`CryptoError::InvalidLength`]. The scalar is used as given —
/// see the module notes on clamping.
///
/// Returns the packed u-coordinate of the product. Per RFC 7748 the
/// result may be all zeros for low-order peer points; it is returned
/// as-is.
pub fn scalar_mult(secret: &[u8], public: &[u8]) -> Result<[u8; 32], CryptoError> {
    let secret: &[u8; 32] = secret
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, secret.len()))?;
    let public: &[u8; 32] = public
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, public.len()))?;

    let x = FieldElement::unpack(public);

    let mut a = FieldElement::ONE;
    let mut b = x;
    let mut c = FieldElement::ZERO;
    let mut d = FieldElement::ONE;

    for i in (0..=254u16).rev() {
        let bit = ((secret[(i >> 3) as usize] >> (i & 7)) & 1) as i64;

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);

        let mut e = a + c;
        a = a - c;
        c = b + d;
        b = b - d;
        d = e.square();
        let f = a.square();
        a = c * a;
        c = b * e;
        e = a + c;
        a = a - c;
        b = a.square();
        c = d - f;
        a = c * FieldElement::M121665;
        a = a + d;
        c = c * a;
        a = d * f;
        d = b * x;
        b = e.square();

        a.swap(&mut b, bit);
        c.swap(&mut d, bit);
    }

    Ok((a * c.invert()).pack())
}

/// Derives an X25519 key pair from a 32-byte seed.
///
/// The seed is clamped and becomes the secret key; the public key is
/// the clamped scalar times the base point. Seeds of any other length
/// are rejected with [`CryptoError::InvalidLength`].
///
/// The returned secret is wiped when the [`KeyPair`] is dropped.
pub fn generate_keys(seed: &[u8]) -> Result<KeyPair, CryptoError> {
    let mut secret: [u8; 32] = seed
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, seed.len()))?;

    clamp(&mut secret);
    let public = scalar_mult(&secret, &BASEPOINT)?;

    Ok(KeyPair { secret, public })
}
