//! Curve25519 arithmetic.
//!
//! This module contains the numeric foundation shared by the X25519
//! key exchange and the Ed25519 signature scheme:
//!
//! - `field`
//!   Arithmetic in 𝔽ₚ with p = 2²⁵⁵ − 19, in the 16-limb radix-2¹⁶
//!   representation with lazy reduction.
//!
//! - `montgomery`
//!   Constant-time X25519 scalar multiplication and key generation
//!   over the Montgomery form of the curve.
//!
//! - `edwards`
//!   Extended-coordinate point arithmetic on the birationally
//!   equivalent twisted Edwards curve, used by Ed25519.
//!
//! - `scalar`
//!   Reduction modulo the group order L and the scalar linear
//!   combination used when signing.
//!
//! All temporaries are allocated per call; there is no shared scratch
//! state, so independent operations are safe to run concurrently from
//! different threads.

pub(crate) mod edwards;
mod field;
pub mod montgomery;
pub(crate) mod scalar;

pub use montgomery::{BASEPOINT, generate_keys, scalar_mult};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte secret/public key pair.
///
/// Produced by [`montgomery::generate_keys`] and
/// [`crate::ed25519::generate_keys`]. The secret half is wiped from
/// memory when the pair is dropped; the crate retains no copy of it
/// beyond the generating call.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    /// Secret key. For X25519 this is the clamped seed; for Ed25519 it
    /// is the raw seed itself (the expansion happens inside `sign`).
    pub secret: [u8; 32],
    /// Packed public key.
    #[zeroize(skip)]
    pub public: [u8; 32],
}

/// Clamps a 32-byte scalar for Curve25519 use.
///
/// Clears bits 0–2 (the scalar becomes a multiple of 8, which kills
/// the small-subgroup component of any peer point), clears bit 255 and
/// sets bit 254 (fixing the bit length the ladder iterates over).
pub(crate) fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 0xf8;
    scalar[31] &= 0x7f;
    scalar[31] |= 0x40;
}
