//! Ed25519 digital signatures.
//!
//! Key generation, deterministic signing and verification as specified
//! in RFC 8032, built on the extended Edwards-point arithmetic and the
//! SHA-512 hash capability.
//!
//! ## Key convention
//!
//! The secret key handed out by [`generate_keys`] is the raw 32-byte
//! seed, not the seed concatenated with the public key that some other
//! implementations use. `sign` re-derives the expanded scalar and
//! nonce prefix from the seed on every call, so the seed alone is
//! sufficient to sign.
//!
//! ## Failure semantics
//!
//! Wrong-size keys or signatures are contract violations and surface
//! as [`CryptoError::InvalidLength`]. A signature that simply does not
//! check out — including one whose R component does not decompress to
//! a curve point — is a *normal* outcome: [`verify`] reports it as
//! `Ok(false)`, never as an error.

use crate::curve25519::edwards::ExtendedPoint;
use crate::curve25519::{KeyPair, clamp, scalar};
use crate::error::CryptoError;
use crate::hash::{Hash, Sha512};
use crate::util::consttime_equal;

/// Derives an Ed25519 key pair from a 32-byte seed.
///
/// The seed is hashed with SHA-512; the low 32 bytes, clamped, form
/// the signing scalar whose base-point multiple becomes the public
/// key. The seed itself is returned as the secret key.
pub fn generate_keys(seed: &[u8]) -> Result<KeyPair, CryptoError> {
    let secret: [u8; 32] = seed
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, seed.len()))?;

    let digest = Sha512::hash(&secret);
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&digest[..32]);
    clamp(&mut scalar);

    let public = ExtendedPoint::scalarbase(&scalar).pack();
    Ok(KeyPair { secret, public })
}

/// Signs `msg` with the given secret/public key pair.
///
/// Deterministic per RFC 8032:
///
/// ```text
/// (scalar, prefix) = SHA512(sk)
/// r = SHA512(prefix ‖ msg)        mod L
/// R = r·B
/// k = SHA512(R ‖ pk ‖ msg)        mod L
/// S = r + k·scalar                mod L
/// ```
///
/// Returns the 64-byte signature `R ‖ S`.
pub fn sign(msg: &[u8], secret: &[u8], public: &[u8]) -> Result<[u8; 64], CryptoError> {
    let secret: &[u8; 32] = secret
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, secret.len()))?;
    let public: &[u8; 32] = public
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, public.len()))?;

    let expanded = Sha512::hash(secret);
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&expanded[..32]);
    clamp(&mut scalar);

    let mut hasher = Sha512::default();
    hasher.update(&expanded[32..]);
    hasher.update(msg);
    let r = scalar::reduce(&digest64(hasher.finalize()));

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&ExtendedPoint::scalarbase(&r).pack());

    hasher.update(&signature[..32]);
    hasher.update(public);
    hasher.update(msg);
    let k = scalar::reduce(&digest64(hasher.finalize()));

    signature[32..].copy_from_slice(&scalar::mul_add(&k, &scalar, &r));
    Ok(signature)
}

/// Verifies a 64-byte signature over `msg` for the given public key.
///
/// Decompresses the public key into its negated point, recomputes the
/// challenge scalar, and checks that `k·(−A) + S·B` packs to the R
/// half of the signature. The final comparison is constant-time.
pub fn verify(msg: &[u8], public: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
    let public: &[u8; 32] = public
        .try_into()
        .map_err(|_| CryptoError::bad_len(32, public.len()))?;
    let signature: &[u8; 64] = signature
        .try_into()
        .map_err(|_| CryptoError::bad_len(64, signature.len()))?;

    let neg_a = match ExtendedPoint::unpack_negated(public) {
        Ok(point) => point,
        Err(_) => return Ok(false),
    };

    let mut hasher = Sha512::default();
    hasher.update(&signature[..32]);
    hasher.update(public);
    hasher.update(msg);
    let k = scalar::reduce(&digest64(hasher.finalize()));

    let mut s = [0u8; 32];
    s.copy_from_slice(&signature[32..]);

    let check = ExtendedPoint::scalarmult(&neg_a, &k)
        .add(&ExtendedPoint::scalarbase(&s))
        .pack();

    Ok(consttime_equal(&check, &signature[..32]))
}

/// Narrows a SHA-512 digest to its fixed 64-byte form.
fn digest64(digest: Vec<u8>) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}
