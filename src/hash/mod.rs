//! Hash algorithms exposed by the crate.
//!
//! The [`Hash`] trait is the capability surface the rest of the crate
//! programs against: Ed25519 pre-hashes with SHA-512, the Fortuna
//! accumulator mixes pools with SHA-256, HMAC and PBKDF2 are generic
//! over any implementation. The concrete transforms come from audited
//! RustCrypto implementations wrapped into this interface.

mod keccak;
mod sha;

pub use keccak::{Keccak256, Keccak512, Sha3_256, Sha3_512, shake128, shake256};
pub use sha::{Sha256, Sha512};

/// An incremental cryptographic hash function.
///
/// Implementations are cheap to construct and reusable: `finalize`
/// returns the digest of everything fed so far **and resets** the
/// state, so the same value can immediately absorb the next message.
pub trait Hash: Default {
    /// Digest length in bytes.
    const OUTPUT_SIZE: usize;

    /// Internal block (or sponge rate) length in bytes, as consumed by
    /// HMAC's key padding.
    const BLOCK_SIZE: usize;

    /// Absorbs `data` into the running state.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of all absorbed data and resets the state
    /// for reuse.
    fn finalize(&mut self) -> Vec<u8>;

    /// Discards all absorbed data.
    fn reset(&mut self);

    /// One-shot convenience: digest of `data` over a fresh state.
    fn hash(data: &[u8]) -> Vec<u8>
    where
        Self: Sized,
    {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}
