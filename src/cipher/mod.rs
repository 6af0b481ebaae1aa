//! Symmetric cipher capabilities, modes, and padding.
//!
//! The [`BlockCipher`] and [`StreamCipher`] traits are the seams the
//! rest of the crate plugs concrete algorithms into — most notably the
//! Fortuna generator, which is generic over any [`BlockCipher`]. The
//! supplied implementations wrap audited RustCrypto cores.
//!
//! Chaining modes (`Ecb`, `Cbc`, `Ctr`) and padding schemes (`Pkcs7`,
//! `ZeroPadding`) are thin compositions over the block capability.

mod aes;
mod chacha;
pub mod mode;
pub mod padding;

pub use aes::Aes256;
pub use chacha::ChaCha20;

use crate::error::CryptoError;

/// A block cipher operating on exactly one block per call.
///
/// Implementations are stateless: the key schedule is derived inside
/// each call, which keeps the interface free of key-handling state and
/// matches how the Fortuna generator re-keys between extractions.
pub trait BlockCipher {
    /// Block length in bytes.
    const BLOCK_SIZE: usize;

    /// Key length in bytes.
    const KEY_SIZE: usize;

    /// Encrypts one block under `key`.
    ///
    /// Fails with [`CryptoError::InvalidLength`] unless `key` is
    /// exactly [`Self::KEY_SIZE`] and `block` exactly
    /// [`Self::BLOCK_SIZE`] bytes.
    fn encrypt_block(key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Decrypts one block under `key`. Same length contract as
    /// [`Self::encrypt_block`].
    fn decrypt_block(key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// A stream cipher combining a keystream with data of any length.
pub trait StreamCipher {
    /// Key length in bytes.
    const KEY_SIZE: usize;

    /// Nonce length in bytes.
    const NONCE_SIZE: usize;

    /// Encrypts `data` under `key` and `nonce`.
    fn encrypt(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Decrypts `data` under `key` and `nonce`. For XOR-keystream
    /// ciphers this is the same operation as encryption.
    fn decrypt(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::encrypt(key, nonce, data)
    }
}
