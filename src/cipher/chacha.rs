//! ChaCha20 stream cipher adapter (RFC 7539 variant, 96-bit nonce).

use chacha20::cipher::{KeyIvInit, StreamCipher as _};

use super::StreamCipher;
use crate::error::CryptoError;

/// ChaCha20 with a 256-bit key and 96-bit nonce.
pub struct ChaCha20;

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = 32;
    const NONCE_SIZE: usize = 12;

    fn encrypt(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if key.len() != Self::KEY_SIZE {
            return Err(CryptoError::bad_len(Self::KEY_SIZE, key.len()));
        }
        if nonce.len() != Self::NONCE_SIZE {
            return Err(CryptoError::bad_len(Self::NONCE_SIZE, nonce.len()));
        }

        let mut cipher = chacha20::ChaCha20::new_from_slices(key, nonce)
            .map_err(|_| CryptoError::bad_len(Self::KEY_SIZE, key.len()))?;

        let mut buf = data.to_vec();
        cipher.apply_keystream(&mut buf);
        Ok(buf)
    }
}
