//! AES-256 block cipher adapter.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use super::BlockCipher;
use crate::error::CryptoError;

/// AES with a 256-bit key, one 16-byte block per call.
pub struct Aes256;

impl Aes256 {
    fn cipher(key: &[u8]) -> Result<aes::Aes256, CryptoError> {
        aes::Aes256::new_from_slice(key).map_err(|_| CryptoError::bad_len(32, key.len()))
    }

    fn check_block(block: &[u8]) -> Result<(), CryptoError> {
        if block.len() != Self::BLOCK_SIZE {
            return Err(CryptoError::bad_len(Self::BLOCK_SIZE, block.len()));
        }
        Ok(())
    }
}

impl BlockCipher for Aes256 {
    const BLOCK_SIZE: usize = 16;
    const KEY_SIZE: usize = 32;

    fn encrypt_block(key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::check_block(block)?;
        let cipher = Self::cipher(key)?;

        let mut buf = GenericArray::clone_from_slice(block);
        cipher.encrypt_block(&mut buf);
        Ok(buf.to_vec())
    }

    fn decrypt_block(key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::check_block(block)?;
        let cipher = Self::cipher(key)?;

        let mut buf = GenericArray::clone_from_slice(block);
        cipher.decrypt_block(&mut buf);
        Ok(buf.to_vec())
    }
}
