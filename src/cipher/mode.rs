//! Block-cipher chaining modes.
//!
//! Mode logic only: ECB and CBC require input already aligned to the
//! block size (pair them with [`crate::cipher::padding`]), CTR turns
//! the block cipher into a keystream and accepts any length.

use std::marker::PhantomData;

use super::BlockCipher;
use crate::error::CryptoError;
use crate::util::xor;

fn check_aligned<B: BlockCipher>(data: &[u8]) -> Result<(), CryptoError> {
    if data.len() % B::BLOCK_SIZE != 0 {
        return Err(CryptoError::bad_len(
            data.len().next_multiple_of(B::BLOCK_SIZE),
            data.len(),
        ));
    }
    Ok(())
}

fn check_iv<B: BlockCipher>(iv: &[u8]) -> Result<(), CryptoError> {
    if iv.len() != B::BLOCK_SIZE {
        return Err(CryptoError::bad_len(B::BLOCK_SIZE, iv.len()));
    }
    Ok(())
}

/// Electronic codebook mode.
///
/// Each block is enciphered independently; identical plaintext blocks
/// give identical ciphertext blocks. Only suitable where that leakage
/// is acceptable (e.g. fixed-format single blocks).
pub struct Ecb<B: BlockCipher>(PhantomData<B>);

impl<B: BlockCipher> Ecb<B> {
    /// Encrypts block-aligned `data` under `key`.
    pub fn encrypt(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_aligned::<B>(data)?;

        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks_exact(B::BLOCK_SIZE) {
            out.extend_from_slice(&B::encrypt_block(key, block)?);
        }
        Ok(out)
    }

    /// Decrypts block-aligned `data` under `key`.
    pub fn decrypt(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_aligned::<B>(data)?;

        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks_exact(B::BLOCK_SIZE) {
            out.extend_from_slice(&B::decrypt_block(key, block)?);
        }
        Ok(out)
    }
}

/// Cipher block chaining mode.
pub struct Cbc<B: BlockCipher>(PhantomData<B>);

impl<B: BlockCipher> Cbc<B> {
    /// Encrypts block-aligned `data` under `key` with a block-size IV.
    pub fn encrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_iv::<B>(iv)?;
        check_aligned::<B>(data)?;

        let mut out = Vec::with_capacity(data.len());
        let mut chain = iv.to_vec();
        for block in data.chunks_exact(B::BLOCK_SIZE) {
            chain = B::encrypt_block(key, &xor(&chain, block))?;
            out.extend_from_slice(&chain);
        }
        Ok(out)
    }

    /// Decrypts block-aligned `data` under `key` with a block-size IV.
    pub fn decrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_iv::<B>(iv)?;
        check_aligned::<B>(data)?;

        let mut out = Vec::with_capacity(data.len());
        let mut chain = iv;
        for block in data.chunks_exact(B::BLOCK_SIZE) {
            out.extend_from_slice(&xor(&B::decrypt_block(key, block)?, chain));
            chain = block;
        }
        Ok(out)
    }
}

/// Counter mode.
///
/// Encrypts successive counter values and XORs the result into the
/// data, so encryption and decryption are the same operation and any
/// input length is accepted. The counter increments big-endian from
/// the caller-supplied initial value.
pub struct Ctr<B: BlockCipher>(PhantomData<B>);

impl<B: BlockCipher> Ctr<B> {
    /// Applies the CTR keystream for `key`/`counter` to `data`.
    pub fn process(key: &[u8], counter: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_iv::<B>(counter)?;

        let mut ctr = counter.to_vec();
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(B::BLOCK_SIZE) {
            let keystream = B::encrypt_block(key, &ctr)?;
            out.extend_from_slice(&xor(chunk, &keystream[..chunk.len()]));

            for byte in ctr.iter_mut().rev() {
                *byte = byte.wrapping_add(1);
                if *byte != 0 {
                    break;
                }
            }
        }
        Ok(out)
    }

    /// Alias of [`Ctr::process`].
    pub fn encrypt(key: &[u8], counter: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::process(key, counter, data)
    }

    /// Alias of [`Ctr::process`].
    pub fn decrypt(key: &[u8], counter: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::process(key, counter, data)
    }
}
