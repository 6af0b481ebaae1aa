//! Block padding schemes.
//!
//! `pad` always returns a complete padded buffer — including when the
//! input is already aligned (an aligned input gets a full extra block
//! under PKCS#7 and a plain copy under zero padding). `unpad` validates
//! before stripping and reports malformed padding as
//! [`CryptoError::InvalidPadding`].

use crate::error::CryptoError;

/// PKCS#7 padding (RFC 5652): `n` bytes of value `n`.
pub struct Pkcs7;

impl Pkcs7 {
    /// Pads `data` up to the next multiple of `block_size`.
    ///
    /// Aligned input receives a full block of padding so that `unpad`
    /// is always unambiguous. `block_size` must be in `1..=255`.
    pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
        if block_size == 0 || block_size > 255 {
            return Err(CryptoError::bad_len(255, block_size));
        }

        let fill = block_size - data.len() % block_size;
        let mut out = data.to_vec();
        out.resize(data.len() + fill, fill as u8);
        Ok(out)
    }

    /// Validates and strips PKCS#7 padding.
    pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
        if data.is_empty() || data.len() % block_size != 0 {
            return Err(CryptoError::InvalidPadding);
        }

        let fill = *data.last().expect("data checked non-empty") as usize;
        if fill == 0 || fill > block_size {
            return Err(CryptoError::InvalidPadding);
        }
        if data[data.len() - fill..].iter().any(|&b| b as usize != fill) {
            return Err(CryptoError::InvalidPadding);
        }

        Ok(data[..data.len() - fill].to_vec())
    }
}

/// PKCS#5 padding: PKCS#7 fixed to 8-byte blocks.
pub mod pkcs5 {
    use super::Pkcs7;
    use crate::error::CryptoError;

    /// Pads `data` up to the next multiple of 8.
    pub fn pad(data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Pkcs7::pad(data, 8)
    }

    /// Validates and strips the padding.
    pub fn unpad(data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Pkcs7::unpad(data, 8)
    }
}

/// Zero padding: fill with `0x00` up to the block boundary.
///
/// Not self-describing — `unpad` strips *all* trailing zero bytes, so
/// it only suits payloads that cannot end in `0x00`.
pub struct ZeroPadding;

impl ZeroPadding {
    /// Pads `data` up to the next multiple of `block_size`.
    ///
    /// An already-aligned input is returned as an unmodified copy.
    pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
        if block_size == 0 {
            return Err(CryptoError::bad_len(1, 0));
        }

        let mut out = data.to_vec();
        out.resize(data.len().next_multiple_of(block_size), 0);
        Ok(out)
    }

    /// Strips trailing zero bytes.
    pub fn unpad(data: &[u8]) -> Vec<u8> {
        let end = data
            .iter()
            .rposition(|&b| b != 0)
            .map(|p| p + 1)
            .unwrap_or(0);
        data[..end].to_vec()
    }
}
