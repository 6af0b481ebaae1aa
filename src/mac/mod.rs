//! Message authentication codes.
//!
//! [`Hmac`] implements RFC 2104 generically over any [`Hash`]
//! capability, using the hash's declared block size for key padding.
//! The [`KeyedHash`] trait mirrors the incremental hash interface with
//! a key-bearing constructor, so keyed and unkeyed hashing compose the
//! same way (PBKDF2 is written against this trait).

use crate::hash::Hash;

/// An incremental keyed hash (MAC).
pub trait KeyedHash {
    /// Tag length in bytes.
    const OUTPUT_SIZE: usize;

    /// Creates a MAC instance keyed with `key`.
    fn init(key: &[u8]) -> Self;

    /// Absorbs `data` into the running state.
    fn update(&mut self, data: &[u8]);

    /// Returns the tag over all absorbed data and resets the state for
    /// a new message under the same key.
    fn finalize(&mut self) -> Vec<u8>;

    /// One-shot convenience: tag of `msg` under `key`.
    fn mac(key: &[u8], msg: &[u8]) -> Vec<u8>
    where
        Self: Sized,
    {
        let mut mac = Self::init(key);
        mac.update(msg);
        mac.finalize()
    }
}

/// HMAC over any [`Hash`] implementation (RFC 2104).
pub struct Hmac<H: Hash> {
    inner: H,
    ipad_key: Vec<u8>,
    opad_key: Vec<u8>,
}

impl<H: Hash> Hmac<H> {
    fn derive_pads(key: &[u8]) -> (Vec<u8>, Vec<u8>) {
        // keys longer than one block are hashed down first
        let mut block_key = if key.len() > H::BLOCK_SIZE {
            H::hash(key)
        } else {
            key.to_vec()
        };
        block_key.resize(H::BLOCK_SIZE, 0);

        let ipad_key = block_key.iter().map(|b| b ^ 0x36).collect();
        let opad_key = block_key.iter().map(|b| b ^ 0x5c).collect();
        (ipad_key, opad_key)
    }
}

impl<H: Hash> KeyedHash for Hmac<H> {
    const OUTPUT_SIZE: usize = H::OUTPUT_SIZE;

    fn init(key: &[u8]) -> Self {
        let (ipad_key, opad_key) = Self::derive_pads(key);

        let mut inner = H::default();
        inner.update(&ipad_key);

        Hmac {
            inner,
            ipad_key,
            opad_key,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let inner_sum = self.inner.finalize();

        self.inner.update(&self.opad_key);
        self.inner.update(&inner_sum);
        let tag = self.inner.finalize();

        // re-prime for the next message under the same key
        self.inner.update(&self.ipad_key);
        tag
    }
}
