//! Keccak / SHA-3 / SHAKE adapters.
//!
//! `Keccak256`/`Keccak512` use the original Keccak padding, `Sha3_256`
//! and `Sha3_512` the FIPS 202 padding. The block sizes exposed to
//! HMAC are the sponge rates.

use sha3::Digest;
use sha3::digest::{ExtendableOutput, Update, XofReader};

use super::Hash;

macro_rules! keccak_adapter {
    ($name:ident, $inner:ty, $out:expr, $rate:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Default, Clone)]
        pub struct $name($inner);

        impl Hash for $name {
            const OUTPUT_SIZE: usize = $out;
            const BLOCK_SIZE: usize = $rate;

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.0, data);
            }

            fn finalize(&mut self) -> Vec<u8> {
                self.0.finalize_reset().to_vec()
            }

            fn reset(&mut self) {
                Digest::reset(&mut self.0);
            }
        }
    };
}

keccak_adapter!(Sha3_256, sha3::Sha3_256, 32, 136, "SHA3-256 (FIPS 202).");
keccak_adapter!(Sha3_512, sha3::Sha3_512, 64, 72, "SHA3-512 (FIPS 202).");
keccak_adapter!(Keccak256, sha3::Keccak256, 32, 136, "Keccak-256 (pre-FIPS padding).");
keccak_adapter!(Keccak512, sha3::Keccak512, 64, 72, "Keccak-512 (pre-FIPS padding).");

/// SHAKE128 extendable-output function, one-shot.
pub fn shake128(data: &[u8], output_len: usize) -> Vec<u8> {
    let mut xof = sha3::Shake128::default();
    xof.update(data);

    let mut out = vec![0u8; output_len];
    xof.finalize_xof().read(&mut out);
    out
}

/// SHAKE256 extendable-output function, one-shot.
pub fn shake256(data: &[u8], output_len: usize) -> Vec<u8> {
    let mut xof = sha3::Shake256::default();
    xof.update(data);

    let mut out = vec![0u8; output_len];
    xof.finalize_xof().read(&mut out);
    out
}
