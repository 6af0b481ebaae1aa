//! Password-based key derivation.

use crate::hash::Hash;
use crate::mac::{Hmac, KeyedHash};
use crate::util::xor;

/// PBKDF2 (RFC 2898) over HMAC of the given hash.
///
/// Derives `dk_len` bytes from `password` and `salt` with the given
/// iteration count. Each output block `T_i` is the XOR of the chained
/// values `U_1 = HMAC(password, salt ‖ i)`, `U_c = HMAC(password,
/// U_{c-1})`, with the block index encoded big-endian starting at 1.
///
/// `iterations` must be at least 1; choose it to make the derivation
/// deliberately slow for the deployment's hardware.
pub fn pbkdf2<H: Hash>(password: &[u8], salt: &[u8], iterations: u32, dk_len: usize) -> Vec<u8> {
    assert!(iterations > 0, "pbkdf2 requires at least one iteration");

    let mut out = Vec::with_capacity(dk_len);
    let mut block_index: u32 = 1;

    while out.len() < dk_len {
        let mut mac = Hmac::<H>::init(password);
        mac.update(salt);
        mac.update(&block_index.to_be_bytes());

        let mut u = mac.finalize();
        let mut t = u.clone();

        for _ in 1..iterations {
            u = Hmac::<H>::mac(password, &u);
            t = xor(&t, &u);
        }

        out.extend_from_slice(&t);
        block_index += 1;
    }

    out.truncate(dk_len);
    out
}
