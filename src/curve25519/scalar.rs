//! Arithmetic modulo the Ed25519 group order.
//!
//! Scalars in Ed25519 are integers modulo
//!
//! ```text
//! L = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! the prime order of the base-point subgroup. Signing needs two
//! operations here: reducing a 64-byte SHA-512 digest to a scalar, and
//! the linear combination `(r + k·a) mod L` that forms the S half of a
//! signature.
//!
//! Both run over a 64-limb signed accumulator (one byte of value per
//! limb, with headroom for schoolbook products) and reduce through
//! [`mod_l`], a reduction specialized to L's shape: the top 32 limbs
//! are eliminated one by one against `16·L`, then one direct pass
//! clears the residue above 2²⁵², and a final conditional subtraction
//! resolves the remaining borrow.
//!
//! The carries in the sliding-window pass are **signed** arithmetic
//! shifts: intermediate limbs legitimately go negative, and an
//! unsigned shift would destroy the borrow information. This
//! sign-sensitivity is load-bearing; every published test vector fails
//! without it.

/// The group order L as 32 little-endian bytes (widened for limb
/// arithmetic).
const L: [i64; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x10,
];

/// Reduces the 64-limb accumulator `x` modulo L into `r`.
///
/// `x` is consumed as scratch space and left zeroed/garbage; `r`
/// receives the canonical 32-byte little-endian scalar.
pub(crate) fn mod_l(r: &mut [u8; 32], x: &mut [i64; 64]) {
    // eliminate limbs 63..32 against 16·L, top down
    for i in (32..=63).rev() {
        let mut carry: i64 = 0;
        let mut j = i - 32;
        while j < i - 12 {
            x[j] += carry - 16 * x[i] * L[j - (i - 32)];
            carry = (x[j] + 128) >> 8; // signed shift: limbs can be negative
            x[j] -= carry << 8;
            j += 1;
        }
        x[j] += carry;
        x[i] = 0;
    }

    // one direct pass against L for the residue above 2^252
    let mut carry: i64 = 0;
    for j in 0..32 {
        x[j] += carry - (x[31] >> 4) * L[j];
        carry = x[j] >> 8; // signed shift, same reason
        x[j] &= 255;
    }

    // resolve the remaining borrow with one conditional subtraction
    for j in 0..32 {
        x[j] -= carry * L[j];
    }

    for i in 0..32 {
        x[i + 1] += x[i] >> 8;
        r[i] = (x[i] & 255) as u8;
    }
}

/// Reduces a 64-byte digest to a scalar modulo L.
pub(crate) fn reduce(digest: &[u8; 64]) -> [u8; 32] {
    let mut x = [0i64; 64];
    for (limb, byte) in x.iter_mut().zip(digest.iter()) {
        *limb = *byte as i64;
    }

    let mut r = [0u8; 32];
    mod_l(&mut r, &mut x);
    r
}

/// Computes `(c + k·a) mod L`.
///
/// The 32×32 schoolbook product of `k` and `a` accumulates on top of
/// `c` in the 64-limb representation, then reduces. This is the
/// `S = r + k·s` step of signing.
pub(crate) fn mul_add(k: &[u8; 32], a: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let mut x = [0i64; 64];
    for i in 0..32 {
        x[i] = c[i] as i64;
    }
    for i in 0..32 {
        for j in 0..32 {
            x[i + j] += k[i] as i64 * a[j] as i64;
        }
    }

    let mut r = [0u8; 32];
    mod_l(&mut r, &mut x);
    r
}

#[cfg(test)]
mod tests {
    use super::{L, mul_add, reduce};

    fn scalar(v: u8) -> [u8; 32] {
        let mut s = [0u8; 32];
        s[0] = v;
        s
    }

    #[test]
    fn small_values_reduce_to_themselves() {
        let mut digest = [0u8; 64];
        digest[0] = 5;
        assert_eq!(reduce(&digest), scalar(5));
    }

    #[test]
    fn group_order_reduces_to_zero() {
        let mut digest = [0u8; 64];
        for (d, l) in digest.iter_mut().zip(L.iter()) {
            *d = *l as u8;
        }
        assert_eq!(reduce(&digest), scalar(0));
    }

    #[test]
    fn one_below_group_order_is_canonical() {
        let mut digest = [0u8; 64];
        for (d, l) in digest.iter_mut().zip(L.iter()) {
            *d = *l as u8;
        }
        digest[0] -= 1;

        let reduced = reduce(&digest);
        assert_eq!(reduced[0], (L[0] - 1) as u8);
        assert_eq!(reduced[31], L[31] as u8);
    }

    #[test]
    fn mul_add_combines_linearly() {
        // 2·3 + 4 = 10
        assert_eq!(mul_add(&scalar(2), &scalar(3), &scalar(4)), scalar(10));
    }
}
