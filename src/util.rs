//! Constant-time byte utilities.
//!
//! These helpers back every secret-dependent comparison in the crate.
//! Comparing packed curve points, signature halves, or MAC tags through
//! anything that can early-exit would leak how many leading bytes match,
//! so all comparisons funnel through [`consttime_equal`].

/// Constant-time equality check of two byte slices.
///
/// Returns `true` when `x` and `y` have the same length and identical
/// contents. The comparison ORs the XOR of every byte pair and inspects
/// the accumulated difference once, so the running time depends only on
/// the input length, never on where the first mismatch occurs.
#[inline(never)]
pub fn consttime_equal(x: &[u8], y: &[u8]) -> bool {
    if x.len() != y.len() {
        return false;
    }

    let mut d: u8 = 0;
    for (a, b) in x.iter().zip(y.iter()) {
        d |= a ^ b;
    }
    d == 0
}

/// XOR of two equal-length byte slices.
///
/// # Panics
///
/// Panics if the slices differ in length; the callers in this crate
/// only combine buffers of identical, statically known size.
pub(crate) fn xor(lh: &[u8], rh: &[u8]) -> Vec<u8> {
    assert_eq!(lh.len(), rh.len(), "xor operands must match in length");
    lh.iter().zip(rh.iter()).map(|(a, b)| a ^ b).collect()
}
