//! Error types shared across the crate.
//!
//! Every recoverable failure condition is surfaced as a typed
//! [`CryptoError`] value rather than a sentinel result, so that callers
//! cannot silently consume unusable output. None of these conditions is
//! fatal to the process.
//!
//! Signature verification returning `false` is a normal, expected
//! outcome and is therefore *not* part of this taxonomy; it is reported
//! through the `Ok(bool)` channel of [`crate::ed25519::verify`].

use thiserror::Error;

/// Failure conditions reported by the cryptographic primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// An input (key, seed, signature, nonce, node identifier, block)
    /// does not have the length the operation requires.
    #[error("invalid input length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length of the rejected input in bytes.
        got: usize,
    },

    /// A packed curve point does not correspond to any valid point on
    /// the curve.
    #[error("packed value is not a valid curve point")]
    DecompressionFailure,

    /// The random generator was asked for output before any reseed has
    /// occurred; its output would not be cryptographically secure.
    #[error("random generator has not been seeded yet")]
    NotSeeded,

    /// The random generator has been stopped and no longer produces
    /// output.
    #[error("random generator is stopped")]
    GeneratorInactive,

    /// A padded buffer does not end in well-formed padding.
    #[error("malformed padding")]
    InvalidPadding,
}

impl CryptoError {
    /// Builds a [`CryptoError::InvalidLength`] from the required and
    /// actual input lengths.
    pub(crate) fn bad_len(expected: usize, got: usize) -> Self {
        CryptoError::InvalidLength { expected, got }
    }
}
