//! Pluggable entropy sources.
//!
//! The reference Fortuna design couples its collectors to the host
//! environment (input events, timers, platform randomness). Here that
//! coupling lives behind [`EntropySource`], so the accumulator state
//! machine stays environment-agnostic and fully deterministic under
//! test: hosts implement the trait for whatever event streams they
//! have and feed the generator through
//! [`Fortuna::feed_from`](super::Fortuna::feed_from).

/// A producer of entropy events.
pub trait EntropySource {
    /// Fills `buf` with collected entropy and returns the estimated
    /// entropy content in bits.
    ///
    /// The estimate is the implementer's responsibility; the
    /// accumulator trusts it for its reseed accounting.
    fn gather(&mut self, buf: &mut [u8; 32]) -> u32;
}

/// Operating-system randomness as an entropy source.
///
/// Each event is 32 bytes from the OS generator, estimated at their
/// full 256 bits.
pub struct OsEntropySource;

impl EntropySource for OsEntropySource {
    /// # Panics
    ///
    /// Panics if the operating system cannot supply randomness. Such a
    /// failure indicates a critical system issue and is considered
    /// unrecoverable in a cryptographic context.
    fn gather(&mut self, buf: &mut [u8; 32]) -> u32 {
        getrandom::getrandom(buf).expect("operating system entropy unavailable");
        256
    }
}
