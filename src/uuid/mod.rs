//! UUID generation after RFC 4122.
//!
//! Generates 128-bit UUIDs as V1 (time-based) or V4 (random-based).
//! V1 timestamps come from the injected [`Clock`]; V4 randomness is
//! caller-supplied — pair it with [`crate::fortuna::Fortuna`] — so
//! this module never reaches into the environment on its own.

use crate::clock::{Clock, SystemClock};
use crate::error::CryptoError;

/// Offset from the Unix epoch to the Gregorian epoch (1582-10-15) in
/// milliseconds, as required by the V1 timestamp layout.
const GREGORIAN_OFFSET_MS: u64 = 12_219_292_800_000;

/// Stateful generator for time-based (V1) UUIDs.
///
/// Tracks the last issued timestamp and the clock sequence so that
/// same-tick requests and clock regressions still produce unique
/// identifiers.
pub struct UuidGenerator<C: Clock = SystemClock> {
    clock: C,
    last_ticks: u64,
    clock_seq: Option<u16>,
}

impl UuidGenerator {
    /// Creates a generator on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> UuidGenerator<C> {
    /// Creates a generator with an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        UuidGenerator {
            clock,
            last_ticks: 0,
            clock_seq: None,
        }
    }

    /// Creates a time-based V1 UUID.
    ///
    /// `node` is the 6-byte node identifier (a MAC address, or true
    /// random data with the multicast bit set). `clock_seq` seeds the
    /// 14-bit clock sequence on first use; supply random bytes so
    /// identifiers from restarted generators cannot collide. The
    /// sequence is bumped automatically when the clock regresses, and
    /// same-millisecond requests are disambiguated through the 100 ns
    /// sub-tick.
    pub fn v1(&mut self, node: &[u8], clock_seq: Option<[u8; 2]>) -> Result<[u8; 16], CryptoError> {
        let node: &[u8; 6] = node
            .try_into()
            .map_err(|_| CryptoError::bad_len(6, node.len()))?;

        // 100 ns ticks since the Gregorian epoch
        let mut ticks = (self.clock.now_ms() + GREGORIAN_OFFSET_MS) * 10_000;

        if ticks == self.last_ticks {
            ticks += 1;
        } else if ticks < self.last_ticks {
            let seq = self.clock_seq.unwrap_or(0);
            self.clock_seq = Some((seq + 1) & 0x3fff);
        }
        self.last_ticks = ticks;

        let seq = *self
            .clock_seq
            .get_or_insert_with(|| match clock_seq {
                Some(cs) => u16::from_le_bytes(cs),
                None => 0,
            });

        let mut uuid = [0u8; 16];

        // time_low
        uuid[..4].copy_from_slice(&(ticks as u32).to_be_bytes());
        // time_mid
        uuid[4..6].copy_from_slice(&(((ticks >> 32) & 0xffff) as u16).to_be_bytes());
        // time_hi_and_version
        uuid[6..8].copy_from_slice(&((((ticks >> 48) & 0x0fff) as u16) | 0x1000).to_be_bytes());
        // clock_seq_hi_and_reserved, clock_seq_low
        uuid[8] = ((seq >> 8) as u8 & 0x3f) | 0x80;
        uuid[9] = seq as u8;
        // node
        uuid[10..].copy_from_slice(node);

        Ok(uuid)
    }
}

/// Creates a random-based V4 UUID from 16 bytes of true random data.
///
/// Only the version and variant bits are imposed; the remaining 122
/// bits are taken from `random` as given.
pub fn v4(random: &[u8]) -> Result<[u8; 16], CryptoError> {
    let mut uuid: [u8; 16] = random
        .try_into()
        .map_err(|_| CryptoError::bad_len(16, random.len()))?;

    uuid[6] = (uuid[6] & 0x0f) | 0x40;
    uuid[8] = (uuid[8] & 0x3f) | 0x80;
    Ok(uuid)
}

/// Formats a UUID in the canonical hyphenated form, e.g.
/// `550e8400-e29b-11d4-a716-446655440000`.
pub fn format(uuid: &[u8; 16]) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&uuid[..4]),
        hex::encode(&uuid[4..6]),
        hex::encode(&uuid[6..8]),
        hex::encode(&uuid[8..10]),
        hex::encode(&uuid[10..]),
    )
}
