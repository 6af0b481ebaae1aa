//! Fortuna-style accumulator-fed random generator.
//!
//! This module implements the two halves of Bruce Schneier's Fortuna
//! design:
//!
//! - an **accumulator**: a set of hash-based entropy pools that
//!   collectors feed events into, with per-pool entropy accounting and
//!   a reseed policy driven by a binary counter — pool *i* contributes
//!   to a reseed exactly when bit *i* of the reseed counter is set, so
//!   higher pools are drained exponentially less often and an attacker
//!   who can poison frequent reseeds cannot poison them all;
//!
//! - a **generator**: a block cipher in counter mode whose key is
//!   replaced after *every* extraction by two extra cipher blocks
//!   ("key erasure"), so capturing the key later never reveals output
//!   that was already handed out.
//!
//! Both halves are generic over the capabilities they consume: any
//! [`BlockCipher`] with 16-byte blocks and a 32-byte key, any 32-byte
//! [`Hash`], and any [`Clock`]. The defaults are AES-256, SHA-256 and
//! the system clock.
//!
//! Entropy collection itself is environmental and lives behind the
//! [`EntropySource`] trait; the state machine here never touches the
//! host environment on its own. Construction is deterministic: two
//! generators fed byte-identical event sequences under identical
//! clocks produce byte-identical output streams.
//!
//! # Usage
//!
//! ```no_run
//! use mantle::fortuna::Fortuna;
//!
//! let mut rng = Fortuna::from_os();
//! let key = rng.random_bytes(32).expect("seeded at construction");
//! ```
//!
//! A generator built with [`Fortuna::new`] instead starts *unseeded*
//! and yields [`CryptoError::NotSeeded`] until enough entropy has been
//! fed in and a reseed has fired; callers must handle that error
//! rather than treat output as available unconditionally.
//!
//! # Concurrency
//!
//! All methods take `&mut self`; the pools, counters and generator key
//! are one mutable state. Share a generator between threads only
//! behind an exclusive lock.

mod source;

pub use source::{EntropySource, OsEntropySource};

use std::marker::PhantomData;

use zeroize::Zeroizing;

use crate::cipher::{Aes256, BlockCipher};
use crate::clock::{Clock, SystemClock};
use crate::error::CryptoError;
use crate::hash::{Hash, Sha256};

/// Generator key length in bytes; the hash capability must produce
/// digests of this size and two cipher blocks must cover it.
const GENERATOR_KEY_SIZE: usize = 32;

/// Tuning parameters for the accumulator.
#[derive(Debug, Clone, Copy)]
pub struct FortunaConfig {
    /// Number of entropy pools. 32 suits rich environments; use fewer
    /// on hosts with scarce event sources so pools fill faster.
    pub num_pools: usize,
    /// Entropy (in bits) pool 0 must hold before a reseed may fire.
    pub reseed_limit: u32,
    /// Minimum wall-clock spacing between reseeds, in milliseconds.
    pub reseed_interval_ms: u64,
}

impl Default for FortunaConfig {
    fn default() -> Self {
        FortunaConfig {
            num_pools: 32,
            reseed_limit: 64,
            reseed_interval_ms: 10_000,
        }
    }
}

/// The Fortuna accumulator and generator.
///
/// See the module documentation for the overall design.
pub struct Fortuna<B = Aes256, H = Sha256, C = SystemClock>
where
    B: BlockCipher,
    H: Hash,
    C: Clock,
{
    config: FortunaConfig,

    // accumulator
    pools: Vec<H>,
    pool_entropy: Vec<u32>,
    entropy_level: u32,
    event_id: u32,
    rotor: usize,

    // generator
    key: Zeroizing<[u8; GENERATOR_KEY_SIZE]>,
    counter: [u8; 16],
    reseed_count: u32,
    last_reseed_ms: u64,
    active: bool,

    clock: C,
    _cipher: PhantomData<B>,
}

impl<B: BlockCipher, H: Hash> Fortuna<B, H, SystemClock> {
    /// Creates an unseeded generator on the system clock.
    pub fn new(config: FortunaConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Fortuna {
    /// Creates a default generator (AES-256 / SHA-256) and seeds it
    /// from operating-system entropy.
    ///
    /// Feeds four OS events per pool, mirroring the initialization
    /// burst of the reference design, so the first [`random_bytes`]
    /// call can reseed immediately.
    ///
    /// [`random_bytes`]: Fortuna::random_bytes
    pub fn from_os() -> Self {
        let mut rng = Self::new(FortunaConfig::default());
        let mut source = OsEntropySource;
        let events = rng.config.num_pools * 4;
        rng.feed_from(&mut source, events);
        rng
    }
}

impl<B: BlockCipher, H: Hash, C: Clock> Fortuna<B, H, C> {
    /// Creates an unseeded generator with an explicit clock.
    ///
    /// # Panics
    ///
    /// Panics if the plugged capabilities cannot drive the generator:
    /// the hash must emit 32-byte digests (they become cipher keys)
    /// and the cipher must use 16-byte blocks and 32-byte keys.
    pub fn with_clock(config: FortunaConfig, clock: C) -> Self {
        assert!(config.num_pools > 0, "at least one entropy pool required");
        assert_eq!(
            H::OUTPUT_SIZE,
            GENERATOR_KEY_SIZE,
            "pool hash must emit generator-key-sized digests"
        );
        assert_eq!(B::KEY_SIZE, GENERATOR_KEY_SIZE, "cipher must take a 256-bit key");
        assert_eq!(
            2 * B::BLOCK_SIZE,
            GENERATOR_KEY_SIZE,
            "two cipher blocks must form a fresh generator key"
        );

        Fortuna {
            pools: (0..config.num_pools).map(|_| H::default()).collect(),
            pool_entropy: vec![0; config.num_pools],
            entropy_level: 0,
            event_id: 0,
            rotor: 0,
            key: Zeroizing::new([0; GENERATOR_KEY_SIZE]),
            counter: [0; 16],
            reseed_count: 0,
            last_reseed_ms: 0,
            active: true,
            clock,
            _cipher: PhantomData,
            config,
        }
    }

    /// Adds caller-supplied entropy to the pools.
    ///
    /// The target pool advances round-robin across calls and the
    /// entropy content is estimated conservatively at one bit per
    /// eight bytes of data (rounded up, so small events still count).
    /// Collectors that know their true entropy content should call
    /// [`add_random_event`] directly.
    ///
    /// [`add_random_event`]: Fortuna::add_random_event
    pub fn add_entropy(&mut self, data: &[u8]) {
        let pool = self.rotor;
        self.rotor = (self.rotor + 1) % self.config.num_pools;

        let bits = (data.len() as u32).div_ceil(8);
        self.add_random_event(data, pool, bits);
    }

    /// Adds one entropy event to the given pool.
    ///
    /// The event is framed with a running event counter before being
    /// absorbed, so identical payloads still perturb the pool state.
    /// `bits` is the caller's estimate of the entropy content; it is
    /// trusted, not verified.
    pub fn add_random_event(&mut self, data: &[u8], pool: usize, bits: u32) {
        let pool = pool % self.config.num_pools;

        self.pool_entropy[pool] = self.pool_entropy[pool].saturating_add(bits);
        self.entropy_level = self.entropy_level.saturating_add(bits);

        self.pools[pool].update(&self.event_id.to_le_bytes());
        self.event_id = self.event_id.wrapping_add(1);
        self.pools[pool].update(data);
    }

    /// Pulls `events` entropy events from a source into the pools,
    /// advancing the round-robin pool index per event.
    pub fn feed_from<S: EntropySource>(&mut self, source: &mut S, events: usize) {
        for _ in 0..events {
            let mut buf = [0u8; 32];
            let bits = source.gather(&mut buf);

            let pool = self.rotor;
            self.rotor = (self.rotor + 1) % self.config.num_pools;
            self.add_random_event(&buf, pool, bits);
        }
    }

    /// Returns the accumulated entropy estimate in bytes.
    pub fn available_entropy(&self) -> u32 {
        self.entropy_level / 8
    }

    /// Returns whether at least one reseed has occurred.
    pub fn is_seeded(&self) -> bool {
        self.reseed_count != 0
    }

    /// Stops the generator; subsequent [`random_bytes`] calls fail
    /// with [`CryptoError::GeneratorInactive`]. There is no restart —
    /// construct a new instance instead.
    ///
    /// [`random_bytes`]: Fortuna::random_bytes
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Produces `len` pseudo-random bytes.
    ///
    /// First runs the reseed check: when pool 0 has accumulated at
    /// least `reseed_limit` bits *and* `reseed_interval_ms` has passed
    /// since the last reseed, the reseed counter is bumped and every
    /// pool whose bit is set in the new counter value is drained into
    /// a fresh generator key. Then output is generated, followed by
    /// the key-erasure rotation.
    ///
    /// Fails with [`CryptoError::GeneratorInactive`] after [`stop`],
    /// and with [`CryptoError::NotSeeded`] while no reseed has fired
    /// yet — unseeded output would be predictable and is never
    /// returned.
    ///
    /// [`stop`]: Fortuna::stop
    pub fn random_bytes(&mut self, len: usize) -> Result<Vec<u8>, CryptoError> {
        let now = self.clock.now_ms();

        if self.pool_entropy[0] >= self.config.reseed_limit
            && self.last_reseed_ms + self.config.reseed_interval_ms < now
        {
            self.reseed_count = self.reseed_count.wrapping_add(1);

            let mut seed = Vec::new();
            let mut strength: u32 = 0;
            for i in 0..self.config.num_pools.min(32) {
                if (self.reseed_count >> i) & 1 == 1 {
                    // finalize also resets the pool to a fresh context
                    seed.extend_from_slice(&self.pools[i].finalize());
                    strength = strength.saturating_add(self.pool_entropy[i]);
                    self.pool_entropy[i] = 0;
                }
            }

            self.entropy_level = self.entropy_level.saturating_sub(strength);
            self.reseed(&seed, now);
        }

        if !self.active {
            return Err(CryptoError::GeneratorInactive);
        }
        if self.reseed_count == 0 {
            return Err(CryptoError::NotSeeded);
        }

        Ok(self.pseudo_random_data(len))
    }

    /// Mixes `seed` into the generator key.
    ///
    /// The new key is `H(old_key ‖ seed)` — a plain hash ratchet, not
    /// an HMAC; the seed material itself carries the entropy. The
    /// counter is incremented, which also marks the generator as
    /// seeded (a non-zero counter is the "has been seeded" signal),
    /// and the reseed timestamp is recorded.
    fn reseed(&mut self, seed: &[u8], now_ms: u64) {
        let mut hasher = H::default();
        hasher.update(self.key.as_slice());
        hasher.update(seed);
        self.key.copy_from_slice(&hasher.finalize());

        increment(&mut self.counter);
        self.last_reseed_ms = now_ms;
    }

    /// Encrypts `blocks` successive counter values under the current
    /// key, incrementing the counter after each block.
    fn generate_blocks(&mut self, blocks: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(blocks * B::BLOCK_SIZE);
        for _ in 0..blocks {
            let block = B::encrypt_block(self.key.as_slice(), &self.counter)
                .expect("key and counter sizes are checked at construction");
            out.extend_from_slice(&block);
            increment(&mut self.counter);
        }
        out
    }

    /// Produces `len` output bytes, then rotates the key.
    ///
    /// Two blocks beyond the requested output become the next
    /// generator key, so the key that produced this output no longer
    /// exists once the call returns.
    fn pseudo_random_data(&mut self, len: usize) -> Vec<u8> {
        let mut out = self.generate_blocks(len / B::BLOCK_SIZE + 1);
        out.truncate(len);

        let new_key = self.generate_blocks(2);
        self.key.copy_from_slice(&new_key);
        out
    }
}

/// Little-endian ripple-carry increment of the generator counter.
fn increment(counter: &mut [u8; 16]) {
    for byte in counter.iter_mut() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}
