//! Self-contained cryptographic primitives for Mantle
//!
//! This crate provides the low-level cryptographic building blocks used
//! throughout the Mantle ecosystem: Curve25519/Ed25519 elliptic-curve
//! arithmetic, a Fortuna-style accumulator-fed random generator, and the
//! capability surface (hashes, block/stream ciphers, MACs, key derivation)
//! those cores are built against.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. The curve
//! arithmetic and the generator state machine are implemented from their
//! numeric definitions; the fixed published transforms (SHA-2, SHA-3,
//! AES, ChaCha20) are supplied by audited implementations and wrapped
//! behind small capability traits so no core module ever names a
//! concrete algorithm.
//!
//! # Module overview
//!
//! - `curve25519`
//!   Arithmetic over the field 𝔽ₚ with p = 2²⁵⁵ − 19, X25519 scalar
//!   multiplication (Montgomery ladder), extended Edwards-point
//!   operations, and reduction modulo the Ed25519 group order. This is
//!   the numeric foundation of both key exchange and signatures.
//!
//! - `ed25519`
//!   Ed25519 key generation, deterministic signing, and verification,
//!   built on `curve25519` and the SHA-512 hash capability.
//!
//! - `fortuna`
//!   An entropy accumulator and pseudo-random generator in the Fortuna
//!   design: pooled entropy collection, a binary-counter reseed policy,
//!   block-cipher output generation, and key erasure after every
//!   extraction. Entropy sources and the clock are pluggable so the
//!   state machine itself stays environment-agnostic.
//!
//! - `hash`
//!   The `Hash` capability trait with SHA-256/512, SHA-3, Keccak and
//!   SHAKE implementations.
//!
//! - `cipher`
//!   The `BlockCipher` and `StreamCipher` capability traits with
//!   AES-256 and ChaCha20 implementations, block-cipher modes
//!   (ECB/CBC/CTR) and padding schemes.
//!
//! - `mac` / `kdf`
//!   HMAC over any `Hash`, and PBKDF2 over HMAC.
//!
//! - `uuid`
//!   RFC 4122 UUID generation (time-based V1 and random-based V4).
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Constant-time handling of secret-dependent data
//! - Typed errors instead of silent sentinel results
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to serve as a small, controlled
//! foundation for Mantle's internal cryptographic needs.

mod util;

pub mod cipher;
pub mod clock;
pub mod curve25519;
pub mod ed25519;
pub mod error;
pub mod fortuna;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod uuid;

pub use error::CryptoError;
pub use util::consttime_equal;
