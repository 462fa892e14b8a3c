//! Balloon hashing for password storage and key derivation
//!
//! This crate implements the Balloon memory-hard hashing function and its
//! parallel variant BalloonM over SHA-256. Both produce 32-byte outputs
//! that are bit-compatible with the published test vectors.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! hash call, counter value and buffer access follows the reference
//! construction exactly, and working memory is wiped on every exit path.
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-256 (from the `sha2` crate) and the counter-prefixed variant that
//!   Balloon uses for domain separation between its own hash calls.
//!
//! - `primitives`
//!   The fixed-size `U256` integer used to reduce pseudorandom blocks to
//!   buffer indices and to XOR lane outputs.
//!
//! - `derivation`
//!   The Balloon and BalloonM constructions: parameters and validation,
//!   expansion, mixing, extraction and the lane orchestrator.
//!
//!   Entry points:
//!   - [`compute_hash`] / [`derive_key`]: sequential Balloon
//!   - [`compute_hash_parallel`]: BalloonM
//!   - [`Balloon`] / [`BalloonM`]: the same from reusable [`BalloonParams`]
//!
//! - `rng`
//!   Salt generation from operating system entropy.
//!
//! # Example
//!
//! ```rust
//! use balloon::{HASH_SIZE, MIN_DELTA, compute_hash, compute_hash_parallel};
//!
//! let mut hash = [0u8; HASH_SIZE];
//! compute_hash(&mut hash, b"hunter42", b"examplesalt", 64, 3, MIN_DELTA).unwrap();
//!
//! let mut lanes = [0u8; HASH_SIZE];
//! compute_hash_parallel(&mut lanes, b"hunter42", b"examplesalt", 64, 3, 4, MIN_DELTA).unwrap();
//! assert_ne!(hash, lanes);
//! ```
//!
//! # Logging
//!
//! Each call opens a `debug`-level `tracing` span carrying the cost
//! parameters. Passwords, salts and outputs are never recorded. No
//! subscriber is installed by the crate.
//!
//! # Non-goals
//!
//! - No streaming input and no variable-length output
//! - No encoded storage format (PHC strings or similar)
//! - No masking of the salt-dependent memory access pattern

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod derivation;
pub mod hash;
pub mod primitives;
pub mod rng;

pub use derivation::{
    Balloon, BalloonError, BalloonM, BalloonParams, HASH_SIZE, MIN_DELTA, Result, SALT_SIZE,
    compute_hash, compute_hash_parallel, derive_key, verify, verify_parallel,
};
pub use rng::generate_salt;
