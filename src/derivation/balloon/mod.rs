//! Balloon hashing (Boneh, Corrigan-Gibbs, Schechter, 2016).
//!
//! Balloon is a memory-hard password hashing function built only from a
//! standard cryptographic hash, here SHA-256. An attacker who computes it
//! with less memory pays for it with proportionally more hashing.
//!
//! # Security Properties
//!
//! - **Memory hardness**: the buffer holds `space_cost` 32-byte blocks and
//!   every block is revisited in each round.
//! - **Time hardness**: `time_cost` rounds of sequential mixing.
//! - **Tradeoff resistance**: `delta` pseudorandom probes per block per
//!   round tie every block to blocks far away in the buffer.
//!
//! Block selection depends on the salt, and memory access patterns leak
//! through the cache. That is inherent to the construction and is not
//! masked here.
//!
//! # Algorithm Overview
//!
//! 1. **Expansion**: fill the buffer with a counter-prefixed hash chain
//!    seeded from password and salt.
//! 2. **Mixing**: for each round and each block, hash the block with its
//!    predecessor, then with `delta` pseudorandomly selected blocks.
//! 3. **Extraction**: output the last block and wipe the buffer.
//!
//! # Parallel Variant
//!
//! BalloonM runs `parallelism` independent instances with lane-specific
//! salts, XORs their outputs, and finishes with
//! `SHA-256(password || salt || combined)`.
//!
//! # Published vectors
//!
//! Outputs are bit-compatible with the reference test vectors for
//! Balloon-SHA-256 and BalloonM-SHA-256 with `delta = 3`.

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub mod lanes;
pub(crate) mod memory;
pub mod params;
pub(crate) mod reference;

/// Size in bytes of every Balloon output.
pub const HASH_SIZE: usize = crate::hash::DIGEST_SIZE;

/// Recommended salt length in bytes. Not enforced; any length, including
/// zero, is accepted.
pub const SALT_SIZE: usize = 16;

/// Smallest accepted number of random probes per block per round.
pub const MIN_DELTA: u32 = 3;
