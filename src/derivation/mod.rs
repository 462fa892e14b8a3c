//! Password hashing and key derivation.
//!
//! This module currently provides Balloon hashing and its multi-lane
//! variant BalloonM, both over SHA-256.
//!
//! The free functions take the output buffer first and validate every
//! argument before doing any work. The `Balloon`/`BalloonM` types do the
//! same from a reusable `BalloonParams`.

pub mod balloon;

pub use balloon::core::{Balloon, compute_hash, derive_key, verify};
pub use balloon::lanes::{BalloonM, compute_hash_parallel, verify_parallel};
pub use balloon::params::{BalloonError, BalloonParams, Result};
pub use balloon::{HASH_SIZE, MIN_DELTA, SALT_SIZE};
