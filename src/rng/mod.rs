//! Random number generation module
//!
//! Randomness in this crate is limited to salt generation. Entropy comes
//! straight from the operating system through `rand::rngs::OsRng`; no
//! userspace generator state is kept.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::derivation::SALT_SIZE;

/// Returns a fresh random salt of the recommended length.
///
/// # Panics
/// Panics if the operating system cannot provide randomness. Such a failure
/// is considered unrecoverable in a cryptographic context.
pub fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt
}
