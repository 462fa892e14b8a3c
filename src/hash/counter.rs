//! Counter-prefixed SHA-256.
//!
//! Every hash Balloon computes over its own state is prefixed with an
//! 8-byte little-endian counter:
//!
//! ```text
//! H(cnt, x_1, ..., x_n) = SHA-256(LE64(cnt) || x_1 || ... || x_n)
//! ```
//!
//! The counter advances by exactly one after each call, so two calls with
//! identical inputs never produce the same digest within one instance.
//! Digests depend on the exact counter value, which makes the order of
//! calls part of the output.

use sha2::{Digest, Sha256};

use super::sha256::DIGEST_SIZE;

/// SHA-256 hasher with a domain-separating call counter.
///
/// One instance belongs to one Balloon run. It is never shared between
/// lanes and never outlives the run that created it.
#[derive(Debug, Default)]
pub struct CountingHasher {
    counter: u64,
}

impl CountingHasher {
    /// Creates a hasher whose first call uses counter value zero.
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Value the next call will be prefixed with.
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Computes `SHA-256(LE64(counter) || parts...)` and advances the counter.
    ///
    /// The counter wraps on overflow, which matches an 8-byte little-endian
    /// increment with carry.
    pub fn hash(&mut self, parts: &[&[u8]]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(self.counter.to_le_bytes());

        for part in parts {
            hasher.update(part);
        }

        self.counter = self.counter.wrapping_add(1);

        hasher.finalize().into()
    }
}
