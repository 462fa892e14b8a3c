//! Hash functions used by the crate.
//!
//! SHA-256 itself comes from the `sha2` crate. This module adds the two
//! calling conventions Balloon needs on top of it: plain hashing of a
//! sequence of byte strings, and counter-prefixed hashing for domain
//! separation.

mod counter;
mod sha256;

pub use counter::CountingHasher;
pub use sha256::{DIGEST_SIZE, sha256};
