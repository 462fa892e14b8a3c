//! Pseudorandom block selection for the Balloon mixing rounds.
//!
//! Each probe `i` of block `m` in round `t` mixes in one other block of
//! the buffer. Its position is derived in two stages:
//!
//! ```text
//! idx   = SHA-256(LE64(t) || LE64(m) || LE64(i))
//! r     = H(cnt++, salt || idx)
//! other = r mod space_cost            (r read as a little-endian integer)
//! ```
//!
//! The first stage uses plain SHA-256 and does not touch the counter.
//! The selection depends on the salt but not on the password. The
//! reduction is a plain modulo, biased toward low indices when
//! `space_cost` is not a power of two.

use std::num::NonZeroU64;

use crate::hash::{CountingHasher, sha256};
use crate::primitives::U256;

/// Encodes `(t, m, i)` as three little-endian 64-bit words and hashes them.
fn index_block(t: u64, m: u64, i: u64) -> [u8; 32] {
    let mut ints = [0u8; 24];
    ints[..8].copy_from_slice(&t.to_le_bytes());
    ints[8..16].copy_from_slice(&m.to_le_bytes());
    ints[16..].copy_from_slice(&i.to_le_bytes());

    sha256(&[&ints])
}

/// Returns the index of the block probe `i` of block `m` in round `t` reads.
///
/// The result is always in `0..space_cost`. Advances `hasher` by one.
pub(crate) fn reference_index(
    hasher: &mut CountingHasher,
    salt: &[u8],
    space_cost: NonZeroU64,
    t: u64,
    m: u64,
    i: u64,
) -> usize {
    let idx = index_block(t, m, i);
    let random = hasher.hash(&[salt, &idx]);

    // < space_cost <= u32::MAX
    (U256::from_le_bytes(random) % space_cost) as usize
}
