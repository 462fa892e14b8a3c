//! The Balloon mixing rounds.
//!
//! Every round walks the buffer front to back. Each block is first
//! rehashed with its predecessor, then mixed with `delta` pseudorandomly
//! chosen blocks:
//!
//! ```text
//! B[m] = H(cnt++, B[m - 1] || B[m])                   (B[-1] = B[space_cost - 1])
//! B[m] = H(cnt++, B[m] || B[other(t, m, i)])          for i in 0..delta
//! ```
//!
//! Reads always see the current buffer, including blocks already updated
//! earlier in the same round. That ordering is what makes one instance
//! inherently sequential.

use tracing::trace;

use super::block::Buffer;
use super::reference::reference_index;
use crate::hash::CountingHasher;

/// Runs `time_cost` mixing rounds over `buffer` in place.
pub(crate) fn mix(
    buffer: &mut Buffer,
    hasher: &mut CountingHasher,
    salt: &[u8],
    time_cost: u32,
    delta: u32,
) {
    let len = buffer.len();
    let space_cost = buffer.modulus();

    for t in 0..u64::from(time_cost) {
        for m in 0..len {
            let mixed = hasher.hash(&[&buffer[buffer.prev(m)], &buffer[m]]);
            buffer[m] = mixed;

            for i in 0..u64::from(delta) {
                let other = reference_index(hasher, salt, space_cost, t, m as u64, i);
                let mixed = hasher.hash(&[&buffer[m], &buffer[other]]);
                buffer[m] = mixed;
            }
        }

        trace!(round = t, counter = hasher.counter(), "mixing round complete");
    }
}
