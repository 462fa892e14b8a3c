//! Expansion and extraction for Balloon.
//!
//! These are the two ends of a Balloon run: filling the buffer from the
//! password and salt, and copying the result out of the mixed buffer.

use super::HASH_SIZE;
use super::block::Buffer;
use crate::hash::CountingHasher;

/// Fills the buffer with a hash chain seeded from password and salt.
///
/// ```text
/// B[0] = H(cnt++, password || salt)
/// B[m] = H(cnt++, B[m - 1])          for m in 1..space_cost
/// ```
pub(crate) fn expand(
    buffer: &mut Buffer,
    hasher: &mut CountingHasher,
    password: &[u8],
    salt: &[u8],
) {
    buffer[0] = hasher.hash(&[password, salt]);

    for m in 1..buffer.len() {
        let next = hasher.hash(&[&buffer[m - 1]]);
        buffer[m] = next;
    }
}

/// Copies the last block into `output` and releases the buffer.
///
/// Taking the buffer by value ends its lifetime here, so it is wiped
/// before this function returns.
pub(crate) fn extract(buffer: Buffer, output: &mut [u8; HASH_SIZE]) {
    output.copy_from_slice(buffer.last());
    drop(buffer);
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::hash::sha256;

    #[test]
    fn expansion_is_a_counter_hash_chain() {
        let mut buffer = Buffer::allocate(NonZeroU32::new(3).unwrap()).unwrap();
        let mut hasher = CountingHasher::new();
        expand(&mut buffer, &mut hasher, b"pw", b"salt");

        let b0 = sha256(&[&0u64.to_le_bytes(), b"pw", b"salt"]);
        let b1 = sha256(&[&1u64.to_le_bytes(), &b0]);
        let b2 = sha256(&[&2u64.to_le_bytes(), &b1]);

        assert_eq!(buffer[0], b0);
        assert_eq!(buffer[1], b1);
        assert_eq!(buffer[2], b2);
        assert_eq!(hasher.counter(), 3);

        let mut out = [0u8; HASH_SIZE];
        extract(buffer, &mut out);
        assert_eq!(out, b2);
    }
}
