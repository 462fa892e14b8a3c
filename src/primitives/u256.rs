//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used to interpret Balloon blocks as numbers.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its use cases in this crate are:
//! - reducing a pseudorandom block modulo the buffer length
//! - XOR-combining lane outputs of the parallel variant
//!
//! The internal representation is big-endian. Balloon reads its blocks as
//! little-endian integers, so the `from_le_bytes`/`to_le_bytes` pair is the
//! boundary where byte order gets flipped.

mod conv;
mod ops;

use zeroize::Zeroize;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a value from 32 bytes, least significant byte first.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut be = bytes;
        be.reverse();
        U256(be)
    }

    /// Borrows the big-endian storage.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the value as 32 bytes, least significant byte first.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut le = self.0;
        le.reverse();
        le
    }
}

impl Zeroize for U256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
