//! Conversions between `U256` and byte or integer representations
//!
//! All conversions preserve the internal big-endian representation of
//! `U256` and avoid implicit truncation.

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value. Lane outputs go
/// through this conversion unchanged, so a round trip returns the same bytes.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Converts a `u64` into a `U256`, placed in the least significant bytes.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Converts a `u128` into a `U256`, placed in the least significant bytes.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Borrows the underlying bytes in big-endian order.
impl AsRef<[u8]> for U256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
