use crate::primitives::U256;

use std::num::NonZeroU64;
use std::ops::{BitXor, BitXorAssign, Rem};

impl BitXor<U256> for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl BitXorAssign<&U256> for U256 {
    fn bitxor_assign(&mut self, rhs: &U256) {
        self.0
            .iter_mut()
            .zip(rhs.0.iter())
            .for_each(|(l, r)| *l ^= r);
    }
}

/// Reduction modulo a 64-bit divisor.
///
/// Horner's scheme over the big-endian bytes: the running remainder stays
/// below the modulus, so shifting it by one byte always fits in a `u128`.
/// A `NonZeroU64` divisor keeps the operation total.
impl Rem<NonZeroU64> for U256 {
    type Output = u64;

    fn rem(self, modulus: NonZeroU64) -> Self::Output {
        let m = u128::from(modulus.get());

        let r = self
            .0
            .iter()
            .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % m);

        // r < m <= u64::MAX
        r as u64
    }
}
