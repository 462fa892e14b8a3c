//! BalloonM: independent Balloon lanes combined into one digest.
//!
//! Each lane `i` (0-based) runs the sequential construction with the salt
//! `salt || LE64(i + 1)`. The lane outputs are XORed together and bound to
//! the original inputs with one more SHA-256:
//!
//! ```text
//! combined = Balloon(password, salt || LE64(1)) ⊕ ... ⊕ Balloon(password, salt || LE64(p))
//! output   = SHA-256(password || salt || combined)
//! ```
//!
//! Lanes share nothing mutable: each one owns its buffer, counter and lane
//! salt, and only reads `password` and `salt`. They run on the rayon
//! global pool and are all joined before the XOR.

use rayon::prelude::*;
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, trace};
use zeroize::Zeroize;

use super::HASH_SIZE;
use super::core::Balloon;
use super::params::{BalloonParams, Result, output_block};
use crate::hash::sha256;
use crate::primitives::U256;

/// Builds the salt of lane `lane` (1-based): `salt || LE64(lane)`.
pub(crate) fn lane_salt(salt: &[u8], lane: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(salt.len() + 8);
    out.extend_from_slice(salt);
    out.extend_from_slice(&lane.to_le_bytes());
    out
}

/// A configured parallel Balloon hasher.
///
/// The lane count is `params.parallelism`. With one lane the result still
/// differs from [`Balloon`], because of the final SHA-256.
#[derive(Clone, Debug)]
pub struct BalloonM {
    lane: Balloon,
}

impl BalloonM {
    /// Validates `params`, including `parallelism`, and builds a hasher.
    pub fn new(params: BalloonParams) -> Result<Self> {
        params.validate_parallel()?;
        Ok(Self {
            lane: Balloon::new(params)?,
        })
    }

    /// Parameters this hasher was built with.
    pub fn params(&self) -> &BalloonParams {
        self.lane.params()
    }

    /// Hashes `password` with `salt` across all lanes.
    pub fn hash(&self, password: &[u8], salt: &[u8]) -> Result<[u8; HASH_SIZE]> {
        let mut output = [0u8; HASH_SIZE];
        self.run(password, salt, &mut output)?;
        Ok(output)
    }

    /// Hashes `password` with `salt` into `output`, which must be exactly
    /// `HASH_SIZE` bytes. On error `output` is not modified.
    pub fn hash_into(&self, output: &mut [u8], password: &[u8], salt: &[u8]) -> Result<()> {
        let output = output_block(output)?;
        self.run(password, salt, output)
    }

    /// Recomputes the digest and compares it with `expected` in constant time.
    pub fn verify(&self, expected: &[u8], password: &[u8], salt: &[u8]) -> Result<bool> {
        let mut actual = self.hash(password, salt)?;
        let matches: bool = actual[..].ct_eq(expected).into();
        actual.zeroize();
        Ok(matches)
    }

    #[instrument(
        level = "debug",
        name = "balloon_m",
        skip_all,
        fields(
            space_cost = self.params().space_cost,
            time_cost = self.params().time_cost,
            delta = self.params().delta,
            parallelism = self.params().parallelism,
        )
    )]
    fn run(&self, password: &[u8], salt: &[u8], output: &mut [u8; HASH_SIZE]) -> Result<()> {
        let lanes = u64::from(self.params().parallelism);

        let mut combined = (1..=lanes)
            .into_par_iter()
            .map(|lane| -> Result<U256> {
                let mut digest = self.lane.hash(password, &lane_salt(salt, lane))?;
                let value = U256::from(digest);
                digest.zeroize();
                trace!(lane, "lane complete");
                Ok(value)
            })
            .try_reduce(|| U256::ZERO, |a, b| Ok(a ^ b))?;

        *output = sha256(&[password, salt, combined.as_bytes()]);
        combined.zeroize();

        debug!(lanes, "balloon_m complete");
        Ok(())
    }
}

/// Computes the BalloonM hash of `password` into a 32-byte `output`.
///
/// Validation happens before any lane starts: `output` must be `HASH_SIZE`
/// bytes, `space_cost`, `time_cost` and `parallelism` at least 1 and
/// `delta` at least `MIN_DELTA`. On error `output` is not modified.
pub fn compute_hash_parallel(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    space_cost: u32,
    time_cost: u32,
    parallelism: u32,
    delta: u32,
) -> Result<()> {
    let output = output_block(output)?;
    let params = BalloonParams::new(space_cost, time_cost)
        .with_parallelism(parallelism)
        .with_delta(delta);
    BalloonM::new(params)?.run(password, salt, output)
}

/// Checks `expected` against the BalloonM hash of `password` and `salt`.
pub fn verify_parallel(
    expected: &[u8],
    password: &[u8],
    salt: &[u8],
    params: &BalloonParams,
) -> Result<bool> {
    BalloonM::new(params.clone())?.verify(expected, password, salt)
}
