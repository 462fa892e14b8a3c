//! The sequential Balloon hasher and its free-function entry points.

use subtle::ConstantTimeEq;
use tracing::{debug, instrument};
use zeroize::Zeroize;

use super::HASH_SIZE;
use super::block::Buffer;
use super::boundary::{expand, extract};
use super::memory::mix;
use super::params::{BalloonParams, Result, output_block};
use crate::hash::CountingHasher;

/// A configured Balloon hasher.
///
/// Holds validated parameters only; every call allocates, fills and wipes
/// its own buffer, so one `Balloon` can be used from several threads.
///
/// # Example
///
/// ```rust
/// use balloon::derivation::{Balloon, BalloonParams};
///
/// let balloon = Balloon::new(BalloonParams::new(16, 1)).unwrap();
/// let hash = balloon.hash(b"password", b"salt").unwrap();
/// assert_eq!(hash.len(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct Balloon {
    params: BalloonParams,
}

impl Balloon {
    /// Validates `params` and builds a hasher from them.
    ///
    /// `params.parallelism` is ignored by the sequential variant.
    pub fn new(params: BalloonParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this hasher was built with.
    pub fn params(&self) -> &BalloonParams {
        &self.params
    }

    /// Hashes `password` with `salt` and returns the 32-byte digest.
    pub fn hash(&self, password: &[u8], salt: &[u8]) -> Result<[u8; HASH_SIZE]> {
        let mut output = [0u8; HASH_SIZE];
        self.run(password, salt, &mut output)?;
        Ok(output)
    }

    /// Hashes `password` with `salt` into `output`.
    ///
    /// `output` must be exactly `HASH_SIZE` bytes. It is left untouched if
    /// the call fails.
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
        name = "balloon",
        skip_all,
        fields(
            space_cost = self.params.space_cost,
            time_cost = self.params.time_cost,
            delta = self.params.delta,
        )
    )]
    fn run(&self, password: &[u8], salt: &[u8], output: &mut [u8; HASH_SIZE]) -> Result<()> {
        let mut buffer = Buffer::allocate(self.params.space_cost_nonzero()?)?;
        let mut hasher = CountingHasher::new();

        expand(&mut buffer, &mut hasher, password, salt);
        mix(&mut buffer, &mut hasher, salt, self.params.time_cost, self.params.delta);
        extract(buffer, output);

        debug!(hashes = hasher.counter(), "balloon complete");
        Ok(())
    }
}

/// Computes the Balloon hash of `password` into a 32-byte `output`.
///
/// All arguments are validated before any work starts: `output` must be
/// `HASH_SIZE` bytes, `space_cost` and `time_cost` at least 1 and `delta`
/// at least `MIN_DELTA`. On error `output` is not modified.
pub fn compute_hash(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    space_cost: u32,
    time_cost: u32,
    delta: u32,
) -> Result<()> {
    let output = output_block(output)?;
    let params = BalloonParams::new(space_cost, time_cost).with_delta(delta);
    Balloon::new(params)?.run(password, salt, output)
}

/// Derives a 32-byte key from `password` into `output`.
///
/// Same construction and same output as [`compute_hash`].
pub fn derive_key(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    space_cost: u32,
    time_cost: u32,
    delta: u32,
) -> Result<()> {
    compute_hash(output, password, salt, space_cost, time_cost, delta)
}

/// Checks `expected` against the Balloon hash of `password` and `salt`.
pub fn verify(
    expected: &[u8],
    password: &[u8],
    salt: &[u8],
    params: &BalloonParams,
) -> Result<bool> {
    Balloon::new(params.clone())?.verify(expected, password, salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::balloon::MIN_DELTA;

    #[test]
    fn hash_and_hash_into_agree() {
        let balloon = Balloon::new(BalloonParams::new(8, 2)).unwrap();
        let direct = balloon.hash(b"password", b"salt").unwrap();

        let mut into = [0u8; HASH_SIZE];
        balloon.hash_into(&mut into, b"password", b"salt").unwrap();
        assert_eq!(direct, into);

        let mut free = [0u8; HASH_SIZE];
        compute_hash(&mut free, b"password", b"salt", 8, 2, MIN_DELTA).unwrap();
        assert_eq!(direct, free);
    }

    #[test]
    fn verify_accepts_only_the_right_password() {
        let params = BalloonParams::new(4, 1);
        let hash = Balloon::new(params.clone()).unwrap().hash(b"pw", b"salt").unwrap();

        assert!(verify(&hash, b"pw", b"salt", &params).unwrap());
        assert!(!verify(&hash, b"pw2", b"salt", &params).unwrap());
        assert!(!verify(&hash[..31], b"pw", b"salt", &params).unwrap());
    }

    #[test]
    fn invalid_output_leaves_buffer_untouched() {
        let balloon = Balloon::new(BalloonParams::new(4, 1)).unwrap();
        let mut output = [0xAAu8; HASH_SIZE + 1];
        assert!(balloon.hash_into(&mut output, b"pw", b"salt").is_err());
        assert!(output.iter().all(|&b| b == 0xAA));
    }
}
