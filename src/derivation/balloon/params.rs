//! Parameter definitions and validation for Balloon.
//!
//! This module defines the configurable cost parameters shared by the
//! sequential and parallel variants, and the error type reported when they
//! are out of range.

use std::num::NonZeroU32;

use thiserror::Error;

use super::{HASH_SIZE, MIN_DELTA};

/// Result type alias using `BalloonError`.
pub type Result<T> = std::result::Result<T, BalloonError>;

/// Invalid-argument errors for Balloon and BalloonM.
///
/// Every variant names the offending parameter and carries the rejected
/// value. All of them are raised before any hashing work begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalloonError {
    /// The output buffer is not exactly `HASH_SIZE` bytes long.
    #[error("output must be {expected} bytes long, got {actual}")]
    InvalidOutputLength {
        /// Required length.
        expected: usize,
        /// Length of the buffer passed in.
        actual: usize,
    },

    /// Space cost must be at least 1 block.
    #[error("space cost must be greater than 0, got {0}")]
    SpaceCostTooSmall(u32),

    /// The buffer for this space cost cannot be allocated.
    #[error("space cost {0} needs more memory than can be allocated")]
    SpaceCostTooLarge(u32),

    /// Time cost must be at least 1 round.
    #[error("time cost must be greater than 0, got {0}")]
    TimeCostTooSmall(u32),

    /// Parallelism must be at least 1 lane.
    #[error("parallelism must be greater than 0, got {0}")]
    ParallelismTooSmall(u32),

    /// Delta must be at least `MIN_DELTA`.
    #[error("delta must be greater than or equal to {min}, got {actual}")]
    DeltaTooSmall {
        /// `MIN_DELTA`.
        min: u32,
        /// Rejected value.
        actual: u32,
    },
}

impl BalloonError {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidOutputLength { .. } => "output",
            Self::SpaceCostTooSmall(_) | Self::SpaceCostTooLarge(_) => "space_cost",
            Self::TimeCostTooSmall(_) => "time_cost",
            Self::ParallelismTooSmall(_) => "parallelism",
            Self::DeltaTooSmall { .. } => "delta",
        }
    }
}

/// Configuration parameters for Balloon and BalloonM.
///
/// # Fields
///
/// - `space_cost`: number of 32-byte blocks in each buffer (memory)
/// - `time_cost`: number of mixing rounds over the buffer (sequential work)
/// - `delta`: pseudorandom probes per block per round (at least `MIN_DELTA`)
/// - `parallelism`: number of independent lanes, used by BalloonM only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalloonParams {
    /// Buffer length in blocks (minimum 1).
    pub space_cost: u32,
    /// Number of mixing rounds (minimum 1).
    pub time_cost: u32,
    /// Random probes per block per round (minimum `MIN_DELTA`).
    pub delta: u32,
    /// Lane count for the parallel variant (minimum 1).
    pub parallelism: u32,
}

impl BalloonParams {
    /// Parameters with the given costs, `MIN_DELTA` probes and one lane.
    pub fn new(space_cost: u32, time_cost: u32) -> Self {
        Self {
            space_cost,
            time_cost,
            delta: MIN_DELTA,
            parallelism: 1,
        }
    }

    /// Replaces the number of probes per block per round.
    pub fn with_delta(mut self, delta: u32) -> Self {
        self.delta = delta;
        self
    }

    /// Replaces the lane count.
    pub fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Validates the parameters used by a single Balloon instance.
    ///
    /// `parallelism` is not inspected.
    pub fn validate(&self) -> Result<()> {
        self.check(false)
    }

    /// Validates the parameters used by BalloonM, including `parallelism`.
    pub fn validate_parallel(&self) -> Result<()> {
        self.check(true)
    }

    pub(crate) fn space_cost_nonzero(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.space_cost).ok_or(BalloonError::SpaceCostTooSmall(self.space_cost))
    }

    fn check(&self, lanes: bool) -> Result<()> {
        self.space_cost_nonzero()?;

        if self.time_cost < 1 {
            return Err(BalloonError::TimeCostTooSmall(self.time_cost));
        }

        if lanes && self.parallelism < 1 {
            return Err(BalloonError::ParallelismTooSmall(self.parallelism));
        }

        if self.delta < MIN_DELTA {
            return Err(BalloonError::DeltaTooSmall {
                min: MIN_DELTA,
                actual: self.delta,
            });
        }

        Ok(())
    }
}

impl Default for BalloonParams {
    /// Default parameters: 1024 blocks (32 KiB), 3 rounds, `MIN_DELTA`, 1 lane.
    fn default() -> Self {
        Self::new(1024, 3)
    }
}

/// Checks that `output` can hold exactly one Balloon digest.
pub(crate) fn output_block(output: &mut [u8]) -> Result<&mut [u8; HASH_SIZE]> {
    let actual = output.len();

    output.try_into().map_err(|_| BalloonError::InvalidOutputLength {
        expected: HASH_SIZE,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_for_both_variants() {
        let params = BalloonParams::default();
        assert_eq!(params.delta, MIN_DELTA);
        assert!(params.validate().is_ok());
        assert!(params.validate_parallel().is_ok());
    }

    #[test]
    fn reports_first_failing_parameter() {
        let params = BalloonParams {
            space_cost: 0,
            time_cost: 0,
            delta: 0,
            parallelism: 0,
        };
        assert_eq!(params.validate(), Err(BalloonError::SpaceCostTooSmall(0)));

        let params = BalloonParams::new(1, 0).with_delta(0);
        assert_eq!(params.validate(), Err(BalloonError::TimeCostTooSmall(0)));

        let params = BalloonParams::new(1, 1).with_parallelism(0).with_delta(0);
        assert_eq!(
            params.validate(),
            Err(BalloonError::DeltaTooSmall { min: 3, actual: 0 })
        );
        assert_eq!(
            params.validate_parallel(),
            Err(BalloonError::ParallelismTooSmall(0))
        );
    }

    #[test]
    fn delta_boundary() {
        assert!(BalloonParams::new(1, 1).with_delta(MIN_DELTA).validate().is_ok());

        let err = BalloonParams::new(1, 1)
            .with_delta(MIN_DELTA - 1)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "delta");
        assert_eq!(
            err.to_string(),
            "delta must be greater than or equal to 3, got 2"
        );
    }

    #[test]
    fn output_must_be_exactly_hash_size() {
        let mut short = [0u8; HASH_SIZE - 1];
        let err = output_block(&mut short).unwrap_err();
        assert_eq!(
            err,
            BalloonError::InvalidOutputLength {
                expected: HASH_SIZE,
                actual: HASH_SIZE - 1
            }
        );
        assert_eq!(err.parameter(), "output");

        let mut exact = [0u8; HASH_SIZE];
        assert!(output_block(&mut exact).is_ok());
    }
}
