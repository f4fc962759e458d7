//! Sample precision abstraction.
//!
//! ## Purpose
//!
//! This module defines the `Sample` trait, the bridge between the generic
//! aggregation code and the two concrete precisions (`f32` and `f64`).
//!
//! ## Design notes
//!
//! * **Native accumulation**: Sums are computed in the sample's own precision.
//!   Widening to `f64` happens only when a result leaves the crate.
//! * **Block kernel**: `f64` block sums use `wide::f64x2` lanes; `f32` stays
//!   scalar.
//!
//! ## Invariants
//!
//! * `widen` is lossless for both implementations.
//! * `from_count` is exact for any block length used by the decimator.

use core::fmt::Debug;
use num_traits::Float;
use wide::f64x2;

/// Floating-point sample type supported by the aggregation kernels.
pub trait Sample: Float + Debug + Send + Sync + 'static {
    /// Widen to `f64` at the API boundary.
    fn widen(self) -> f64;

    /// Convert an element count into this precision.
    fn from_count(count: usize) -> Self;

    /// Sum a contiguous block of samples.
    ///
    /// Summation order is unspecified; callers that need strict index order
    /// accumulate themselves.
    fn block_sum(block: &[Self]) -> Self;
}

impl Sample for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn from_count(count: usize) -> Self {
        count as f64
    }

    #[inline]
    fn block_sum(block: &[Self]) -> Self {
        let mut lanes = f64x2::splat(0.0);
        let mut pairs = block.chunks_exact(2);
        for pair in &mut pairs {
            lanes += f64x2::new([pair[0], pair[1]]);
        }

        // Odd tail
        pairs
            .remainder()
            .iter()
            .fold(lanes.reduce_add(), |acc, &v| acc + v)
    }
}

impl Sample for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_count(count: usize) -> Self {
        count as f32
    }

    #[inline]
    fn block_sum(block: &[Self]) -> Self {
        block.iter().fold(0.0, |acc, &v| acc + v)
    }
}
