//! Block-average decimation.
//!
//! ## Purpose
//!
//! This module downsamples a buffer by a fixed factor `F`, replacing every run
//! of `F` consecutive samples with its mean.
//!
//! ## Design notes
//!
//! * **Full blocks**: `mean = sum * (1 / F)`.
//! * **Trailing block**: The last `n mod F` samples, if any, are averaged over
//!   their own count: `mean = sum / r`.
//! * **Allocation**: Output storage comes from `allocate` and is sized
//!   `ceil(n / F)` up front.
//!
//! ## Key concepts
//!
//! ```text
//! n = 25, F = 10
//! [0 .. 10) [10 .. 20) [20 .. 25)
//!   mean       mean      mean over 5
//! ```
//!
//! ## Invariants
//!
//! * Output length is exactly `ceil(n / F)`; `n == 0` yields an empty buffer.
//! * No sample outside `[0, n)` is read.
//!
//! ## Non-goals
//!
//! * Arbitrary factors; only the two supported by the host functions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::buffer::{SampleBuffer, allocate};
use crate::primitives::errors::AggError;
use crate::primitives::sample::Sample;

// ============================================================================
// Decimation Factor
// ============================================================================

/// Downsampling factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimationFactor {
    /// Average every 10 samples.
    Ten,

    /// Average every 100 samples.
    Hundred,
}

impl DecimationFactor {
    /// Number of input samples per output sample.
    #[inline]
    pub const fn block_len(self) -> usize {
        match self {
            DecimationFactor::Ten => 10,
            DecimationFactor::Hundred => 100,
        }
    }

    /// Output length for `n` input samples, `ceil(n / F)`.
    #[inline]
    pub const fn output_len(self, n: usize) -> usize {
        n.div_ceil(self.block_len())
    }
}

// ============================================================================
// Decimation
// ============================================================================

/// Decimate `buffer` by `factor`.
///
/// Fails with [`AggError::NullEntries`] if the buffer is flagged as holding
/// nulls.
pub fn decimate<T: Sample>(
    buffer: SampleBuffer<'_, T>,
    factor: DecimationFactor,
) -> Result<Vec<T>, AggError> {
    let values = buffer.checked()?;
    let block = factor.block_len();

    let mut out = allocate::<T>(factor.output_len(values.len()))?;
    log::debug!(
        "decimating {} samples by {} into {}",
        values.len(),
        block,
        out.len()
    );

    let scale = T::one() / T::from_count(block);
    let mut blocks = values.chunks_exact(block);
    for (slot, chunk) in out.iter_mut().zip(&mut blocks) {
        *slot = T::block_sum(chunk) * scale;
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        if let Some(last) = out.last_mut() {
            *last = T::block_sum(tail) / T::from_count(tail.len());
        }
    }

    Ok(out)
}
