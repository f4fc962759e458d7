//! Windowed summation.
//!
//! ## Purpose
//!
//! This module sums the samples of a buffer that fall inside a query window.
//!
//! ## Design notes
//!
//! * **Native accumulator**: The running sum has the sample's own precision;
//!   an `f32` buffer is summed in `f32` and only widened on return.
//! * **Index order**: Samples are accumulated strictly from `istart` upward,
//!   so results are bit-reproducible.
//!
//! ## Invariants
//!
//! * An empty range sums to `0.0`.
//! * The result depends only on the inputs.
//!
//! ## Non-goals
//!
//! * This module does not compensate rounding (no Kahan summation).

// Internal dependencies
use crate::math::index::{IndexRange, QueryWindow, TimeGrid, map_window};
use crate::primitives::buffer::SampleBuffer;
use crate::primitives::errors::AggError;
use crate::primitives::sample::Sample;

/// Sum the samples of `buffer` inside `window`, widened to `f64`.
///
/// Fails with [`AggError::NullEntries`] if the buffer is flagged as holding
/// nulls.
pub fn window_sum<T: Sample>(
    buffer: SampleBuffer<'_, T>,
    grid: TimeGrid,
    window: QueryWindow,
) -> Result<f64, AggError> {
    let values = buffer.checked()?;
    let range = map_window(values.len(), grid, window);

    Ok(sum_range(values, range).widen())
}

/// Sum `values[range]` in index order in native precision.
#[inline]
pub fn sum_range<T: Sample>(values: &[T], range: IndexRange) -> T {
    if range.is_empty() {
        return T::zero();
    }

    values[range.bounds()]
        .iter()
        .fold(T::zero(), |acc, &v| acc + v)
}
