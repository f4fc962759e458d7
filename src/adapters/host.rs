//! Host adapter for database-style array functions.
//!
//! ## Purpose
//!
//! This module provides one entry point per precision and operation, taking
//! exactly what a database host hands over: a flat slice of samples, the
//! host's "has nulls" flag, and the time bounds as `f64` scalars.
//!
//! ## Design notes
//!
//! * **Thin wrappers**: Each function validates scalars, wraps the slice in a
//!   `SampleBuffer`, and delegates to the generic algorithm.
//! * **Naming**: `clamp` is the host's name for a windowed slice, `decimate`
//!   averages by 10, `hundredth` by 100.
//! * **Ownership**: `array_clamp_*` may return the input slice itself; see
//!   [`WindowSlice`].
//!
//! ## Invariants
//!
//! * Sum results are always `f64`; array results keep the input precision.
//!
//! ## Non-goals
//!
//! * This module does not register functions with any host runtime.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::decimate::{DecimationFactor, decimate};
use crate::algorithms::slice::window_slice;
use crate::algorithms::sum::window_sum;
use crate::engine::validator::Validator;
use crate::math::index::{QueryWindow, TimeGrid};
use crate::primitives::buffer::{SampleBuffer, WindowSlice};
use crate::primitives::errors::AggError;
use crate::primitives::sample::Sample;

// ============================================================================
// Shared plumbing
// ============================================================================

fn checked_bounds(
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<(TimeGrid, QueryWindow), AggError> {
    let grid = TimeGrid::new(tstart, tend);
    let window = QueryWindow::new(astart, aend);
    Validator::validate_grid(&grid)?;
    Validator::validate_window(&window)?;
    Ok((grid, window))
}

fn sum<T: Sample>(
    data: &[T],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<f64, AggError> {
    let (grid, window) = checked_bounds(tstart, tend, astart, aend)?;
    window_sum(SampleBuffer::with_nulls(data, has_nulls), grid, window)
}

fn clamp<T: Sample>(
    data: &[T],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<WindowSlice<'_, T>, AggError> {
    let (grid, window) = checked_bounds(tstart, tend, astart, aend)?;
    window_slice(SampleBuffer::with_nulls(data, has_nulls), grid, window)
}

// ============================================================================
// Double precision
// ============================================================================

/// Sum of the `f64` samples in `[astart, aend]`.
pub fn array_sum_f64(
    data: &[f64],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<f64, AggError> {
    sum(data, has_nulls, tstart, tend, astart, aend)
}

/// `f64` samples in `[astart, aend]`.
pub fn array_clamp_f64(
    data: &[f64],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<WindowSlice<'_, f64>, AggError> {
    clamp(data, has_nulls, tstart, tend, astart, aend)
}

/// Average every 10 `f64` samples.
pub fn array_decimate_f64(data: &[f64], has_nulls: bool) -> Result<Vec<f64>, AggError> {
    decimate(SampleBuffer::with_nulls(data, has_nulls), DecimationFactor::Ten)
}

/// Average every 100 `f64` samples.
pub fn array_hundredth_f64(data: &[f64], has_nulls: bool) -> Result<Vec<f64>, AggError> {
    decimate(
        SampleBuffer::with_nulls(data, has_nulls),
        DecimationFactor::Hundred,
    )
}

// ============================================================================
// Single precision
// ============================================================================

/// Sum of the `f32` samples in `[astart, aend]`, accumulated in `f32`.
pub fn array_sum_f32(
    data: &[f32],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<f64, AggError> {
    sum(data, has_nulls, tstart, tend, astart, aend)
}

/// `f32` samples in `[astart, aend]`.
pub fn array_clamp_f32(
    data: &[f32],
    has_nulls: bool,
    tstart: f64,
    tend: f64,
    astart: f64,
    aend: f64,
) -> Result<WindowSlice<'_, f32>, AggError> {
    clamp(data, has_nulls, tstart, tend, astart, aend)
}

/// Average every 10 `f32` samples.
pub fn array_decimate_f32(data: &[f32], has_nulls: bool) -> Result<Vec<f32>, AggError> {
    decimate(SampleBuffer::with_nulls(data, has_nulls), DecimationFactor::Ten)
}

/// Average every 100 `f32` samples.
pub fn array_hundredth_f32(data: &[f32], has_nulls: bool) -> Result<Vec<f32>, AggError> {
    decimate(
        SampleBuffer::with_nulls(data, has_nulls),
        DecimationFactor::Hundred,
    )
}
