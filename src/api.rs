//! High-level API for windowed aggregation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. A fluent builder
//! collects the time grid and the query window, validates them once, and
//! yields a reusable [`WindowQuery`] that can be applied to any number of
//! buffers of either precision.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Two setters and `build()`.
//! * **Validated**: Bounds are checked when `.build()` is called, so a
//!   `WindowQuery` is always applicable.
//! * **Type-Safe**: Operations are generic over `Sample` (`f32` or `f64`).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WindowBuilder`] via `Window::new()`.
//! 2. Set `.grid(tstart, tend)` and `.query(astart, aend)`.
//! 3. Call `.build()` and apply the query with `.sum()` or `.slice()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::decimate::decimate;
use crate::algorithms::slice::window_slice;
use crate::algorithms::sum::window_sum;
use crate::engine::validator::Validator;
use crate::math::index::map_window;

// Publicly re-exported types
pub use crate::algorithms::decimate::DecimationFactor;
pub use crate::math::index::{IndexRange, QueryWindow, TimeGrid, index_range};
pub use crate::primitives::buffer::{SampleBuffer, WindowSlice};
pub use crate::primitives::errors::AggError;
pub use crate::primitives::sample::Sample;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a windowed query.
#[derive(Debug, Clone, Default)]
pub struct WindowBuilder {
    /// Time span of the sample buffers.
    pub grid: Option<TimeGrid>,

    /// Interval to aggregate over.
    pub query: Option<QueryWindow>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl WindowBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time span `[tstart, tend]` covered by the samples.
    pub fn grid(mut self, tstart: f64, tend: f64) -> Self {
        if self.grid.is_some() {
            self.duplicate_param = Some("grid");
        }
        self.grid = Some(TimeGrid::new(tstart, tend));
        self
    }

    /// Set the query interval `[astart, aend]`.
    pub fn query(mut self, astart: f64, aend: f64) -> Self {
        if self.query.is_some() {
            self.duplicate_param = Some("query");
        }
        self.query = Some(QueryWindow::new(astart, aend));
        self
    }

    /// Validate the configuration and produce a [`WindowQuery`].
    pub fn build(self) -> Result<WindowQuery, AggError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let grid = Validator::validate_required(self.grid, "grid")?;
        let query = Validator::validate_required(self.query, "query")?;
        Validator::validate_grid(&grid)?;
        Validator::validate_window(&query)?;

        Ok(WindowQuery { grid, query })
    }
}

// ============================================================================
// Validated Query
// ============================================================================

/// A validated grid/window pair, applicable to any sample buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowQuery {
    grid: TimeGrid,
    query: QueryWindow,
}

impl WindowQuery {
    /// Time grid of this query.
    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    /// Query window of this query.
    pub fn window(&self) -> QueryWindow {
        self.query
    }

    /// Index range selected in a buffer of `n` samples.
    pub fn range(&self, n: usize) -> IndexRange {
        map_window(n, self.grid, self.query)
    }

    /// Sum of the samples inside the window, widened to `f64`.
    pub fn sum<'a, T: Sample>(
        &self,
        buffer: impl Into<SampleBuffer<'a, T>>,
    ) -> Result<f64, AggError> {
        window_sum(buffer.into(), self.grid, self.query)
    }

    /// Samples inside the window.
    ///
    /// A window covering every sample returns the input itself as
    /// [`WindowSlice::Shared`].
    pub fn slice<'a, T: Sample>(
        &self,
        buffer: impl Into<SampleBuffer<'a, T>>,
    ) -> Result<WindowSlice<'a, T>, AggError> {
        window_slice(buffer.into(), self.grid, self.query)
    }
}

// ============================================================================
// Decimation
// ============================================================================

/// Downsample `buffer` by block-averaging with `factor`.
pub fn downsample<'a, T: Sample>(
    buffer: impl Into<SampleBuffer<'a, T>>,
    factor: DecimationFactor,
) -> Result<Vec<T>, AggError> {
    decimate(buffer.into(), factor)
}
