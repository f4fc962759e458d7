//! Time-window to index-range mapping.
//!
//! ## Purpose
//!
//! This module maps an arbitrary query window `[astart, aend]` onto a
//! half-open index range `[istart, iend)` of a buffer whose `n` samples evenly
//! cover `[tstart, tend]`.
//!
//! ## Design notes
//!
//! * **Step**: `tstep = (tend - tstart) / (n - 1)`, derived per call.
//! * **Truncation**: Fractional positions are truncated toward zero, never
//!   rounded. A window edge falling between samples `k` and `k + 1` maps to
//!   `k`, so `istart` includes sample `k` and `iend` excludes it.
//! * **Saturation**: Edges at or beyond the grid bounds short-circuit to `0` or
//!   `n` without any division.
//!
//! ## Key concepts
//!
//! ```text
//! istart = 0                        if astart <= tstart
//!        = n                        if astart >  tend
//!        = trunc((astart - tstart) / tstep)   otherwise
//!
//! iend   = n                        if aend >  tend
//!        = 0                        if aend <= tstart
//!        = trunc((aend - tstart) / tstep)     otherwise
//! ```
//!
//! ## Invariants
//!
//! * `0 <= istart <= n` and `0 <= iend <= n`.
//! * `istart > iend` is allowed and denotes an empty range.
//! * `n == 0` maps every window to `[0, 0)`.
//! * `n == 1` never divides: the step is treated as unbounded, so interior
//!   positions truncate to `0`. The lone sample is selected exactly when
//!   `astart <= tend` and `aend > tend`.
//!
//! ## Non-goals
//!
//! * This module does not validate that bounds are finite (see `Validator`).
//! * This module does not support non-uniform grids.

use core::ops::Range;

// ============================================================================
// Grid and Window
// ============================================================================

/// Closed time interval `[tstart, tend]` spanned by a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    /// Time of the first sample.
    pub tstart: f64,
    /// Time of the last sample.
    pub tend: f64,
}

impl TimeGrid {
    /// Create a grid spanning `[tstart, tend]`.
    #[inline]
    pub fn new(tstart: f64, tend: f64) -> Self {
        Self { tstart, tend }
    }

    /// Spacing between consecutive samples for a buffer of `n` samples.
    ///
    /// Returns `None` when `n < 2`, where no step is defined.
    #[inline]
    pub fn step(&self, n: usize) -> Option<f64> {
        if n < 2 {
            return None;
        }
        Some((self.tend - self.tstart) / (n - 1) as f64)
    }
}

/// Query interval `[astart, aend]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryWindow {
    /// Start of the query.
    pub astart: f64,
    /// End of the query.
    pub aend: f64,
}

impl QueryWindow {
    /// Create a query window `[astart, aend]`.
    #[inline]
    pub fn new(astart: f64, aend: f64) -> Self {
        Self { astart, aend }
    }
}

// ============================================================================
// Index Range
// ============================================================================

/// Half-open index range `[start, end)`. `start > end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// First included index (`istart`).
    pub start: usize,
    /// First excluded index (`iend`).
    pub end: usize,
}

impl IndexRange {
    /// Create a range without any ordering check.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the range selects no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of selected samples, `max(end - start, 0)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range selects every sample of a buffer of length `n`.
    #[inline]
    pub fn covers(&self, n: usize) -> bool {
        self.start == 0 && self.end == n
    }

    /// Range usable for slice indexing; empty ranges collapse to `start..start`.
    #[inline]
    pub fn bounds(&self) -> Range<usize> {
        self.start..self.start.max(self.end)
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// Map a query window onto the index range of an `n`-sample grid.
pub fn map_window(n: usize, grid: TimeGrid, window: QueryWindow) -> IndexRange {
    let TimeGrid { tstart, tend } = grid;
    let QueryWindow { astart, aend } = window;

    let start = if astart <= tstart {
        0
    } else if astart > tend {
        n
    } else {
        grid_position(n, grid, astart)
    };

    let end = if aend > tend {
        n
    } else if aend <= tstart {
        0
    } else {
        grid_position(n, grid, aend)
    };

    let range = IndexRange::new(start, end);
    log::trace!(
        "mapped window [{}, {}] on [{}, {}] (n={}) to {:?}",
        astart,
        aend,
        tstart,
        tend,
        n,
        range
    );
    range
}

/// Map a window given as raw scalars, mirroring the host calling convention.
#[inline]
pub fn index_range(n: usize, tstart: f64, tend: f64, astart: f64, aend: f64) -> IndexRange {
    map_window(n, TimeGrid::new(tstart, tend), QueryWindow::new(astart, aend))
}

/// Truncated grid position of an interior time `t`, clamped to `[0, n]`.
#[inline]
fn grid_position(n: usize, grid: TimeGrid, t: f64) -> usize {
    let Some(tstep) = grid.step(n) else {
        return 0;
    };

    // `as` truncates toward zero
    let pos = (t - grid.tstart) / tstep;
    if pos >= n as f64 {
        n
    } else if pos > 0.0 {
        pos as usize
    } else {
        // Zero, or NaN from non-finite bounds
        0
    }
}
