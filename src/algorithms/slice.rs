//! Windowed slicing.
//!
//! ## Purpose
//!
//! This module extracts the samples of a buffer that fall inside a query
//! window.
//!
//! ## Design notes
//!
//! * **Whole-buffer fast path**: When the window selects every sample, the
//!   input is handed back as `WindowSlice::Shared` without copying.
//! * **Copy otherwise**: Partial windows are copied into a buffer obtained from
//!   `allocate`, preserving order.
//!
//! ## Invariants
//!
//! * Output length is `max(iend - istart, 0)`.
//! * An empty window yields an empty owned buffer, not an error.

// Internal dependencies
use crate::math::index::{QueryWindow, TimeGrid, map_window};
use crate::primitives::buffer::{SampleBuffer, WindowSlice, allocate};
use crate::primitives::errors::AggError;
use crate::primitives::sample::Sample;

/// Slice `buffer` to the samples inside `window`.
///
/// The result borrows the input when the window covers the whole buffer; see
/// [`WindowSlice`].
pub fn window_slice<'a, T: Sample>(
    buffer: SampleBuffer<'a, T>,
    grid: TimeGrid,
    window: QueryWindow,
) -> Result<WindowSlice<'a, T>, AggError> {
    let values = buffer.checked()?;
    let n = values.len();
    let range = map_window(n, grid, window);

    if range.covers(n) {
        log::trace!("window covers all {} samples, returning input", n);
        return Ok(WindowSlice::Shared(values));
    }

    let mut out = allocate::<T>(range.len())?;
    out.copy_from_slice(&values[range.bounds()]);

    Ok(WindowSlice::Owned(out))
}
