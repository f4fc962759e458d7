//! Input validation for window configuration.
//!
//! ## Purpose
//!
//! This module checks the scalar parameters of a windowed call and the
//! bookkeeping of the fluent builder before any sample is touched.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Scalars only**: Sample values are never scanned; the host's null flag is
//!   checked by `SampleBuffer::checked`.
//!
//! ## Key concepts
//!
//! * **Grid bounds**: `tstart` and `tend` must be finite, otherwise the step is
//!   undefined.
//! * **Query bounds**: `astart` and `aend` must not be NaN. Infinities are
//!   allowed and mean "unbounded on this side".
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reorder or repair inverted windows; `astart > aend`
//!   is a valid, empty query.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::math::index::{QueryWindow, TimeGrid};
use crate::primitives::errors::AggError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for window parameters and builder state.
pub struct Validator;

impl Validator {
    /// Validate a value that must be finite.
    pub fn validate_finite(val: f64, name: &str) -> Result<(), AggError> {
        if !val.is_finite() {
            return Err(AggError::InvalidNumericValue(format!("{}={}", name, val)));
        }
        Ok(())
    }

    /// Validate a value that may be infinite but not NaN.
    pub fn validate_not_nan(val: f64, name: &str) -> Result<(), AggError> {
        if val.is_nan() {
            return Err(AggError::InvalidNumericValue(format!("{}={}", name, val)));
        }
        Ok(())
    }

    /// Validate the time grid bounds.
    pub fn validate_grid(grid: &TimeGrid) -> Result<(), AggError> {
        Self::validate_finite(grid.tstart, "tstart")?;
        Self::validate_finite(grid.tend, "tend")
    }

    /// Validate the query window bounds.
    pub fn validate_window(window: &QueryWindow) -> Result<(), AggError> {
        Self::validate_not_nan(window.astart, "astart")?;
        Self::validate_not_nan(window.aend, "aend")
    }

    /// Validate that a required builder parameter was provided.
    pub fn validate_required<V>(value: Option<V>, parameter: &'static str) -> Result<V, AggError> {
        value.ok_or(AggError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), AggError> {
        if let Some(param) = duplicate_param {
            return Err(AggError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
