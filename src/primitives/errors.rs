//! Error types for windowed aggregation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **Hand-written `Display`**: Messages are stable and tested verbatim.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//! * **Comparable**: Errors derive `Clone` and `PartialEq` so callers can match
//!   and assert on them directly.
//!
//! ## Key concepts
//!
//! * **Precondition violations**: A buffer flagged as containing nulls.
//! * **Invalid parameters**: Non-finite window bounds, missing or duplicated
//!   builder parameters.
//! * **Resource errors**: A result buffer that could not be allocated.
//!
//! ## Non-goals
//!
//! * Empty windows and empty arrays are not errors and have no variant here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors produced by window aggregation and decimation.
#[derive(Debug, Clone, PartialEq)]
pub enum AggError {
    /// The sample buffer is flagged as containing null entries.
    NullEntries,

    /// A time bound was NaN or infinite.
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// A required builder parameter was never configured.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// The result buffer could not be allocated.
    AllocationFailed {
        /// Requested element count.
        len: usize,
    },
}

impl fmt::Display for AggError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggError::NullEntries => write!(f, "Array has null entries"),
            AggError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            AggError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            AggError::MissingParameter { parameter } => {
                write!(f, "Parameter '{}' is required but was not set", parameter)
            }
            AggError::AllocationFailed { len } => {
                write!(f, "Failed to allocate result buffer of {} elements", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AggError {}
