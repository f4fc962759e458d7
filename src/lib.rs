//! # vectoragg — Windowed Aggregation over Uniformly-Sampled Arrays
//!
//! Sum, slice and downsample flat numeric arrays that represent evenly spaced
//! observations of a time series.
//!
//! ## What does it do?
//!
//! A buffer of `n` samples is understood to cover the closed time interval
//! `[tstart, tend]`, one sample every `tstep = (tend - tstart) / (n - 1)`.
//! Given any query interval `[astart, aend]`, the crate:
//!
//! - **sums** the samples inside the query,
//! - **slices** the buffer down to the samples inside the query,
//! - **decimates** the whole buffer by averaging blocks of 10 or 100 samples.
//!
//! Both `f32` and `f64` buffers are supported with identical semantics.
//!
//! **How a window maps to samples:**
//!
//! ```text
//!  t:      0    1    2    3    4    5    6    7    8    9
//!  i:      0    1    2    3    4    5    6    7    8    9
//!                    ^                   ^
//!                 astart=2            aend=6
//!
//!  [istart, iend) = [2, 6)   →   samples 2, 3, 4, 5
//! ```
//!
//! Fractional positions are truncated toward zero, so the mapping is exact and
//! reproducible. Windows that start before the grid map to `0`, windows that
//! end after it map to `n`.
//!
//! ## Quick Start
//!
//! ### Windowed sum and slice
//!
//! ```rust
//! use vectoragg::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let query = Window::new()
//!     .grid(0.0, 9.0)     // samples cover t = 0 ..= 9
//!     .query(2.0, 6.0)    // aggregate over t = 2 ..= 6
//!     .build()?;
//!
//! assert_eq!(query.sum(&data)?, 18.0);
//! assert_eq!(&*query.slice(&data)?, &[3.0, 4.0, 5.0, 6.0]);
//! # Result::<(), AggError>::Ok(())
//! ```
//!
//! ### Decimation
//!
//! ```rust
//! use vectoragg::prelude::*;
//!
//! let data: Vec<f64> = (1..=25).map(f64::from).collect();
//!
//! let means = downsample(&data, DecimationFactor::Ten)?;
//! assert_eq!(means.len(), 3);
//! assert!((means[2] - 23.0).abs() < 1e-12); // mean of 21..=25
//! # Result::<(), AggError>::Ok(())
//! ```
//!
//! ### Host-shaped functions
//!
//! Databases hand over a flat array, a "has nulls" flag and scalar bounds. One
//! function exists per precision and operation:
//!
//! ```rust
//! use vectoragg::prelude::*;
//!
//! let data = [1.0_f32, 2.0, 3.0, 4.0];
//!
//! let total = array_sum_f32(&data, false, 0.0, 3.0, -1.0, 10.0)?;
//! assert_eq!(total, 10.0);
//!
//! assert_eq!(
//!     array_sum_f32(&data, true, 0.0, 3.0, -1.0, 10.0),
//!     Err(AggError::NullEntries)
//! );
//! # Result::<(), AggError>::Ok(())
//! ```
//!
//! ## Ownership of slices
//!
//! A slice whose window covers every sample is not copied. It is returned as
//! [`WindowSlice::Shared`](prelude::WindowSlice::Shared), a borrow of the input.
//! Every other slice is [`WindowSlice::Owned`](prelude::WindowSlice::Owned).
//! Call `into_owned()` when an independent buffer is required.
//!
//! ## Edge cases
//!
//! | Situation                      | Result                              |
//! |--------------------------------|-------------------------------------|
//! | `aend <= tstart`               | sum `0.0`, empty slice              |
//! | `astart > aend`                | sum `0.0`, empty slice              |
//! | `n == 0`                       | sum `0.0`, empty slice / decimation |
//! | `n == 1`                       | sample selected when `astart <= tend < aend` |
//! | buffer flagged with nulls      | `AggError::NullEntries`             |
//! | NaN bound, infinite grid bound | `AggError::InvalidNumericValue`     |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! vectoragg = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate emits `trace` and `debug` records through the [`log`] facade. No
//! logger is installed; records are discarded unless the application sets one.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, sample precision, buffers.
mod primitives;

// Layer 2: Math - window to index-range mapping.
mod math;

// Layer 3: Algorithms - sum, slice, decimate.
mod algorithms;

// Layer 4: Engine - parameter validation.
mod engine;

// Layer 5: Adapters - host-shaped entry points per precision.
mod adapters;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use vectoragg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapters::host::{
        array_clamp_f32, array_clamp_f64, array_decimate_f32, array_decimate_f64,
        array_hundredth_f32, array_hundredth_f64, array_sum_f32, array_sum_f64,
    };
    pub use crate::api::{
        AggError, DecimationFactor, IndexRange, QueryWindow, Sample, SampleBuffer, TimeGrid,
        WindowBuilder as Window, WindowQuery, WindowSlice, downsample, index_range,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
