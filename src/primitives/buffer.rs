//! Sample buffers and result storage.
//!
//! ## Purpose
//!
//! This module provides the input view handed over by the host
//! (`SampleBuffer`), the tagged output of a window slice (`WindowSlice`), and
//! the allocator every owned result goes through (`allocate`).
//!
//! ## Design notes
//!
//! * **Borrowed input**: A `SampleBuffer` never owns its samples; it pairs a
//!   slice with the host's "has nulls" flag.
//! * **Explicit aliasing**: A slice that covers the whole input is returned as
//!   `WindowSlice::Shared`, a borrow of the input. Every other slice is
//!   `WindowSlice::Owned`. Callers that need isolation call `into_owned`.
//! * **Fallible allocation**: `allocate` reserves through `try_reserve_exact`,
//!   so an oversized request is an error instead of an abort.
//!
//! ## Invariants
//!
//! * `allocate(len)` returns exactly `len` zeros or an error, never a partial
//!   buffer.
//! * A zero-length request is a valid, iterable, empty buffer.
//!
//! ## Non-goals
//!
//! * This module does not model null bitmaps; only the aggregate flag.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;

// Internal dependencies
use crate::primitives::errors::AggError;
use crate::primitives::sample::Sample;

// ============================================================================
// Input View
// ============================================================================

/// Read-only view of host samples together with the host's null flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleBuffer<'a, T> {
    values: &'a [T],
    has_nulls: bool,
}

impl<'a, T> SampleBuffer<'a, T> {
    /// Wrap samples known to contain no nulls.
    #[inline]
    pub fn new(values: &'a [T]) -> Self {
        Self {
            values,
            has_nulls: false,
        }
    }

    /// Wrap samples with an explicit null flag from the host.
    #[inline]
    pub fn with_nulls(values: &'a [T], has_nulls: bool) -> Self {
        Self { values, has_nulls }
    }

    /// Raw samples, regardless of the null flag.
    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Whether the host flagged this buffer as containing nulls.
    #[inline]
    pub fn has_nulls(&self) -> bool {
        self.has_nulls
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples, provided the buffer carries no nulls.
    #[inline]
    pub fn checked(&self) -> Result<&'a [T], AggError> {
        if self.has_nulls {
            return Err(AggError::NullEntries);
        }
        Ok(self.values)
    }
}

impl<'a, T> From<&'a [T]> for SampleBuffer<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::new(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for SampleBuffer<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::new(values.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SampleBuffer<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Self::new(values.as_slice())
    }
}

// ============================================================================
// Slice Output
// ============================================================================

/// Result of slicing a buffer to a query window.
///
/// `Shared` borrows the caller's input unchanged; it is produced only when the
/// window covers every sample. `Owned` is a fresh copy.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSlice<'a, T> {
    /// The input buffer itself, not copied.
    Shared(&'a [T]),

    /// A newly allocated buffer.
    Owned(Vec<T>),
}

impl<'a, T: Clone> WindowSlice<'a, T> {
    /// Whether this result aliases the input buffer.
    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self, WindowSlice::Shared(_))
    }

    /// Borrow the samples.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            WindowSlice::Shared(s) => s,
            WindowSlice::Owned(v) => v.as_slice(),
        }
    }

    /// Convert into an owned buffer, copying only if the result is shared.
    pub fn into_owned(self) -> Vec<T> {
        match self {
            WindowSlice::Shared(s) => s.to_vec(),
            WindowSlice::Owned(v) => v,
        }
    }
}

impl<T: Clone> Deref for WindowSlice<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

// ============================================================================
// Allocation
// ============================================================================

/// Allocate a zero-filled result buffer of `len` samples.
///
/// `len == 0` yields an empty buffer. Failure to reserve the memory is
/// reported as `AggError::AllocationFailed`.
pub fn allocate<T: Sample>(len: usize) -> Result<Vec<T>, AggError> {
    let mut buf = Vec::new();
    if len == 0 {
        return Ok(buf);
    }

    buf.try_reserve_exact(len)
        .map_err(|_| AggError::AllocationFailed { len })?;
    buf.resize(len, T::zero());

    Ok(buf)
}
