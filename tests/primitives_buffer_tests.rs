#![cfg(feature = "dev")]
//! Tests for sample buffers, slice results and allocation.
//!
//! ## Test Organization
//!
//! 1. **SampleBuffer** - Construction, null flag, conversions
//! 2. **WindowSlice** - Shared vs owned behavior
//! 3. **Allocation** - Zero-filled, empty and oversized requests
//! 4. **Sample** - Precision bridge

use approx::assert_relative_eq;

use vectoragg::internals::primitives::buffer::{SampleBuffer, WindowSlice, allocate};
use vectoragg::internals::primitives::errors::AggError;
use vectoragg::internals::primitives::sample::Sample;

// ============================================================================
// SampleBuffer Tests
// ============================================================================

/// Test that a plain buffer passes the null check.
#[test]
fn test_sample_buffer_new_is_checked() {
    let data = [1.0, 2.0, 3.0];
    let buf = SampleBuffer::new(&data[..]);

    assert_eq!(buf.len(), 3);
    assert!(!buf.is_empty());
    assert!(!buf.has_nulls());
    assert_eq!(buf.checked().unwrap(), &[1.0, 2.0, 3.0]);
}

/// Test that a flagged buffer fails the null check but still exposes values.
#[test]
fn test_sample_buffer_with_nulls_rejected() {
    let data = [1.0_f32, 2.0];
    let buf = SampleBuffer::with_nulls(&data[..], true);

    assert!(buf.has_nulls());
    assert_eq!(buf.checked(), Err(AggError::NullEntries));
    assert_eq!(buf.values(), &[1.0, 2.0]);
}

/// Test conversions from slices, vectors and arrays.
#[test]
fn test_sample_buffer_conversions() {
    let vec = vec![1.0, 2.0];
    let arr = [1.0, 2.0];

    let from_vec: SampleBuffer<'_, f64> = (&vec).into();
    let from_arr: SampleBuffer<'_, f64> = (&arr).into();
    let from_slice: SampleBuffer<'_, f64> = vec.as_slice().into();

    assert_eq!(from_vec, from_arr);
    assert_eq!(from_vec, from_slice);
}

/// Test the empty buffer.
#[test]
fn test_sample_buffer_empty() {
    let data: [f64; 0] = [];
    let buf = SampleBuffer::new(&data[..]);
    assert!(buf.is_empty());
    assert_eq!(buf.checked().unwrap().len(), 0);
}

// ============================================================================
// WindowSlice Tests
// ============================================================================

/// Test that a shared slice points at the original memory.
#[test]
fn test_window_slice_shared_aliases_input() {
    let data = vec![1.0, 2.0, 3.0];
    let slice = WindowSlice::Shared(data.as_slice());

    assert!(slice.is_shared());
    assert!(core::ptr::eq(slice.as_slice().as_ptr(), data.as_ptr()));
    assert_eq!(&*slice, &[1.0, 2.0, 3.0]);
}

/// Test that into_owned detaches a shared slice.
#[test]
fn test_window_slice_into_owned_copies() {
    let data = vec![1.0, 2.0, 3.0];
    let owned = WindowSlice::Shared(data.as_slice()).into_owned();

    assert_eq!(owned, data);
    assert!(!core::ptr::eq(owned.as_ptr(), data.as_ptr()));
}

/// Test owned slices.
#[test]
fn test_window_slice_owned() {
    let slice: WindowSlice<'_, f32> = WindowSlice::Owned(vec![4.0, 5.0]);

    assert!(!slice.is_shared());
    assert_eq!(slice.len(), 2);
    assert_eq!(slice.into_owned(), vec![4.0, 5.0]);
}

// ============================================================================
// Allocation Tests
// ============================================================================

/// Test that allocation zero-fills.
#[test]
fn test_allocate_zero_filled() {
    let buf = allocate::<f64>(5).unwrap();
    assert_eq!(buf, vec![0.0; 5]);

    let buf = allocate::<f32>(3).unwrap();
    assert_eq!(buf, vec![0.0_f32; 3]);
}

/// Test that a zero-length request yields a valid empty buffer.
#[test]
fn test_allocate_empty() {
    let buf = allocate::<f64>(0).unwrap();
    assert!(buf.is_empty());
    assert_eq!(buf.iter().count(), 0);
}

/// Test that an impossible request is an error, not an abort.
#[test]
fn test_allocate_overflow_is_error() {
    let len = usize::MAX / 2;
    assert_eq!(
        allocate::<f64>(len),
        Err(AggError::AllocationFailed { len })
    );
}

// ============================================================================
// Sample Tests
// ============================================================================

/// Test widening to f64.
#[test]
fn test_sample_widen() {
    assert_eq!(1.5_f32.widen(), 1.5_f64);
    assert_eq!(0.1_f32.widen(), f64::from(0.1_f32));
    assert_eq!(2.25_f64.widen(), 2.25);
}

/// Test block sums for even, odd and empty blocks.
#[test]
fn test_sample_block_sum() {
    assert_relative_eq!(f64::block_sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    assert_relative_eq!(f64::block_sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
    assert_relative_eq!(f64::block_sum(&[7.0]), 7.0);
    assert_eq!(f64::block_sum(&[]), 0.0);

    assert_relative_eq!(f32::block_sum(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(f32::block_sum(&[]), 0.0);
}

/// Test count conversion.
#[test]
fn test_sample_from_count() {
    assert_eq!(f64::from_count(10), 10.0);
    assert_eq!(f32::from_count(100), 100.0);
}
