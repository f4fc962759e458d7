//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the three operations over a sample buffer:
//! - Windowed sum
//! - Windowed slice
//! - Block-average decimation
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Windowed summation.
pub mod sum;

/// Windowed slicing.
pub mod slice;

/// Block-average decimation.
pub mod decimate;
