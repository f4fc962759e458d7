//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure arithmetic at the heart of the crate:
//! - Mapping a time window onto a half-open index range of a uniform grid
//!
//! It has no knowledge of buffers, nulls or allocation.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Time-window to index-range mapping.
pub mod index;
