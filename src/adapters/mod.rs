//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer exposes the operations in the shape a database host calls them:
//! one function per precision and operation, taking a flat slice, a null flag
//! and plain `f64` scalars.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Host-shaped entry points.
pub mod host;
