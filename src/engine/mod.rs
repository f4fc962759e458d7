//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer guards the algorithms: every scalar parameter and every piece of
//! builder state is validated here before an operation runs.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;
