//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform determinism.
//! They form the foundation for rollback-safe simulation state.

pub mod fixed;
pub mod vec3;
pub mod hash;

// Re-export core types
pub use fixed::{fixed_max, fixed_min, Fixed, MathError, FIXED_HALF, FIXED_ONE};
pub use vec3::FixedVec3;
pub use hash::{StateHash, StateHasher};
