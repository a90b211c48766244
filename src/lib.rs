//! # Rollback Math
//!
//! Deterministic fixed-point arithmetic for rollback-capable simulations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ROLLBACK MATH                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.15 fixed-point scalar + sqrt          │
//! │  ├── vec3.rs     - 3D vector with fixed-point                │
//! │  └── hash.rs     - State checksums for desync detection      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Everything in `core/` is **100% deterministic**:
//! - No floating-point arithmetic (display conversions excepted)
//! - Overflow wraps with two's complement semantics
//! - Rounding of multiply and divide is fixed bit for bit
//! - Square root runs a bounded, fixed Newton-Raphson iteration
//!
//! Given identical inputs, every operation produces **identical results**
//! on any platform, compiler or optimization level.
//!
//! ## Example
//!
//! ```
//! use rollback_math::{Fixed, FixedVec3, MathError};
//!
//! let half = (Fixed::from_int(5) / Fixed::from_int(2))?;
//! assert_eq!(half.to_display_f32(), 2.5);
//!
//! let v = FixedVec3::from_ints(1, 2, 3);
//! assert_eq!(v.dot(FixedVec3::from_ints(4, 5, 6)), Fixed::from_int(32));
//!
//! assert_eq!(Fixed::from_int(-1).sqrt(), Err(MathError::NegativeOperand));
//! # Ok::<(), MathError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;

// Re-export commonly used types
pub use crate::core::fixed::{
    fixed_max, fixed_min, Fixed, MathError, FIXED_FRAC_BITS, FIXED_HALF, FIXED_ONE,
    SQRT_MAX_ITERATIONS,
};
pub use crate::core::vec3::FixedVec3;
pub use crate::core::hash::{StateHash, StateHasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
