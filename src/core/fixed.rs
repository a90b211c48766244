//! Q16.15 Fixed-Point Arithmetic
//!
//! This module provides the deterministic scalar used by every simulation step.
//! All operations use integer arithmetic only - no floats in simulation logic.
//!
//! ## Format: Q16.15
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.15 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFF]                     │
//! │   │  └──── 16 bits ────┘└─── 15 bits ───┘                   │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -65536.0 to +65535.99997 (approx)                   │
//! │  Precision: 1/32768 ≈ 0.00003 units                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//!
//! - Multiply: widen to i64, add `FIXED_HALF` (0.5 ulp), divide by
//!   `FIXED_ONE` truncating toward zero, narrow to i32.
//! - Divide: widen to i64, scale the dividend by `FIXED_ONE` first, then
//!   bias by half the divisor's magnitude in the divisor's direction and
//!   divide truncating toward zero.
//!
//! Both rules are part of the determinism contract. They are not symmetric
//! for negative operands (`-3 * 2` lands one ulp above `-6`), and peers
//! depend on reproducing that bit for bit.
//!
//! Overflow wraps (two's complement) everywhere. Only division by zero and
//! the square root of a negative number are errors.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
#[cfg(feature = "debug-tracing")]
use tracing::trace;

/// Number of fractional bits (15)
pub const FIXED_FRAC_BITS: u32 = 15;

/// 1.0 in fixed-point (32768). This is the scale factor.
pub const FIXED_ONE: i32 = 1 << FIXED_FRAC_BITS; // 32768

/// 0.5 in fixed-point (16384)
pub const FIXED_HALF: i32 = FIXED_ONE >> 1; // 16384

/// Upper bound on Newton-Raphson steps taken by [`Fixed::sqrt`].
pub const SQRT_MAX_ITERATIONS: u32 = 10;

/// Errors raised by fixed-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Divisor's raw representation was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Square root requested on a negative value.
    #[error("square root of negative operand")]
    NegativeOperand,
}

/// Signed Q16.15 fixed-point number stored as i32.
///
/// Equality and ordering compare the raw integer, so two values are equal
/// iff their bit patterns are identical.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero constant
    pub const ZERO: Self = Self(0);

    /// One constant
    pub const ONE: Self = Self(FIXED_ONE);

    /// One half constant
    pub const HALF: Self = Self(FIXED_HALF);

    /// Two constant (divisor for Newton halving)
    pub const TWO: Self = Self(FIXED_ONE * 2);

    /// Largest representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Smallest representable value
    pub const MIN: Self = Self(i32::MIN);

    /// Create from a whole number, scaling it by `FIXED_ONE`.
    ///
    /// Wraps if `value` is outside the representable integer range.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value.wrapping_mul(FIXED_ONE))
    }

    /// Create from an already-scaled raw value. No scaling is applied.
    ///
    /// This is the only way to build a `Fixed` from a pre-scaled integer;
    /// passing a whole number here yields `value / 32768`.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get raw fixed-point value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Convert to float for display.
    ///
    /// # Warning
    /// Presentation only. The result is not part of the determinism
    /// contract and must never be fed back into simulation logic.
    #[inline]
    pub fn to_display_f32(self) -> f32 {
        self.0 as f32 / FIXED_ONE as f32
    }

    /// Absolute value. Wraps for `Fixed::MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        if self.0 < 0 {
            Self(self.0.wrapping_neg())
        } else {
            self
        }
    }

    /// Clamp to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        fixed_max(lo, fixed_min(hi, self))
    }

    /// Divide by another fixed-point number.
    ///
    /// Scales the dividend by `FIXED_ONE` in i64 before dividing, then rounds
    /// half away from the divisor's sign. Fails on a zero divisor.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, MathError> {
        if rhs.0 == 0 {
            return Err(MathError::DivisionByZero);
        }
        let divisor = rhs.0 as i64;
        let wide = (self.0 as i64) * (FIXED_ONE as i64);
        let adjust = divisor.abs() / 2;
        let biased = if divisor > 0 { wide + adjust } else { wide - adjust };
        Ok(Self((biased / divisor) as i32))
    }

    /// In-place division. On error `self` is left untouched.
    #[inline]
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), MathError> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    /// Square root using Newton-Raphson iteration.
    ///
    /// Starts from `max(self, 1.0)` so the iteration always descends toward
    /// the root, and stops as soon as a step reproduces the previous value
    /// exactly. At most [`SQRT_MAX_ITERATIONS`] steps are taken; if the cap
    /// is reached the last estimate is returned.
    ///
    /// # Errors
    /// `NegativeOperand` for negative input.
    pub fn sqrt(self) -> Result<Self, MathError> {
        if self.0 < 0 {
            return Err(MathError::NegativeOperand);
        }
        if self.0 == 0 {
            return Ok(Self::ZERO);
        }

        let mut x = if self.0 >= FIXED_ONE { self } else { Self::ONE };

        for _step in 0..SQRT_MAX_ITERATIONS {
            let next = (x + self.try_div(x)?).try_div(Self::TWO)?;

            #[cfg(feature = "debug-tracing")]
            trace!(step = _step, estimate = next.0, "sqrt newton step");

            if next == x {
                return Ok(x);
            }
            x = next;
        }

        debug!(
            input = self.0,
            estimate = x.0,
            "sqrt reached iteration cap without converging"
        );
        Ok(x)
    }
}

/// Minimum of two fixed-point numbers.
#[inline]
pub fn fixed_min(a: Fixed, b: Fixed) -> Fixed {
    if a < b { a } else { b }
}

/// Maximum of two fixed-point numbers.
#[inline]
pub fn fixed_max(a: Fixed, b: Fixed) -> Fixed {
    if a > b { a } else { b }
}

impl From<i32> for Fixed {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl Add for Fixed {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fixed {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64) * (rhs.0 as i64);
        Self(((wide + FIXED_HALF as i64) / FIXED_ONE as i64) as i32)
    }
}

/// Division is fallible, so the operator yields a `Result`: `(a / b)?`.
impl Div for Fixed {
    type Output = Result<Self, MathError>;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({:.5}, raw={})", self.to_display_f32(), self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_display_f32())
    }
}

// =============================================================================
// TESTS
// =============================================================================
