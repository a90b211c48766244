//! Fixed-Point 3D Vector
//!
//! Deterministic 3D vector operations for simulation code.
//! Every operation decomposes into [`Fixed`] operations component by
//! component, so rounding, wraparound and division errors are inherited
//! from the scalar unchanged.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::fixed::{Fixed, MathError};

/// 3D vector with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec3 {
    /// X component (Q16.15 fixed-point)
    pub x: Fixed,
    /// Y component (Q16.15 fixed-point)
    pub y: Fixed,
    /// Z component (Q16.15 fixed-point)
    pub z: Fixed,
}

impl FixedVec3 {
    /// Zero vector
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
        z: Fixed::ZERO,
    };

    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from integer components.
    #[inline]
    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: Fixed::from_int(x),
            y: Fixed::from_int(y),
            z: Fixed::from_int(z),
        }
    }

    /// Dot product with another vector.
    ///
    /// Accumulates x, then y, then z. The order fixes how rounding
    /// accumulates and must not change.
    #[inline]
    pub fn dot(self, other: Self) -> Fixed {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Component-wise division. Fails if any divisor component is zero.
    #[inline]
    pub fn try_div(self, other: Self) -> Result<Self, MathError> {
        Ok(Self {
            x: self.x.try_div(other.x)?,
            y: self.y.try_div(other.y)?,
            z: self.z.try_div(other.z)?,
        })
    }

    /// Divide every component by a scalar.
    #[inline]
    pub fn try_div_scalar(self, scalar: Fixed) -> Result<Self, MathError> {
        Ok(Self {
            x: self.x.try_div(scalar)?,
            y: self.y.try_div(scalar)?,
            z: self.z.try_div(scalar)?,
        })
    }

    /// In-place component-wise division. On error `self` is left untouched.
    #[inline]
    pub fn try_div_assign(&mut self, other: Self) -> Result<(), MathError> {
        *self = self.try_div(other)?;
        Ok(())
    }

    /// In-place division by a scalar. On error `self` is left untouched.
    #[inline]
    pub fn try_div_assign_scalar(&mut self, scalar: Fixed) -> Result<(), MathError> {
        *self = self.try_div_scalar(scalar)?;
        Ok(())
    }

    /// Convert to float tuple for rendering.
    ///
    /// # Warning
    /// Presentation only. Never feed the result back into simulation logic.
    #[inline]
    pub fn to_display_floats(self) -> (f32, f32, f32) {
        (
            self.x.to_display_f32(),
            self.y.to_display_f32(),
            self.z.to_display_f32(),
        )
    }
}

// Operator overloads for ergonomics
impl Add for FixedVec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<Fixed> for FixedVec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Fixed) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub for FixedVec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<Fixed> for FixedVec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Fixed) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul for FixedVec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<Fixed> for FixedVec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div for FixedVec3 {
    type Output = Result<Self, MathError>;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
    }
}

impl Div<Fixed> for FixedVec3 {
    type Output = Result<Self, MathError>;
    #[inline]
    fn div(self, rhs: Fixed) -> Self::Output {
        self.try_div_scalar(rhs)
    }
}

impl AddAssign for FixedVec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<Fixed> for FixedVec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedVec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<Fixed> for FixedVec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedVec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<Fixed> for FixedVec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed) {
        *self = *self * rhs;
    }
}

impl fmt::Debug for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy, fz) = self.to_display_floats();
        write!(
            f,
            "Vec3({:.3}, {:.3}, {:.3}; raw={}, {}, {})",
            fx,
            fy,
            fz,
            self.x.raw(),
            self.y.raw(),
            self.z.raw()
        )
    }
}

impl fmt::Display for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy, fz) = self.to_display_floats();
        write!(f, "({:.3}, {:.3}, {:.3})", fx, fy, fz)
    }
}

// =============================================================================
// TESTS
// =============================================================================
