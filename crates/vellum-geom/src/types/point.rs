// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 2D points with component-wise arithmetic.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::compat::PointCompat;
use crate::scalar::Scalar;

/// A 2D point (or vector) with `x` and `y` components.
///
/// Plain value type: `Copy`, `#[repr(C)]`, no padding for any scalar.
/// Equality follows the scalar policy (epsilon-tolerant for floats).
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

// SAFETY: `#[repr(C)]` with two fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Point<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Point<T> {}

impl<T: Scalar> Point<T> {
    /// Creates a point from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Converts a foreign point-compatible value, casting scalars as needed.
    #[inline]
    #[must_use]
    pub fn from_compat<P: PointCompat>(p: P) -> Self {
        p.to_point().cast()
    }

    /// Converts into a foreign point-compatible type, casting scalars as
    /// needed.
    #[inline]
    #[must_use]
    pub fn to_compat<P: PointCompat>(self) -> P {
        P::from_point(self.cast())
    }

    /// Casts both components to another scalar type with native `as`
    /// semantics (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Point<U> {
        Point::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }

    /// Sets the x component.
    #[inline]
    pub fn set_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets the y component.
    #[inline]
    pub fn set_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
    }

    /// Adds `dx` to the x component.
    #[inline]
    pub fn add_x(&mut self, dx: T) -> &mut Self {
        self.x = self.x + dx;
        self
    }

    /// Adds `dy` to the y component.
    #[inline]
    pub fn add_y(&mut self, dy: T) -> &mut Self {
        self.y = self.y + dy;
        self
    }

    /// Returns a copy with the given x component.
    #[inline]
    #[must_use]
    pub fn with_x(self, x: T) -> Self {
        Self::new(x, self.y)
    }

    /// Returns a copy with the given y component.
    #[inline]
    #[must_use]
    pub fn with_y(self, y: T) -> Self {
        Self::new(self.x, y)
    }

    /// Returns a copy with `dx` added to x.
    #[inline]
    #[must_use]
    pub fn with_add_x(self, dx: T) -> Self {
        Self::new(self.x + dx, self.y)
    }

    /// Returns a copy with `dy` added to y.
    #[inline]
    #[must_use]
    pub fn with_add_y(self, dy: T) -> Self {
        Self::new(self.x, self.y + dy)
    }

    /// `true` if both components are strictly less than `other`'s.
    #[inline]
    #[must_use]
    pub fn less_than(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// `true` if both components are less than or equal to `other`'s.
    #[inline]
    #[must_use]
    pub fn less_or_equal(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// `true` if both components are strictly greater than `other`'s.
    #[inline]
    #[must_use]
    pub fn greater_than(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// `true` if both components are greater than or equal to `other`'s.
    #[inline]
    #[must_use]
    pub fn greater_or_equal(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

impl<T: Scalar> Neg for Point<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, v: T) -> Self {
        Self::new(self.x + v, self.y + v)
    }
}

impl<T: Scalar> Sub<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, v: T) -> Self {
        Self::new(self.x - v, self.y - v)
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn mul(self, v: T) -> Self {
        Self::new(self.x * v, self.y * v)
    }
}

impl<T: Scalar> Div<T> for Point<T> {
    type Output = Self;
    #[inline]
    fn div(self, v: T) -> Self {
        Self::new(self.x / v, self.y / v)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, p: Self) -> Self {
        Self::new(self.x + p.x, self.y + p.y)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, p: Self) -> Self {
        Self::new(self.x - p.x, self.y - p.y)
    }
}

impl<T: Scalar> Mul for Point<T> {
    type Output = Self;
    #[inline]
    fn mul(self, p: Self) -> Self {
        Self::new(self.x * p.x, self.y * p.y)
    }
}

impl<T: Scalar> Div for Point<T> {
    type Output = Self;
    #[inline]
    fn div(self, p: Self) -> Self {
        Self::new(self.x / p.x, self.y / p.y)
    }
}

impl<T: Scalar> AddAssign<T> for Point<T> {
    #[inline]
    fn add_assign(&mut self, v: T) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign<T> for Point<T> {
    #[inline]
    fn sub_assign(&mut self, v: T) {
        *self = *self - v;
    }
}

impl<T: Scalar> MulAssign<T> for Point<T> {
    #[inline]
    fn mul_assign(&mut self, v: T) {
        *self = *self * v;
    }
}

impl<T: Scalar> DivAssign<T> for Point<T> {
    #[inline]
    fn div_assign(&mut self, v: T) {
        *self = *self / v;
    }
}

impl<T: Scalar> AddAssign for Point<T> {
    #[inline]
    fn add_assign(&mut self, p: Self) {
        *self = *self + p;
    }
}

impl<T: Scalar> SubAssign for Point<T> {
    #[inline]
    fn sub_assign(&mut self, p: Self) {
        *self = *self - p;
    }
}

impl<T: Scalar> MulAssign for Point<T> {
    #[inline]
    fn mul_assign(&mut self, p: Self) {
        *self = *self * p;
    }
}

impl<T: Scalar> DivAssign for Point<T> {
    #[inline]
    fn div_assign(&mut self, p: Self) {
        *self = *self / p;
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}
