// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 2D sizes with component-wise arithmetic.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::compat::SizeCompat;
use crate::scalar::Scalar;

/// A 2D extent with `width` and `height` components.
///
/// Negative sizes are representable and never normalized away; algorithms
/// that care (e.g. [`crate::Rect::area`]) document their behavior instead.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

// SAFETY: `#[repr(C)]` with two fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Size<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Size<T> {}

impl<T: Scalar> Size<T> {
    /// Creates a size from its components.
    #[inline]
    #[must_use]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// The zero size.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The largest representable size for this scalar.
    #[inline]
    #[must_use]
    pub fn full_scale() -> Self {
        Self::new(T::max_value(), T::max_value())
    }

    /// Converts a foreign size-compatible value, casting scalars as needed.
    #[inline]
    #[must_use]
    pub fn from_compat<S: SizeCompat>(s: S) -> Self {
        s.to_size().cast()
    }

    /// Converts into a foreign size-compatible type, casting scalars as
    /// needed.
    #[inline]
    #[must_use]
    pub fn to_compat<S: SizeCompat>(self) -> S {
        S::from_size(self.cast())
    }

    /// Casts both components to another scalar type with native `as`
    /// semantics (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Size<U> {
        Size::new(
            U::from_f64(self.width.to_f64()),
            U::from_f64(self.height.to_f64()),
        )
    }

    /// Sets the width.
    #[inline]
    pub fn set_width(&mut self, w: T) -> &mut Self {
        self.width = w;
        self
    }

    /// Sets the height.
    #[inline]
    pub fn set_height(&mut self, h: T) -> &mut Self {
        self.height = h;
        self
    }

    /// Adds `dw` to the width.
    #[inline]
    pub fn add_width(&mut self, dw: T) -> &mut Self {
        self.width = self.width + dw;
        self
    }

    /// Adds `dh` to the height.
    #[inline]
    pub fn add_height(&mut self, dh: T) -> &mut Self {
        self.height = self.height + dh;
        self
    }

    /// Returns a copy with the given width.
    #[inline]
    #[must_use]
    pub fn with_width(self, w: T) -> Self {
        Self::new(w, self.height)
    }

    /// Returns a copy with the given height.
    #[inline]
    #[must_use]
    pub fn with_height(self, h: T) -> Self {
        Self::new(self.width, h)
    }

    /// Returns a copy with `dw` added to the width.
    #[inline]
    #[must_use]
    pub fn with_add_width(self, dw: T) -> Self {
        Self::new(self.width + dw, self.height)
    }

    /// Returns a copy with `dh` added to the height.
    #[inline]
    #[must_use]
    pub fn with_add_height(self, dh: T) -> Self {
        Self::new(self.width, self.height + dh)
    }

    /// `true` if both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == T::zero() && self.height == T::zero()
    }

    /// `true` if both components are strictly less than `other`'s.
    #[inline]
    #[must_use]
    pub fn less_than(self, other: Self) -> bool {
        self.width < other.width && self.height < other.height
    }

    /// `true` if both components are less than or equal to `other`'s.
    #[inline]
    #[must_use]
    pub fn less_or_equal(self, other: Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// `true` if both components are strictly greater than `other`'s.
    #[inline]
    #[must_use]
    pub fn greater_than(self, other: Self) -> bool {
        self.width > other.width && self.height > other.height
    }

    /// `true` if both components are greater than or equal to `other`'s.
    #[inline]
    #[must_use]
    pub fn greater_or_equal(self, other: Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl<T: Scalar> PartialEq for Size<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.width.approx_eq(other.width) && self.height.approx_eq(other.height)
    }
}

impl<T: Scalar> Neg for Size<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.width, -self.height)
    }
}

impl<T: Scalar> Add<T> for Size<T> {
    type Output = Self;
    #[inline]
    fn add(self, v: T) -> Self {
        Self::new(self.width + v, self.height + v)
    }
}

impl<T: Scalar> Sub<T> for Size<T> {
    type Output = Self;
    #[inline]
    fn sub(self, v: T) -> Self {
        Self::new(self.width - v, self.height - v)
    }
}

impl<T: Scalar> Mul<T> for Size<T> {
    type Output = Self;
    #[inline]
    fn mul(self, v: T) -> Self {
        Self::new(self.width * v, self.height * v)
    }
}

impl<T: Scalar> Div<T> for Size<T> {
    type Output = Self;
    #[inline]
    fn div(self, v: T) -> Self {
        Self::new(self.width / v, self.height / v)
    }
}

impl<T: Scalar> Add for Size<T> {
    type Output = Self;
    #[inline]
    fn add(self, s: Self) -> Self {
        Self::new(self.width + s.width, self.height + s.height)
    }
}

impl<T: Scalar> Sub for Size<T> {
    type Output = Self;
    #[inline]
    fn sub(self, s: Self) -> Self {
        Self::new(self.width - s.width, self.height - s.height)
    }
}

impl<T: Scalar> Mul for Size<T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: Self) -> Self {
        Self::new(self.width * s.width, self.height * s.height)
    }
}

impl<T: Scalar> Div for Size<T> {
    type Output = Self;
    #[inline]
    fn div(self, s: Self) -> Self {
        Self::new(self.width / s.width, self.height / s.height)
    }
}

impl<T: Scalar> AddAssign<T> for Size<T> {
    #[inline]
    fn add_assign(&mut self, v: T) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign<T> for Size<T> {
    #[inline]
    fn sub_assign(&mut self, v: T) {
        *self = *self - v;
    }
}

impl<T: Scalar> MulAssign<T> for Size<T> {
    #[inline]
    fn mul_assign(&mut self, v: T) {
        *self = *self * v;
    }
}

impl<T: Scalar> DivAssign<T> for Size<T> {
    #[inline]
    fn div_assign(&mut self, v: T) {
        *self = *self / v;
    }
}

impl<T: Scalar> AddAssign for Size<T> {
    #[inline]
    fn add_assign(&mut self, s: Self) {
        *self = *self + s;
    }
}

impl<T: Scalar> SubAssign for Size<T> {
    #[inline]
    fn sub_assign(&mut self, s: Self) {
        *self = *self - s;
    }
}

impl<T: Scalar> MulAssign for Size<T> {
    #[inline]
    fn mul_assign(&mut self, s: Self) {
        *self = *self * s;
    }
}

impl<T: Scalar> DivAssign for Size<T> {
    #[inline]
    fn div_assign(&mut self, s: Self) {
        *self = *self / s;
    }
}

impl<T: Scalar> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.width, self.height)
    }
}
