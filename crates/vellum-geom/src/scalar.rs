// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar arithmetic abstraction for Vellum geometry.
//!
//! Geometry code in this crate is generic over a small numeric surface rather
//! than a concrete representation. The contract mirrors what the primitives
//! actually need:
//!
//! - Core arithmetic via the standard operator traits.
//! - `approx_eq`: epsilon-tolerant equality for floating scalars, exact
//!   equality for integral scalars. The floating rule permits a difference of
//!   one epsilon, absolute or scaled by the larger operand magnitude.
//! - `epsilon`: machine epsilon for floats, zero for integers, used by the
//!   edge-jitter tolerance in [`crate::Rect::intersects_point`].
//! - `from_f64`/`to_f64`: boundary casts with native `as` semantics
//!   (truncation toward zero for integer targets). Midpoint and aspect-ratio
//!   math routes through `f64` and casts back, so integer geometry rounds the
//!   same way on every platform.
//!
//! [`FloatScalar`] extends the surface with `sin`/`cos` (radians) for
//! [`crate::AffineTransform`], which is only defined over floating scalars.

// Boundary casts are the documented contract of `from_f64`/`to_f64`.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_lossless
)]

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric surface required by every geometric primitive.
///
/// Implemented for `f32`, `f64`, and the signed integers `i8`..`i64`.
/// Unsigned integers are excluded: negation and symmetric ranges are part of
/// the contract.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns the largest finite value of this scalar.
    fn max_value() -> Self;

    /// Returns the comparison tolerance: machine epsilon for floating
    /// scalars, zero for integral scalars.
    fn epsilon() -> Self;

    /// Returns `true` if `self` and `other` are equal under this scalar's
    /// comparison policy.
    ///
    /// Integral scalars compare exactly. Floating scalars accept a difference
    /// of at most one epsilon, absolute or relative to the larger magnitude:
    /// `|a - b| <= eps || |a - b| < max(|a|, |b|) * eps`.
    fn approx_eq(self, other: Self) -> bool;

    /// Converts from `f64` with native `as` cast semantics.
    fn from_f64(v: f64) -> Self;

    /// Converts to `f64` for ratio and midpoint math.
    fn to_f64(self) -> f64;
}

/// Floating scalar surface required by [`crate::AffineTransform`].
pub trait FloatScalar: Scalar {
    /// Returns the sine of `self` (radians).
    #[must_use]
    fn sin(self) -> Self;

    /// Returns the cosine of `self` (radians).
    #[must_use]
    fn cos(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            fn max_value() -> Self {
                <$t>::MAX
            }
            #[inline]
            fn epsilon() -> Self {
                0
            }
            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64);

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn max_value() -> Self {
                <$t>::MAX
            }
            #[inline]
            fn epsilon() -> Self {
                <$t>::EPSILON
            }
            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                let dt = (self - other).abs();
                dt <= <$t>::EPSILON || dt < self.abs().max(other.abs()) * <$t>::EPSILON
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }

        impl FloatScalar for $t {
            #[inline]
            fn sin(self) -> Self {
                self.sin()
            }
            #[inline]
            fn cos(self) -> Self {
                self.cos()
            }
        }
    )*};
}

impl_scalar_float!(f32);

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn max_value() -> Self {
        f64::MAX
    }
    #[inline]
    fn epsilon() -> Self {
        f64::EPSILON
    }
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        let dt = (self - other).abs();
        dt <= f64::EPSILON || dt < self.abs().max(other.abs()) * f64::EPSILON
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl FloatScalar for f64 {
    #[inline]
    fn sin(self) -> Self {
        self.sin()
    }
    #[inline]
    fn cos(self) -> Self {
        self.cos()
    }
}

/// Minimum of two partially ordered scalars; `a` wins ties.
#[inline]
pub(crate) fn min_s<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Maximum of two partially ordered scalars; `a` wins ties.
#[inline]
pub(crate) fn max_s<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_equality_is_exact() {
        assert!(3i32.approx_eq(3));
        assert!(!3i32.approx_eq(4));
        assert_eq!(i32::epsilon(), 0);
    }

    #[test]
    fn float_equality_tolerates_one_scaled_epsilon() {
        let a = 1.0f64;
        let b = 1.0f64 + f64::EPSILON;
        assert!(a.approx_eq(b));

        // Large magnitudes scale the tolerance.
        let c = 1.0e12f64;
        let d = c * (1.0 + 0.5 * f64::EPSILON);
        assert!(c.approx_eq(d));

        assert!(!1.0f64.approx_eq(1.0 + 1.0e-9));
    }

    #[test]
    fn from_f64_truncates_toward_zero_for_integers() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
    }
}
