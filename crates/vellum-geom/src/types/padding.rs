// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge insets for rect layout.

use core::fmt;

use crate::scalar::Scalar;
use crate::{Rect, Size};

/// Per-edge insets, declared in `top, left, bottom, right` order.
///
/// [`Padding::inside_rect`] and [`Padding::outside_rect`] are exact
/// inverses of each other.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding<T> {
    /// Top inset.
    pub top: T,
    /// Left inset.
    pub left: T,
    /// Bottom inset.
    pub bottom: T,
    /// Right inset.
    pub right: T,
}

// SAFETY: `#[repr(C)]` with four fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Padding<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Padding<T> {}

impl<T: Scalar> Padding<T> {
    /// Creates insets from the four edges.
    #[inline]
    #[must_use]
    pub const fn new(top: T, left: T, bottom: T, right: T) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates uniform insets on all four edges.
    #[inline]
    #[must_use]
    pub const fn uniform(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    /// Casts all four insets to another scalar type with native `as`
    /// semantics (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Padding<U> {
        Padding::new(
            U::from_f64(self.top.to_f64()),
            U::from_f64(self.left.to_f64()),
            U::from_f64(self.bottom.to_f64()),
            U::from_f64(self.right.to_f64()),
        )
    }

    /// Shrinks `rect` by these insets: the origin moves by `(left, top)` and
    /// the size loses `left + right` horizontally and `top + bottom`
    /// vertically.
    #[inline]
    #[must_use]
    pub fn inside_rect(self, rect: Rect<T>) -> Rect<T> {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            rect.width - (self.left + self.right),
            rect.height - (self.top + self.bottom),
        )
    }

    /// Grows `rect` by these insets; exact inverse of
    /// [`Padding::inside_rect`].
    #[inline]
    #[must_use]
    pub fn outside_rect(self, rect: Rect<T>) -> Rect<T> {
        Rect::new(
            rect.x - self.left,
            rect.y - self.top,
            rect.width + self.left + self.right,
            rect.height + self.top + self.bottom,
        )
    }

    /// `true` if all four insets are zero.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.top == T::zero()
            && self.left == T::zero()
            && self.bottom == T::zero()
            && self.right == T::zero()
    }

    /// Total horizontal and vertical inset as a [`Size`].
    #[inline]
    #[must_use]
    pub fn total(self) -> Size<T> {
        Size::new(self.left + self.right, self.top + self.bottom)
    }
}

impl<T: Scalar> PartialEq for Padding<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.top.approx_eq(other.top)
            && self.left.approx_eq(other.left)
            && self.bottom.approx_eq(other.bottom)
            && self.right.approx_eq(other.right)
    }
}

impl<T: Scalar> fmt::Display for Padding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{}}}",
            self.top, self.left, self.bottom, self.right
        )
    }
}
