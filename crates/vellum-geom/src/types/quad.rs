// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Free-form quadrilaterals.
//!
//! A [`Quad`] holds four independent corners and is the natural output of
//! transforming a [`Rect`]: rotation and shear produce corner sets no
//! axis-aligned rect can represent.

use core::fmt;

use crate::scalar::Scalar;
use crate::{Point, Rect};

/// Four corners in clockwise order starting from the top-left.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad<T> {
    /// Top-left corner.
    pub top_left: Point<T>,
    /// Top-right corner.
    pub top_right: Point<T>,
    /// Bottom-right corner.
    pub bottom_right: Point<T>,
    /// Bottom-left corner.
    pub bottom_left: Point<T>,
}

// SAFETY: `#[repr(C)]` with four `Point<T>` fields, themselves `#[repr(C)]`
// pairs of `T`; no padding for any `T`, and bit validity is inherited from
// `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Quad<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Quad<T> {}

impl<T: Scalar> Quad<T> {
    /// Creates a quad from its four corners, clockwise from the top-left.
    #[inline]
    #[must_use]
    pub const fn new(
        top_left: Point<T>,
        top_right: Point<T>,
        bottom_right: Point<T>,
        bottom_left: Point<T>,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Casts all corners to another scalar type with native `as` semantics
    /// (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Quad<U> {
        Quad::new(
            self.top_left.cast(),
            self.top_right.cast(),
            self.bottom_right.cast(),
            self.bottom_left.cast(),
        )
    }
}

impl<T: Scalar> From<Rect<T>> for Quad<T> {
    /// Expands a rect into its four corners.
    #[inline]
    fn from(r: Rect<T>) -> Self {
        Self::new(r.top_left(), r.top_right(), r.bottom_right(), r.bottom_left())
    }
}

impl<T: Scalar> PartialEq for Quad<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.top_left == other.top_left
            && self.top_right == other.top_right
            && self.bottom_right == other.bottom_right
            && self.bottom_left == other.bottom_left
    }
}

impl<T: Scalar> fmt::Display for Quad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rect_orders_corners_clockwise() {
        let q = Quad::from(Rect::new(1, 2, 10, 20));
        assert_eq!(q.top_left, Point::new(1, 2));
        assert_eq!(q.top_right, Point::new(11, 2));
        assert_eq!(q.bottom_right, Point::new(11, 22));
        assert_eq!(q.bottom_left, Point::new(1, 22));
    }

    #[test]
    fn display_lists_corners_in_order() {
        let q = Quad::from(Rect::new(0, 0, 1, 1));
        assert_eq!(q.to_string(), "[{0,0}, {1,0}, {1,1}, {0,1}]");
    }
}
