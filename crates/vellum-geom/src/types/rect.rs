// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Axis-aligned rectangles with origin/size and flat views over one storage.
//!
//! The rect stores the flat `x, y, width, height` fields; [`Rect::origin`]
//! and [`Rect::size`] synthesize `Point`/`Size` values from that same
//! storage, and [`Rect::set_origin`]/[`Rect::set_size`] write it back. Both
//! views always agree: `origin().x == x` and `size().width == width` by
//! construction, so a write through either view is immediately observable
//! through the other.
//!
//! Coordinate conventions:
//! - `y` grows downward; `top() == y` and `bottom() == y + height`.
//! - The stored origin is always the minimum (top-left) corner; anchored
//!   constructors subtract width/height as needed to keep it that way.
//! - Sizes may be negative; nothing here normalizes them. [`Rect::area`] is
//!   deliberately unguarded.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::compat::RectCompat;
use crate::scalar::{max_s, min_s, Scalar};
use crate::{Point, Size};

/// An axis-aligned rectangle: top-left origin plus size, stored flat.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

// SAFETY: `#[repr(C)]` with four fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Rect<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Rect<T> {}

impl<T: Scalar> Rect<T> {
    /// Creates a rect from flat fields.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rect from an origin point and a size.
    #[inline]
    #[must_use]
    pub fn from_origin_size(origin: Point<T>, size: Size<T>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Creates a rect spanning two opposite corners; the size is their
    /// difference.
    #[inline]
    #[must_use]
    pub fn from_corners(top_left: Point<T>, bottom_right: Point<T>) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    /// Creates a rect whose top-left corner is `p`.
    #[inline]
    #[must_use]
    pub fn from_top_left(p: Point<T>, s: Size<T>) -> Self {
        Self::new(p.x, p.y, s.width, s.height)
    }

    /// Creates a rect whose top-right corner is `p`.
    #[inline]
    #[must_use]
    pub fn from_top_right(p: Point<T>, s: Size<T>) -> Self {
        Self::new(p.x - s.width, p.y, s.width, s.height)
    }

    /// Creates a rect whose bottom-left corner is `p`.
    #[inline]
    #[must_use]
    pub fn from_bottom_left(p: Point<T>, s: Size<T>) -> Self {
        Self::new(p.x, p.y - s.height, s.width, s.height)
    }

    /// Creates a rect whose bottom-right corner is `p`.
    #[inline]
    #[must_use]
    pub fn from_bottom_right(p: Point<T>, s: Size<T>) -> Self {
        Self::new(p.x - s.width, p.y - s.height, s.width, s.height)
    }

    /// Converts a foreign rect-compatible value, casting scalars as needed.
    #[inline]
    #[must_use]
    pub fn from_compat<R: RectCompat>(r: R) -> Self {
        r.to_rect().cast()
    }

    /// Converts into a foreign rect-compatible type, casting scalars as
    /// needed.
    #[inline]
    #[must_use]
    pub fn to_compat<R: RectCompat>(self) -> R {
        R::from_rect(self.cast())
    }

    /// Casts all four fields to another scalar type with native `as`
    /// semantics (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Rect<U> {
        Rect::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.width.to_f64()),
            U::from_f64(self.height.to_f64()),
        )
    }

    // ── Views ──────────────────────────────────────────────────────

    /// Origin (top-left corner), synthesized from the flat fields.
    #[inline]
    #[must_use]
    pub fn origin(self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    /// Alias for [`Rect::origin`].
    #[inline]
    #[must_use]
    pub fn position(self) -> Point<T> {
        self.origin()
    }

    /// Size, synthesized from the flat fields.
    #[inline]
    #[must_use]
    pub fn size(self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    /// Writes the origin through to `x`/`y`.
    #[inline]
    pub fn set_origin(&mut self, p: Point<T>) -> &mut Self {
        self.x = p.x;
        self.y = p.y;
        self
    }

    /// Writes the size through to `width`/`height`.
    #[inline]
    pub fn set_size(&mut self, s: Size<T>) -> &mut Self {
        self.width = s.width;
        self.height = s.height;
        self
    }

    // ── Flat mutators and copies ───────────────────────────────────

    /// Sets the left edge.
    #[inline]
    pub fn set_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets the top edge.
    #[inline]
    pub fn set_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
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

    /// Adds `dx` to the left edge.
    #[inline]
    pub fn add_x(&mut self, dx: T) -> &mut Self {
        self.x = self.x + dx;
        self
    }

    /// Adds `dy` to the top edge.
    #[inline]
    pub fn add_y(&mut self, dy: T) -> &mut Self {
        self.y = self.y + dy;
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

    /// Translates the origin by `p`.
    #[inline]
    pub fn add_point(&mut self, p: Point<T>) -> &mut Self {
        self.x = self.x + p.x;
        self.y = self.y + p.y;
        self
    }

    /// Grows the size by `s`.
    #[inline]
    pub fn add_size(&mut self, s: Size<T>) -> &mut Self {
        self.width = self.width + s.width;
        self.height = self.height + s.height;
        self
    }

    /// Multiplies the left edge by `mx`.
    #[inline]
    pub fn mul_x(&mut self, mx: T) -> &mut Self {
        self.x = self.x * mx;
        self
    }

    /// Multiplies the top edge by `my`.
    #[inline]
    pub fn mul_y(&mut self, my: T) -> &mut Self {
        self.y = self.y * my;
        self
    }

    /// Multiplies the width by `mw`.
    #[inline]
    pub fn mul_width(&mut self, mw: T) -> &mut Self {
        self.width = self.width * mw;
        self
    }

    /// Multiplies the height by `mh`.
    #[inline]
    pub fn mul_height(&mut self, mh: T) -> &mut Self {
        self.height = self.height * mh;
        self
    }

    /// Returns a copy with the given left edge.
    #[inline]
    #[must_use]
    pub fn with_x(self, x: T) -> Self {
        Self::new(x, self.y, self.width, self.height)
    }

    /// Returns a copy with the given top edge.
    #[inline]
    #[must_use]
    pub fn with_y(self, y: T) -> Self {
        Self::new(self.x, y, self.width, self.height)
    }

    /// Returns a copy with the given width.
    #[inline]
    #[must_use]
    pub fn with_width(self, w: T) -> Self {
        Self::new(self.x, self.y, w, self.height)
    }

    /// Returns a copy with the given height.
    #[inline]
    #[must_use]
    pub fn with_height(self, h: T) -> Self {
        Self::new(self.x, self.y, self.width, h)
    }

    /// Returns a copy with the given origin.
    #[inline]
    #[must_use]
    pub fn with_origin(self, p: Point<T>) -> Self {
        Self::from_origin_size(p, self.size())
    }

    /// Returns a copy with the given size.
    #[inline]
    #[must_use]
    pub fn with_size(self, s: Size<T>) -> Self {
        Self::from_origin_size(self.origin(), s)
    }

    // ── Anchor repositioning (size preserved) ──────────────────────

    /// Returns a copy moved so its top-left corner is `p`.
    #[inline]
    #[must_use]
    pub fn with_top_left(self, p: Point<T>) -> Self {
        Self::from_origin_size(p, self.size())
    }

    /// Returns a copy moved so its top-right corner is `p`.
    #[inline]
    #[must_use]
    pub fn with_top_right(self, p: Point<T>) -> Self {
        Self::new(p.x - self.width, p.y, self.width, self.height)
    }

    /// Returns a copy moved so its bottom-left corner is `p`.
    #[inline]
    #[must_use]
    pub fn with_bottom_left(self, p: Point<T>) -> Self {
        Self::new(p.x, p.y - self.height, self.width, self.height)
    }

    /// Returns a copy moved so its bottom-right corner is `p`.
    #[inline]
    #[must_use]
    pub fn with_bottom_right(self, p: Point<T>) -> Self {
        Self::new(p.x - self.width, p.y - self.height, self.width, self.height)
    }

    /// Returns a copy centered on `p`.
    #[inline]
    #[must_use]
    pub fn with_middle(self, p: Point<T>) -> Self {
        Self::new(
            T::from_f64(p.x.to_f64() - self.width.to_f64() * 0.5),
            T::from_f64(p.y.to_f64() - self.height.to_f64() * 0.5),
            self.width,
            self.height,
        )
    }

    /// Returns a copy moved so the midpoint of its left edge is `p`.
    #[inline]
    #[must_use]
    pub fn with_middle_left(self, p: Point<T>) -> Self {
        Self::new(
            p.x,
            T::from_f64(p.y.to_f64() - self.height.to_f64() * 0.5),
            self.width,
            self.height,
        )
    }

    /// Returns a copy moved so the midpoint of its right edge is `p`.
    #[inline]
    #[must_use]
    pub fn with_middle_right(self, p: Point<T>) -> Self {
        Self::new(
            p.x - self.width,
            T::from_f64(p.y.to_f64() - self.height.to_f64() * 0.5),
            self.width,
            self.height,
        )
    }

    /// Returns a copy moved so the midpoint of its top edge is `p`.
    #[inline]
    #[must_use]
    pub fn with_middle_top(self, p: Point<T>) -> Self {
        Self::new(
            T::from_f64(p.x.to_f64() - self.width.to_f64() * 0.5),
            p.y,
            self.width,
            self.height,
        )
    }

    /// Returns a copy moved so the midpoint of its bottom edge is `p`.
    #[inline]
    #[must_use]
    pub fn with_middle_bottom(self, p: Point<T>) -> Self {
        Self::new(
            T::from_f64(p.x.to_f64() - self.width.to_f64() * 0.5),
            p.y - self.height,
            self.width,
            self.height,
        )
    }

    // ── Edges, corners, midpoints ──────────────────────────────────

    /// Left edge (`x`).
    #[inline]
    #[must_use]
    pub fn left(self) -> T {
        self.x
    }

    /// Right edge (`x + width`).
    #[inline]
    #[must_use]
    pub fn right(self) -> T {
        self.x + self.width
    }

    /// Top edge (`y`).
    #[inline]
    #[must_use]
    pub fn top(self) -> T {
        self.y
    }

    /// Bottom edge (`y + height`).
    #[inline]
    #[must_use]
    pub fn bottom(self) -> T {
        self.y + self.height
    }

    /// Top-left corner (the origin).
    #[inline]
    #[must_use]
    pub fn top_left(self) -> Point<T> {
        self.origin()
    }

    /// Top-right corner.
    #[inline]
    #[must_use]
    pub fn top_right(self) -> Point<T> {
        Point::new(self.right(), self.y)
    }

    /// Bottom-left corner.
    #[inline]
    #[must_use]
    pub fn bottom_left(self) -> Point<T> {
        Point::new(self.x, self.bottom())
    }

    /// Bottom-right corner.
    #[inline]
    #[must_use]
    pub fn bottom_right(self) -> Point<T> {
        Point::new(self.right(), self.bottom())
    }

    /// Center of the rect (f64 midpoint math, cast back).
    #[inline]
    #[must_use]
    pub fn middle(self) -> Point<T> {
        Point::new(
            T::from_f64(self.x.to_f64() + self.width.to_f64() * 0.5),
            T::from_f64(self.y.to_f64() + self.height.to_f64() * 0.5),
        )
    }

    /// Midpoint of the left edge.
    #[inline]
    #[must_use]
    pub fn middle_left(self) -> Point<T> {
        Point::new(
            self.x,
            T::from_f64(self.y.to_f64() + self.height.to_f64() * 0.5),
        )
    }

    /// Midpoint of the right edge.
    #[inline]
    #[must_use]
    pub fn middle_right(self) -> Point<T> {
        Point::new(
            self.right(),
            T::from_f64(self.y.to_f64() + self.height.to_f64() * 0.5),
        )
    }

    /// Midpoint of the top edge.
    #[inline]
    #[must_use]
    pub fn middle_top(self) -> Point<T> {
        Point::new(
            T::from_f64(self.x.to_f64() + self.width.to_f64() * 0.5),
            self.y,
        )
    }

    /// Midpoint of the bottom edge.
    #[inline]
    #[must_use]
    pub fn middle_bottom(self) -> Point<T> {
        Point::new(
            T::from_f64(self.x.to_f64() + self.width.to_f64() * 0.5),
            self.bottom(),
        )
    }

    // ── Layout-flow neighbors ──────────────────────────────────────

    /// Point `delta` to the left of the left edge, at the top.
    #[inline]
    #[must_use]
    pub fn next_left(self, delta: T) -> Point<T> {
        Point::new(self.x - delta, self.y)
    }

    /// Point offset outward from the left edge by `dt` (x out, y down).
    #[inline]
    #[must_use]
    pub fn next_left_by(self, dt: Point<T>) -> Point<T> {
        Point::new(self.x - dt.x, self.y + dt.y)
    }

    /// Point `delta` to the right of the right edge, at the top.
    #[inline]
    #[must_use]
    pub fn next_right(self, delta: T) -> Point<T> {
        Point::new(self.right() + delta, self.y)
    }

    /// Point offset outward from the right edge by `dt`.
    #[inline]
    #[must_use]
    pub fn next_right_by(self, dt: Point<T>) -> Point<T> {
        Point::new(self.right() + dt.x, self.y + dt.y)
    }

    /// Point `delta` below the bottom edge, at the left.
    #[inline]
    #[must_use]
    pub fn next_down(self, delta: T) -> Point<T> {
        Point::new(self.x, self.bottom() + delta)
    }

    /// Point offset outward from the bottom edge by `dt`.
    #[inline]
    #[must_use]
    pub fn next_down_by(self, dt: Point<T>) -> Point<T> {
        Point::new(self.x + dt.x, self.bottom() + dt.y)
    }

    /// Point `delta` above the top edge, at the left.
    #[inline]
    #[must_use]
    pub fn next_up(self, delta: T) -> Point<T> {
        Point::new(self.x, self.y - delta)
    }

    /// Point offset outward from the top edge by `dt`.
    #[inline]
    #[must_use]
    pub fn next_up_by(self, dt: Point<T>) -> Point<T> {
        Point::new(self.x + dt.x, self.y - dt.y)
    }

    // ── Algorithms ─────────────────────────────────────────────────

    /// `true` if `p` lies inside the rect, inclusive on all four edges.
    #[inline]
    #[must_use]
    pub fn contains(self, p: Point<T>) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// `true` if `p` touches the rect, with the right and bottom edges
    /// extended by one scalar epsilon.
    ///
    /// This deliberately uses a different edge tolerance than
    /// [`Rect::contains`]: hit-testing across float boundaries tolerates
    /// jitter on the far edges, while `contains` stays exact. The two must
    /// stay distinct operations.
    #[inline]
    #[must_use]
    pub fn intersects_point(self, p: Point<T>) -> bool {
        let eps = T::epsilon();
        min_s(self.right(), p.x + eps) - max_s(self.x, p.x) >= T::zero()
            && min_s(self.bottom(), p.y + eps) - max_s(self.y, p.y) >= T::zero()
    }

    /// `true` only if the overlap is strictly positive on both axes; rects
    /// that merely touch along an edge do not intersect.
    #[inline]
    #[must_use]
    pub fn intersects(self, r: Self) -> bool {
        min_s(self.right(), r.right()) - max_s(self.x, r.x) > T::zero()
            && min_s(self.bottom(), r.bottom()) - max_s(self.y, r.y) > T::zero()
    }

    /// Overlap of the two rects, or the canonical empty rect `{0,0,0,0}`
    /// when the overlap is negative on either axis.
    ///
    /// Callers test for emptiness (zero width or height) rather than an
    /// error signal.
    #[inline]
    #[must_use]
    pub fn intersection(self, rhs: Self) -> Self {
        let nx = max_s(self.x, rhs.x);
        let nw = min_s(self.right(), rhs.right()) - nx;
        if nw < T::zero() {
            return Self::new(T::zero(), T::zero(), T::zero(), T::zero());
        }

        let ny = max_s(self.y, rhs.y);
        let nh = min_s(self.bottom(), rhs.bottom()) - ny;
        if nh < T::zero() {
            return Self::new(T::zero(), T::zero(), T::zero(), T::zero());
        }

        Self::new(nx, ny, nw, nh)
    }

    /// Minimal axis-aligned rect covering both inputs, overlapping or not.
    #[inline]
    #[must_use]
    pub fn union(self, rhs: Self) -> Self {
        let nx = min_s(self.x, rhs.x);
        let ny = min_s(self.y, rhs.y);
        Self::new(
            nx,
            ny,
            max_s(self.right(), rhs.right()) - nx,
            max_s(self.bottom(), rhs.bottom()) - ny,
        )
    }

    /// Expands this rect in place to cover `rhs`.
    #[inline]
    pub fn merge(&mut self, rhs: Self) -> &mut Self {
        *self = self.union(rhs);
        self
    }

    /// Returns this rect expanded to cover `rhs`.
    #[inline]
    #[must_use]
    pub fn merged(self, rhs: Self) -> Self {
        self.union(rhs)
    }

    /// Insets the rect by `(dp.x, dp.y)` symmetrically on both sides.
    #[inline]
    pub fn reduce(&mut self, dp: Point<T>) -> &mut Self {
        *self = self.reduced(dp);
        self
    }

    /// Returns the rect inset by `(dp.x, dp.y)` on both sides.
    #[inline]
    #[must_use]
    pub fn reduced(self, dp: Point<T>) -> Self {
        Self::new(
            self.x + dp.x,
            self.y + dp.y,
            self.width - (dp.x + dp.x),
            self.height - (dp.y + dp.y),
        )
    }

    /// Outsets the rect by `(dp.x, dp.y)` symmetrically on both sides.
    #[inline]
    pub fn expand(&mut self, dp: Point<T>) -> &mut Self {
        *self = self.expanded(dp);
        self
    }

    /// Returns the rect outset by `(dp.x, dp.y)` on both sides.
    #[inline]
    #[must_use]
    pub fn expanded(self, dp: Point<T>) -> Self {
        Self::new(
            self.x - dp.x,
            self.y - dp.y,
            self.width + dp.x + dp.x,
            self.height + dp.y + dp.y,
        )
    }

    /// `width * height`, unguarded: negative sizes yield negative areas.
    #[inline]
    #[must_use]
    pub fn area(self) -> T {
        self.width * self.height
    }

    /// Scales `r` to fit this rect's footprint, preserving `r`'s aspect
    /// ratio. `r` keeps its origin; only its size changes.
    ///
    /// The branch tests *this* rect's width against its own height: a
    /// portrait receiver pins the fitted width to `self.width`, a landscape
    /// (or square) receiver pins the fitted height to `self.height`. Ratio
    /// math runs in `f64`. Degenerate argument sizes divide by zero with
    /// native scalar behavior.
    #[inline]
    #[must_use]
    pub fn fitted_rect(self, r: Self) -> Self {
        if self.width < self.height {
            let height_per_width = r.height.to_f64() / r.width.to_f64();
            r.with_size(Size::new(
                self.width,
                T::from_f64(height_per_width * self.width.to_f64()),
            ))
        } else {
            let width_per_height = r.width.to_f64() / r.height.to_f64();
            r.with_size(Size::new(
                T::from_f64(width_per_height * self.height.to_f64()),
                self.height,
            ))
        }
    }
}

impl<T: Scalar> PartialEq for Rect<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x)
            && self.y.approx_eq(other.y)
            && self.width.approx_eq(other.width)
            && self.height.approx_eq(other.height)
    }
}

impl<T: Scalar> Add<Point<T>> for Rect<T> {
    type Output = Self;
    #[inline]
    fn add(self, p: Point<T>) -> Self {
        Self::new(self.x + p.x, self.y + p.y, self.width, self.height)
    }
}

impl<T: Scalar> Sub<Point<T>> for Rect<T> {
    type Output = Self;
    #[inline]
    fn sub(self, p: Point<T>) -> Self {
        Self::new(self.x - p.x, self.y - p.y, self.width, self.height)
    }
}

impl<T: Scalar> AddAssign<Point<T>> for Rect<T> {
    #[inline]
    fn add_assign(&mut self, p: Point<T>) {
        *self = *self + p;
    }
}

impl<T: Scalar> SubAssign<Point<T>> for Rect<T> {
    #[inline]
    fn sub_assign(&mut self, p: Point<T>) {
        *self = *self - p;
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_fields_land_where_expected() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.x, 1);
        assert_eq!(r.y, 2);
        assert_eq!(r.width, 3);
        assert_eq!(r.height, 4);
    }

    #[test]
    fn views_and_flat_fields_agree_after_writes() {
        let mut r = Rect::new(0.0f64, 0.0, 10.0, 20.0);

        r.set_origin(Point::new(3.0, 4.0));
        assert!((r.x - 3.0).abs() < f64::EPSILON);
        assert!((r.y - 4.0).abs() < f64::EPSILON);

        r.set_x(7.0);
        assert_eq!(r.origin(), Point::new(7.0, 4.0));

        r.set_size(Size::new(5.0, 6.0));
        assert!((r.width - 5.0).abs() < f64::EPSILON);
        r.set_height(9.0);
        assert_eq!(r.size(), Size::new(5.0, 9.0));
    }

    #[test]
    fn anchored_constructors_store_minimum_corner() {
        let s = Size::new(4, 2);
        assert_eq!(Rect::from_top_left(Point::new(10, 10), s), Rect::new(10, 10, 4, 2));
        assert_eq!(Rect::from_top_right(Point::new(10, 10), s), Rect::new(6, 10, 4, 2));
        assert_eq!(Rect::from_bottom_left(Point::new(10, 10), s), Rect::new(10, 8, 4, 2));
        assert_eq!(
            Rect::from_bottom_right(Point::new(10, 10), s),
            Rect::new(6, 8, 4, 2)
        );
        assert_eq!(
            Rect::from_corners(Point::new(1, 2), Point::new(5, 8)),
            Rect::new(1, 2, 4, 6)
        );
    }

    #[test]
    fn corners_and_midpoints() {
        let r = Rect::new(0.0f64, 0.0, 10.0, 20.0);
        assert_eq!(r.top_right(), Point::new(10.0, 0.0));
        assert_eq!(r.bottom_left(), Point::new(0.0, 20.0));
        assert_eq!(r.middle(), Point::new(5.0, 10.0));
        assert_eq!(r.middle_top(), Point::new(5.0, 0.0));
        assert_eq!(r.middle_right(), Point::new(10.0, 10.0));
        assert!(r.contains(r.top_left()));
        assert!(r.contains(r.bottom_right()));
    }

    #[test]
    fn contains_is_inclusive_and_intersects_rect_is_strict() {
        let a = Rect::new(0.0f64, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.contains(Point::new(10.0, 10.0)));
        // A zero-width touch is not an intersection.
        assert!(!a.intersects(touching));
        assert!(a.intersects(Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn intersection_of_disjoint_rects_is_canonical_empty() {
        let a = Rect::new(0.0f64, 0.0, 4.0, 4.0);
        let b = Rect::new(100.0, 100.0, 4.0, 4.0);
        assert_eq!(a.intersection(b), Rect::new(0.0, 0.0, 0.0, 0.0));

        let c = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.intersection(c), Rect::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn union_covers_both_inputs() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(10, -2, 2, 3);
        let u = a.union(b);
        assert_eq!(u, Rect::new(0, -2, 12, 6));

        let mut m = a;
        m.merge(b);
        assert_eq!(m, u);
        assert_eq!(a.merged(b), u);
    }

    #[test]
    fn reduce_and_expand_are_symmetric() {
        let r = Rect::new(10, 10, 20, 20);
        let inset = r.reduced(Point::new(2, 3));
        assert_eq!(inset, Rect::new(12, 13, 16, 14));
        assert_eq!(inset.expanded(Point::new(2, 3)), r);
    }

    #[test]
    fn fitted_rect_branches_on_receiver_orientation() {
        // Portrait receiver: width pinned, height follows the argument's
        // aspect ratio.
        let portrait = Rect::new(0.0f64, 0.0, 10.0, 20.0);
        let r = Rect::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(portrait.fitted_rect(r), Rect::new(1.0, 2.0, 10.0, 20.0));

        // Landscape receiver: height pinned, width follows.
        let landscape = Rect::new(0.0f64, 0.0, 20.0, 10.0);
        let q = Rect::new(1.0, 2.0, 5.0, 10.0);
        assert_eq!(landscape.fitted_rect(q), Rect::new(1.0, 2.0, 5.0, 10.0));
    }

    #[test]
    fn area_is_unguarded() {
        assert_eq!(Rect::new(0, 0, 4, 5).area(), 20);
        assert_eq!(Rect::new(0, 0, -4, 5).area(), -20);
    }

    #[test]
    fn point_translation_operators() {
        let r = Rect::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(r + Point::new(1.0, 1.0), Rect::new(2.0, 3.0, 3.0, 4.0));
        let mut m = r;
        m -= Point::new(1.0, 2.0);
        assert_eq!(m, Rect::new(0.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn intersects_point_accepts_edges_and_degenerate_rects() {
        let r = Rect::new(0.0f64, 0.0, 10.0, 10.0);
        // Far corner and interior are accepted, points beyond rejected.
        assert!(r.intersects_point(Point::new(10.0, 10.0)));
        assert!(r.intersects_point(Point::new(5.0, 5.0)));
        assert!(!r.intersects_point(Point::new(10.5, 10.0)));
        assert!(!r.intersects_point(Point::new(5.0, -0.5)));

        // A zero-extent rect still hits its own location.
        let line = Rect::new(3.0f64, 0.0, 0.0, 10.0);
        assert!(line.intersects_point(Point::new(3.0, 5.0)));
    }

    #[test]
    fn display_uses_brace_format() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "{1,2,3,4}");
    }
}
