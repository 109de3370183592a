// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 2D affine transforms over floating scalars.
//!
//! The matrix form is
//!
//! ```text
//! | a  c  tx |   | x |
//! | b  d  ty | * | y |
//! | 0  0  1  |   | 1 |
//! ```
//!
//! so [`AffineTransform::apply`] maps `p` to
//! `(a*p.x + c*p.y + tx, b*p.x + d*p.y + ty)`.
//!
//! Composition order: in `t1 * t2`, the *right* operand applies first.
//! `(t1 * t2).apply(p) == t1.apply(t2.apply(p))`. Build pipelines right to
//! left, exactly as with column-vector matrix products.

#![allow(clippy::module_name_repetitions)]

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::scalar::FloatScalar;
use crate::{Point, Quad, Rect, Size};

/// A 2D affine transform: linear part `a, b, c, d` plus translation
/// `tx, ty`.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform<T> {
    /// Row 0, column 0 of the linear part.
    pub a: T,
    /// Row 1, column 0 of the linear part.
    pub b: T,
    /// Row 0, column 1 of the linear part.
    pub c: T,
    /// Row 1, column 1 of the linear part.
    pub d: T,
    /// Horizontal translation.
    pub tx: T,
    /// Vertical translation.
    pub ty: T,
}

// SAFETY: `#[repr(C)]` with six fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: FloatScalar + bytemuck::Zeroable> bytemuck::Zeroable for AffineTransform<T> {}
unsafe impl<T: FloatScalar + bytemuck::Pod> bytemuck::Pod for AffineTransform<T> {}

impl<T: FloatScalar> AffineTransform<T> {
    /// Creates a transform from its six coefficients.
    #[inline]
    #[must_use]
    pub const fn new(a: T, b: T, c: T, d: T, tx: T, ty: T) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// The identity transform.
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    /// A pure translation by `p`.
    #[inline]
    #[must_use]
    pub fn translation(p: Point<T>) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), p.x, p.y)
    }

    /// A pure scale by `s` about the origin.
    #[inline]
    #[must_use]
    pub fn scale(s: Size<T>) -> Self {
        Self::new(s.width, T::zero(), T::zero(), s.height, T::zero(), T::zero())
    }

    /// A rotation by `angle` radians about the origin. Positive angles turn
    /// clockwise in the y-down coordinate convention.
    #[inline]
    #[must_use]
    pub fn rotation(angle: T) -> Self {
        let ca = angle.cos();
        let sa = angle.sin();
        Self::new(ca, -sa, sa, ca, T::zero(), T::zero())
    }

    /// A rotation by `angle` radians about the pivot `p`.
    #[inline]
    #[must_use]
    pub fn rotation_about(angle: T, p: Point<T>) -> Self {
        Self::translation(p) * Self::rotation(angle) * Self::translation(-p)
    }

    /// Casts all six coefficients to another floating scalar (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: FloatScalar>(self) -> AffineTransform<U> {
        AffineTransform::new(
            U::from_f64(self.a.to_f64()),
            U::from_f64(self.b.to_f64()),
            U::from_f64(self.c.to_f64()),
            U::from_f64(self.d.to_f64()),
            U::from_f64(self.tx.to_f64()),
            U::from_f64(self.ty.to_f64()),
        )
    }

    /// Appends a translation by `p` in this transform's local frame.
    #[inline]
    pub fn translate(&mut self, p: Point<T>) -> &mut Self {
        *self = *self + p;
        self
    }

    /// Appends a scale by `s` to the linear part.
    #[inline]
    pub fn scale_by(&mut self, s: Size<T>) -> &mut Self {
        *self = *self * s;
        self
    }

    /// Appends a rotation by `angle` radians about the origin.
    #[inline]
    pub fn rotate(&mut self, angle: T) -> &mut Self {
        *self = *self * Self::rotation(angle);
        self
    }

    /// Returns a copy with a translation by `p` appended.
    #[inline]
    #[must_use]
    pub fn with_translation(self, p: Point<T>) -> Self {
        self + p
    }

    /// Returns a copy with a scale by `s` appended.
    #[inline]
    #[must_use]
    pub fn with_scale(self, s: Size<T>) -> Self {
        self * s
    }

    /// Returns a copy with a rotation by `angle` radians appended.
    #[inline]
    #[must_use]
    pub fn with_rotation(self, angle: T) -> Self {
        self * Self::rotation(angle)
    }

    /// Maps a point through the transform.
    #[inline]
    #[must_use]
    pub fn apply(self, p: Point<T>) -> Point<T> {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Maps all four corners of a rect. The result is a [`Quad`] because
    /// rotation and shear leave the axis-aligned family.
    #[inline]
    #[must_use]
    pub fn apply_rect(self, r: Rect<T>) -> Quad<T> {
        self.apply_quad(Quad::from(r))
    }

    /// Maps all four corners of a quad.
    #[inline]
    #[must_use]
    pub fn apply_quad(self, q: Quad<T>) -> Quad<T> {
        Quad::new(
            self.apply(q.top_left),
            self.apply(q.top_right),
            self.apply(q.bottom_right),
            self.apply(q.bottom_left),
        )
    }
}

impl<T: FloatScalar> Mul for AffineTransform<T> {
    type Output = Self;

    /// Composes two transforms; the right operand applies first.
    #[inline]
    fn mul(self, t: Self) -> Self {
        Self::new(
            self.a * t.a + self.b * t.c,
            self.a * t.b + self.b * t.d,
            self.c * t.a + self.d * t.c,
            self.c * t.b + self.d * t.d,
            self.tx + self.a * t.tx + self.b * t.ty,
            self.ty + self.c * t.tx + self.d * t.ty,
        )
    }
}

impl<T: FloatScalar> MulAssign for AffineTransform<T> {
    #[inline]
    fn mul_assign(&mut self, t: Self) {
        *self = *self * t;
    }
}

impl<T: FloatScalar> Add<Point<T>> for AffineTransform<T> {
    type Output = Self;

    /// Translates by `p` in the transform's local frame: the offset is
    /// mapped through the linear part before landing in `tx`/`ty`.
    #[inline]
    fn add(self, p: Point<T>) -> Self {
        Self::new(
            self.a,
            self.b,
            self.c,
            self.d,
            self.tx + self.a * p.x + self.b * p.y,
            self.ty + self.c * p.x + self.d * p.y,
        )
    }
}

impl<T: FloatScalar> Sub<Point<T>> for AffineTransform<T> {
    type Output = Self;

    /// Inverse of `Add<Point>`: translates by `-p` in the local frame.
    #[inline]
    fn sub(self, p: Point<T>) -> Self {
        self + -p
    }
}

impl<T: FloatScalar> AddAssign<Point<T>> for AffineTransform<T> {
    #[inline]
    fn add_assign(&mut self, p: Point<T>) {
        *self = *self + p;
    }
}

impl<T: FloatScalar> SubAssign<Point<T>> for AffineTransform<T> {
    #[inline]
    fn sub_assign(&mut self, p: Point<T>) {
        *self = *self - p;
    }
}

impl<T: FloatScalar> Mul<Size<T>> for AffineTransform<T> {
    type Output = Self;

    /// Scales the linear part column-wise; translation is untouched.
    #[inline]
    fn mul(self, s: Size<T>) -> Self {
        Self::new(
            self.a * s.width,
            self.b * s.height,
            self.c * s.width,
            self.d * s.height,
            self.tx,
            self.ty,
        )
    }
}

impl<T: FloatScalar> MulAssign<Size<T>> for AffineTransform<T> {
    #[inline]
    fn mul_assign(&mut self, s: Size<T>) {
        *self = *self * s;
    }
}

impl<T: FloatScalar> Mul<AffineTransform<T>> for Point<T> {
    type Output = Self;

    /// `p * t` maps the point through the transform.
    #[inline]
    fn mul(self, t: AffineTransform<T>) -> Self {
        t.apply(self)
    }
}

impl<T: FloatScalar> Mul<AffineTransform<T>> for Rect<T> {
    type Output = Quad<T>;

    /// `r * t` maps the rect's corners, yielding a quad.
    #[inline]
    fn mul(self, t: AffineTransform<T>) -> Quad<T> {
        t.apply_rect(self)
    }
}

impl<T: FloatScalar> Mul<AffineTransform<T>> for Quad<T> {
    type Output = Self;

    /// `q * t` maps all four corners.
    #[inline]
    fn mul(self, t: AffineTransform<T>) -> Self {
        t.apply_quad(self)
    }
}

impl<T: FloatScalar> PartialEq for AffineTransform<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.a.approx_eq(other.a)
            && self.b.approx_eq(other.b)
            && self.c.approx_eq(other.c)
            && self.d.approx_eq(other.d)
            && self.tx.approx_eq(other.tx)
            && self.ty.approx_eq(other.ty)
    }
}

impl<T: FloatScalar> fmt::Display for AffineTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{},{},{}}}",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point::new(3.5f64, -2.0);
        assert_eq!(AffineTransform::identity().apply(p), p);
        assert_eq!(p * AffineTransform::identity(), p);
    }

    #[test]
    fn right_operand_applies_first() {
        let f = AffineTransform::scale(Size::new(2.0f64, 3.0))
            * AffineTransform::translation(Point::new(10.0, 20.0));
        let origin = Rect::new(5.0, 6.0, 10.0, 20.0).origin();
        // Translate first, then scale: (5+10)*2 = 30, (6+20)*3 = 78.
        assert_eq!(origin * f, Point::new(30.0, 78.0));
    }

    #[test]
    fn rotation_about_pivot_fixes_the_pivot() {
        let f = AffineTransform::rotation_about(core::f64::consts::PI, Point::new(10.0, 10.0));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.top_left() * f, Point::new(20.0, 20.0));
        assert_eq!(r.top_right() * f, Point::new(10.0, 20.0));
        assert_eq!(r.bottom_left() * f, Point::new(20.0, 10.0));
        assert_eq!(r.bottom_right() * f, Point::new(10.0, 10.0));
    }

    #[test]
    fn rect_times_transform_yields_quad() {
        let f = AffineTransform::rotation(core::f64::consts::FRAC_PI_2);
        let q = Rect::new(0.0, 0.0, 2.0, 2.0) * f;
        // Quarter turn: (2,0) lands on (0,-2) with b = -sin.
        assert_eq!(q.top_left, Point::new(0.0, 0.0));
        assert_eq!(q.top_right, Point::new(0.0, -2.0));
        assert_eq!(q.bottom_right, Point::new(2.0, -2.0));
        assert_eq!(q.bottom_left, Point::new(2.0, 0.0));
    }

    #[test]
    fn local_frame_translation_maps_through_linear_part() {
        let f = AffineTransform::scale(Size::new(2.0f64, 2.0)) + Point::new(3.0, 4.0);
        assert_eq!(f, AffineTransform::new(2.0, 0.0, 0.0, 2.0, 6.0, 8.0));
        assert_eq!(f - Point::new(3.0, 4.0), AffineTransform::scale(Size::new(2.0, 2.0)));
    }

    #[test]
    fn mutators_match_their_operator_forms() {
        let mut t = AffineTransform::identity();
        t.scale_by(Size::new(2.0f64, 3.0))
            .translate(Point::new(1.0, 1.0))
            .rotate(core::f64::consts::PI);
        let u = ((AffineTransform::identity() * Size::new(2.0, 3.0)) + Point::new(1.0, 1.0))
            .with_rotation(core::f64::consts::PI);
        assert_eq!(t, u);
    }

    #[test]
    fn size_scale_leaves_translation_untouched() {
        let t = AffineTransform::translation(Point::new(5.0f64, 7.0)) * Size::new(2.0, 3.0);
        assert_eq!(t, AffineTransform::new(2.0, 0.0, 0.0, 3.0, 5.0, 7.0));
    }
}
