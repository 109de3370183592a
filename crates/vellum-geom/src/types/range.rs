// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! 1D linear ranges with explicit containment policies.
//!
//! A [`Range`] is just a `start`/`end` pair and is *not* required to be
//! sorted; callers that need `start <= end` run [`Range::sort`] first. The
//! four half-open/closed containment variants are separate operations rather
//! than a policy parameter, so call sites read unambiguously.

use core::cmp::Ordering;
use core::fmt;

use crate::scalar::Scalar;

/// A linear range between `start` and `end` (either order).
///
/// Ordering compares by `start` first and breaks ties on length, with the
/// epsilon rule applied to floating scalars.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    /// Start of the range.
    pub start: T,
    /// End of the range.
    pub end: T,
}

// SAFETY: `#[repr(C)]` with two fields of the same type `T`; no padding for
// any `T`, and bit validity is inherited from `T`.
unsafe impl<T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable for Range<T> {}
unsafe impl<T: Scalar + bytemuck::Pod> bytemuck::Pod for Range<T> {}

impl<T: Scalar> Range<T> {
    /// Creates a range from its endpoints.
    #[inline]
    #[must_use]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Creates a range covering `[start, start + len]`.
    #[inline]
    #[must_use]
    pub fn from_length(start: T, len: T) -> Self {
        Self::new(start, start + len)
    }

    /// Casts both endpoints to another scalar type with native `as`
    /// semantics (via `f64`).
    #[inline]
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Range<U> {
        Range::new(U::from_f64(self.start.to_f64()), U::from_f64(self.end.to_f64()))
    }

    /// Returns a copy with the given start.
    #[inline]
    #[must_use]
    pub fn with_start(self, s: T) -> Self {
        Self::new(s, self.end)
    }

    /// Returns a copy with the given end.
    #[inline]
    #[must_use]
    pub fn with_end(self, e: T) -> Self {
        Self::new(self.start, e)
    }

    /// Returns a copy with the start shifted by `delta`.
    #[inline]
    #[must_use]
    pub fn with_shifted_start(self, delta: T) -> Self {
        Self::new(self.start + delta, self.end)
    }

    /// Returns a copy with the end shifted by `delta`.
    #[inline]
    #[must_use]
    pub fn with_shifted_end(self, delta: T) -> Self {
        Self::new(self.start, self.end + delta)
    }

    /// Returns a copy with the given length, keeping the start.
    #[inline]
    #[must_use]
    pub fn with_length(self, len: T) -> Self {
        Self::new(self.start, self.start + len)
    }

    /// Returns a copy shifted by `delta` on both ends (length preserved).
    #[inline]
    #[must_use]
    pub fn with_shift(self, delta: T) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    /// Returns a copy moved to start at `s` (length preserved).
    #[inline]
    #[must_use]
    pub fn with_move(self, s: T) -> Self {
        Self::new(s, s + self.length())
    }

    /// Sets the start, leaving the end alone.
    #[inline]
    pub fn set_start(&mut self, s: T) -> &mut Self {
        self.start = s;
        self
    }

    /// Sets the end, leaving the start alone.
    #[inline]
    pub fn set_end(&mut self, e: T) -> &mut Self {
        self.end = e;
        self
    }

    /// Moves the range to start at `s`, keeping its length.
    #[inline]
    pub fn move_to(&mut self, s: T) -> &mut Self {
        let len = self.length();
        self.start = s;
        self.end = s + len;
        self
    }

    /// Shifts both ends by `delta`.
    #[inline]
    pub fn shift(&mut self, delta: T) -> &mut Self {
        self.start = self.start + delta;
        self.end = self.end + delta;
        self
    }

    /// Shifts the start by `delta`.
    #[inline]
    pub fn shift_start(&mut self, delta: T) -> &mut Self {
        self.start = self.start + delta;
        self
    }

    /// Shifts the end by `delta`.
    #[inline]
    pub fn shift_end(&mut self, delta: T) -> &mut Self {
        self.end = self.end + delta;
        self
    }

    /// Sets the length, keeping the start.
    #[inline]
    pub fn set_length(&mut self, len: T) -> &mut Self {
        self.end = self.start + len;
        self
    }

    /// Signed length `end - start`.
    #[inline]
    #[must_use]
    pub fn length(self) -> T {
        self.end - self.start
    }

    /// Midpoint, computed in `f64` and cast back to the scalar.
    #[inline]
    #[must_use]
    pub fn middle(self) -> T {
        T::from_f64(self.start.to_f64() + (self.end - self.start).to_f64() * 0.5)
    }

    /// `true` if `start <= end`.
    #[inline]
    #[must_use]
    pub fn is_sorted(self) -> bool {
        self.start <= self.end
    }

    /// `true` if the range is symmetric around zero (`start == -end`).
    #[inline]
    #[must_use]
    pub fn is_symmetric(self) -> bool {
        self.start.approx_eq(-self.end)
    }

    /// `true` if `x` lies in the closed interval `[start, end]`.
    #[inline]
    #[must_use]
    pub fn contains(self, x: T) -> bool {
        x >= self.start && x <= self.end
    }

    /// Same as [`Range::contains`]; spelled out for symmetry with the other
    /// policies.
    #[inline]
    #[must_use]
    pub fn contains_closed(self, x: T) -> bool {
        self.contains(x)
    }

    /// `true` if `x` lies in the open interval `]start, end[`.
    #[inline]
    #[must_use]
    pub fn contains_open(self, x: T) -> bool {
        x > self.start && x < self.end
    }

    /// `true` if `x` lies in `]start, end]`.
    #[inline]
    #[must_use]
    pub fn contains_left_open(self, x: T) -> bool {
        x > self.start && x <= self.end
    }

    /// `true` if `x` lies in `[start, end[`.
    #[inline]
    #[must_use]
    pub fn contains_right_open(self, x: T) -> bool {
        x >= self.start && x < self.end
    }

    /// `true` if `r` lies entirely inside this range (closed on both ends).
    #[inline]
    #[must_use]
    pub fn contains_range(self, r: Self) -> bool {
        self.contains(r.start) && self.contains(r.end)
    }

    /// Clamps `x` to `[start, end]`.
    #[inline]
    #[must_use]
    pub fn clipped_value(self, x: T) -> T {
        let t = if x < self.start { self.start } else { x };
        if t > self.end {
            self.end
        } else {
            t
        }
    }

    /// Swaps the endpoints if the range is unsorted. Idempotent.
    #[inline]
    pub fn sort(&mut self) -> &mut Self {
        if !self.is_sorted() {
            core::mem::swap(&mut self.start, &mut self.end);
        }
        self
    }
}

impl<T: Scalar> PartialEq for Range<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start.approx_eq(other.start) && self.end.approx_eq(other.end)
    }
}

impl<T: Scalar> PartialOrd for Range<T> {
    /// Compares by start, falling back to length when the starts are equal
    /// under the scalar's comparison policy.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.start.approx_eq(other.start) {
            self.length().partial_cmp(&other.length())
        } else {
            self.start.partial_cmp(&other.start)
        }
    }
}

impl<T: Scalar> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_idempotent() {
        let mut r = Range::new(5, 1);
        r.sort();
        assert!(r.is_sorted());
        assert_eq!(r, Range::new(1, 5));
        let once = r;
        r.sort();
        assert_eq!(r, once);
    }

    #[test]
    fn move_and_shift_preserve_length() {
        let mut r = Range::new(2.0f64, 6.0);
        r.move_to(10.0);
        assert_eq!(r, Range::new(10.0, 14.0));
        r.shift(-1.0);
        assert_eq!(r, Range::new(9.0, 13.0));
        assert!((r.length() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn containment_policies_differ_at_endpoints() {
        let r = Range::new(0, 10);
        assert!(r.contains(0) && r.contains(10));
        assert!(!r.contains_open(0) && !r.contains_open(10));
        assert!(!r.contains_left_open(0) && r.contains_left_open(10));
        assert!(r.contains_right_open(0) && !r.contains_right_open(10));
    }

    #[test]
    fn ordering_breaks_ties_on_length() {
        let a = Range::new(0.0f64, 4.0);
        let b = Range::new(0.0f64, 6.0);
        let c = Range::new(1.0f64, 2.0);
        assert!(a < b);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn middle_rounds_through_f64_for_integers() {
        assert_eq!(Range::new(1, 4).middle(), 2); // 2.5 truncates
        assert!((Range::new(1.0f64, 4.0).middle() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn clipped_value_clamps_to_endpoints() {
        let r = Range::new(2, 8);
        assert_eq!(r.clipped_value(1), 2);
        assert_eq!(r.clipped_value(9), 8);
        assert_eq!(r.clipped_value(5), 5);
    }

    #[test]
    fn symmetric_ranges() {
        assert!(Range::new(-3.0f32, 3.0).is_symmetric());
        assert!(!Range::new(-3.0f32, 4.0).is_symmetric());
    }

    #[test]
    fn display_uses_brace_format() {
        assert_eq!(Range::new(1, 5).to_string(), "{1,5}");
    }
}
