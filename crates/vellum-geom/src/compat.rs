// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compile-time structural adaptation of foreign geometry types.
//!
//! Host code rarely gets to choose its geometry types: windowing, rendering,
//! and OS interop layers each bring their own point/size/rect aggregates.
//! This module lets any such foreign type convert to and from the Vellum
//! primitives without depending on this crate's types anywhere else, and
//! with zero runtime cost.
//!
//! A foreign type opts in with one macro invocation naming its fields in
//! declared order:
//!
//! ```
//! use vellum_geom::{adapt_point, adapt_rect, Point, Rect};
//!
//! #[repr(C)]
//! #[derive(Copy, Clone)]
//! struct WinPoint {
//!     x: f32,
//!     y: f32,
//! }
//! adapt_point!(WinPoint: f32 { x, y });
//!
//! #[repr(C)]
//! #[derive(Copy, Clone)]
//! struct WinRect {
//!     left: f32,
//!     top: f32,
//!     right: f32,
//!     bottom: f32,
//! }
//! adapt_rect!(WinRect: f32 { left, top, right, bottom });
//!
//! let r = Rect::<f32>::from_compat(WinRect { left: 1.0, top: 2.0, right: 4.0, bottom: 6.0 });
//! assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
//! let p: WinPoint = Point::new(3.0f32, 4.0).to_compat();
//! assert_eq!(p.x, 3.0);
//! ```
//!
//! ## Recognized shape families
//!
//! Exactly eight layouts are recognized, one macro arm each:
//!
//! - point-like: `{x, y}`, `{X, Y}`;
//! - size-like: `{width, height}`, `{Width, Height}`;
//! - rect-like: nested `{origin, size}` (whose fields are themselves
//!   point-/size-compatible), flat `{x, y, width, height}`, flat
//!   `{X, Y, Width, Height}`, and `{left, top, right, bottom}` read as two
//!   opposite corners (`width = right - left`, `height = bottom - top`).
//!
//! ## Compile-time rejection
//!
//! Every arm expands to `const` assertions over [`core::mem::offset_of!`]:
//! the first field must sit at offset 0 and each subsequent field one scalar
//! further. Matching is therefore by *memory order*, not merely by name — a
//! type declaring `{y, x}` is rejected at build time, because a name-only
//! match would silently swap coordinates. Field types are checked against
//! the declared scalar by ordinary type checking of the generated impl.
//!
//! A type that never opts in simply has no `*Compat` impl, so any attempted
//! conversion is a trait-bound error. At most one family can match a given
//! type per primitive kind: the impls below are ordinary trait impls, and
//! coherence forbids duplicates.
//!
//! Foreign types intended for adaptation should be `#[repr(C)]`; the offset
//! assertions check the layout the compiler actually chose.

use crate::scalar::Scalar;
use crate::{Point, Rect, Size};

/// The fixed set of recognized foreign layouts.
///
/// Carried as an associated `const` on the compat traits so generic code and
/// diagnostics can name the family a foreign type matched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Point as `{x, y}`.
    PointXy,
    /// Point as `{X, Y}`.
    PointUpperXy,
    /// Size as `{width, height}`.
    SizeWh,
    /// Size as `{Width, Height}`.
    SizeUpperWh,
    /// Rect as nested `{origin, size}`.
    RectOriginSize,
    /// Rect as flat `{x, y, width, height}`.
    RectXywh,
    /// Rect as flat `{X, Y, Width, Height}`.
    RectUpperXywh,
    /// Rect as `{left, top, right, bottom}` corner pairs.
    RectLtrb,
}

/// Foreign types structurally compatible with [`Point`].
///
/// Implemented by [`adapt_point!`]; do not implement by hand, the macro is
/// what carries the layout proof.
pub trait PointCompat: Copy {
    /// Scalar type of the foreign fields.
    type Scalar: Scalar;
    /// Layout family this type matched.
    const FAMILY: ShapeFamily;

    /// Reads the foreign value into a [`Point`].
    fn to_point(self) -> Point<Self::Scalar>;

    /// Builds the foreign value from a [`Point`].
    fn from_point(p: Point<Self::Scalar>) -> Self;
}

/// Foreign types structurally compatible with [`Size`].
///
/// Implemented by [`adapt_size!`].
pub trait SizeCompat: Copy {
    /// Scalar type of the foreign fields.
    type Scalar: Scalar;
    /// Layout family this type matched.
    const FAMILY: ShapeFamily;

    /// Reads the foreign value into a [`Size`].
    fn to_size(self) -> Size<Self::Scalar>;

    /// Builds the foreign value from a [`Size`].
    fn from_size(s: Size<Self::Scalar>) -> Self;
}

/// Foreign types structurally compatible with [`Rect`].
///
/// Implemented by [`adapt_rect!`].
pub trait RectCompat: Copy {
    /// Scalar type of the foreign fields.
    type Scalar: Scalar;
    /// Layout family this type matched.
    const FAMILY: ShapeFamily;

    /// Reads the foreign value into a [`Rect`].
    fn to_rect(self) -> Rect<Self::Scalar>;

    /// Builds the foreign value from a [`Rect`].
    fn from_rect(r: Rect<Self::Scalar>) -> Self;
}

/// Adapts a foreign point-like type.
///
/// Arms: `Type: Scalar { x, y }` and `Type: Scalar { X, Y }`. The fields must
/// be declared in that memory order; anything else fails to compile.
#[macro_export]
macro_rules! adapt_point {
    ($ty:ty : $s:ty { x, y }) => {
        $crate::__vellum_adapt_point!($ty, $s, x, y, PointXy);
    };
    ($ty:ty : $s:ty { X, Y }) => {
        $crate::__vellum_adapt_point!($ty, $s, X, Y, PointUpperXy);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vellum_adapt_point {
    ($ty:ty, $s:ty, $fx:ident, $fy:ident, $family:ident) => {
        const _: () = {
            assert!(
                ::core::mem::offset_of!($ty, $fx) == 0,
                "point-compatible type must start with its first coordinate"
            );
            assert!(
                ::core::mem::offset_of!($ty, $fy) == ::core::mem::size_of::<$s>(),
                "point-compatible fields must be contiguous in declared order"
            );
        };

        impl $crate::compat::PointCompat for $ty {
            type Scalar = $s;
            const FAMILY: $crate::compat::ShapeFamily = $crate::compat::ShapeFamily::$family;

            #[inline]
            fn to_point(self) -> $crate::Point<$s> {
                $crate::Point::new(self.$fx, self.$fy)
            }

            #[inline]
            fn from_point(p: $crate::Point<$s>) -> Self {
                Self { $fx: p.x, $fy: p.y }
            }
        }
    };
}

/// Adapts a foreign size-like type.
///
/// Arms: `Type: Scalar { width, height }` and `Type: Scalar { Width, Height }`.
#[macro_export]
macro_rules! adapt_size {
    ($ty:ty : $s:ty { width, height }) => {
        $crate::__vellum_adapt_size!($ty, $s, width, height, SizeWh);
    };
    ($ty:ty : $s:ty { Width, Height }) => {
        $crate::__vellum_adapt_size!($ty, $s, Width, Height, SizeUpperWh);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vellum_adapt_size {
    ($ty:ty, $s:ty, $fw:ident, $fh:ident, $family:ident) => {
        const _: () = {
            assert!(
                ::core::mem::offset_of!($ty, $fw) == 0,
                "size-compatible type must start with its width field"
            );
            assert!(
                ::core::mem::offset_of!($ty, $fh) == ::core::mem::size_of::<$s>(),
                "size-compatible fields must be contiguous in declared order"
            );
        };

        impl $crate::compat::SizeCompat for $ty {
            type Scalar = $s;
            const FAMILY: $crate::compat::ShapeFamily = $crate::compat::ShapeFamily::$family;

            #[inline]
            fn to_size(self) -> $crate::Size<$s> {
                $crate::Size::new(self.$fw, self.$fh)
            }

            #[inline]
            fn from_size(s: $crate::Size<$s>) -> Self {
                Self {
                    $fw: s.width,
                    $fh: s.height,
                }
            }
        }
    };
}

/// Adapts a foreign rect-like type.
///
/// Arms, mutually exclusive by construction:
///
/// - `Type: Scalar { origin, size }` — nested; `origin`'s type must itself be
///   point-compatible and `size`'s type size-compatible, over the same scalar;
/// - `Type: Scalar { x, y, width, height }`;
/// - `Type: Scalar { X, Y, Width, Height }`;
/// - `Type: Scalar { left, top, right, bottom }` — opposite corners, so
///   `width = right - left` and `height = bottom - top` on the way in, and the
///   sums on the way out.
#[macro_export]
macro_rules! adapt_rect {
    ($ty:ty : $s:ty { origin, size }) => {
        const _: () = {
            assert!(
                ::core::mem::offset_of!($ty, origin) == 0,
                "origin/size rect must start with its origin"
            );
            assert!(
                ::core::mem::offset_of!($ty, size) == 2 * ::core::mem::size_of::<$s>(),
                "origin/size rect must pack its size right after the origin"
            );
        };

        impl $crate::compat::RectCompat for $ty {
            type Scalar = $s;
            const FAMILY: $crate::compat::ShapeFamily =
                $crate::compat::ShapeFamily::RectOriginSize;

            #[inline]
            fn to_rect(self) -> $crate::Rect<$s> {
                $crate::Rect::from_origin_size(
                    $crate::compat::PointCompat::to_point(self.origin),
                    $crate::compat::SizeCompat::to_size(self.size),
                )
            }

            #[inline]
            fn from_rect(r: $crate::Rect<$s>) -> Self {
                Self {
                    origin: $crate::compat::PointCompat::from_point(r.origin()),
                    size: $crate::compat::SizeCompat::from_size(r.size()),
                }
            }
        }
    };
    ($ty:ty : $s:ty { x, y, width, height }) => {
        $crate::__vellum_adapt_rect_flat!($ty, $s, x, y, width, height, RectXywh);
    };
    ($ty:ty : $s:ty { X, Y, Width, Height }) => {
        $crate::__vellum_adapt_rect_flat!($ty, $s, X, Y, Width, Height, RectUpperXywh);
    };
    ($ty:ty : $s:ty { left, top, right, bottom }) => {
        const _: () = {
            assert!(
                ::core::mem::offset_of!($ty, left) == 0,
                "corner rect must start with its left field"
            );
            assert!(
                ::core::mem::offset_of!($ty, top) == ::core::mem::size_of::<$s>(),
                "corner rect fields must be contiguous in declared order"
            );
            assert!(
                ::core::mem::offset_of!($ty, right) == 2 * ::core::mem::size_of::<$s>(),
                "corner rect fields must be contiguous in declared order"
            );
            assert!(
                ::core::mem::offset_of!($ty, bottom) == 3 * ::core::mem::size_of::<$s>(),
                "corner rect fields must be contiguous in declared order"
            );
        };

        impl $crate::compat::RectCompat for $ty {
            type Scalar = $s;
            const FAMILY: $crate::compat::ShapeFamily = $crate::compat::ShapeFamily::RectLtrb;

            #[inline]
            fn to_rect(self) -> $crate::Rect<$s> {
                $crate::Rect::new(
                    self.left,
                    self.top,
                    self.right - self.left,
                    self.bottom - self.top,
                )
            }

            #[inline]
            fn from_rect(r: $crate::Rect<$s>) -> Self {
                Self {
                    left: r.x,
                    top: r.y,
                    right: r.x + r.width,
                    bottom: r.y + r.height,
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vellum_adapt_rect_flat {
    ($ty:ty, $s:ty, $fx:ident, $fy:ident, $fw:ident, $fh:ident, $family:ident) => {
        const _: () = {
            assert!(
                ::core::mem::offset_of!($ty, $fx) == 0,
                "flat rect must start with its x field"
            );
            assert!(
                ::core::mem::offset_of!($ty, $fy) == ::core::mem::size_of::<$s>(),
                "flat rect fields must be contiguous in declared order"
            );
            assert!(
                ::core::mem::offset_of!($ty, $fw) == 2 * ::core::mem::size_of::<$s>(),
                "flat rect fields must be contiguous in declared order"
            );
            assert!(
                ::core::mem::offset_of!($ty, $fh) == 3 * ::core::mem::size_of::<$s>(),
                "flat rect fields must be contiguous in declared order"
            );
        };

        impl $crate::compat::RectCompat for $ty {
            type Scalar = $s;
            const FAMILY: $crate::compat::ShapeFamily = $crate::compat::ShapeFamily::$family;

            #[inline]
            fn to_rect(self) -> $crate::Rect<$s> {
                $crate::Rect::new(self.$fx, self.$fy, self.$fw, self.$fh)
            }

            #[inline]
            fn from_rect(r: $crate::Rect<$s>) -> Self {
                Self {
                    $fx: r.x,
                    $fy: r.y,
                    $fw: r.width,
                    $fh: r.height,
                }
            }
        }
    };
}
