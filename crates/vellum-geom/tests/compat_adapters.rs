// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(non_snake_case)]

use vellum_geom::compat::{PointCompat, RectCompat, ShapeFamily, SizeCompat};
use vellum_geom::{adapt_point, adapt_rect, adapt_size, Point, Rect, Size};

// One foreign type per recognized layout, in the shapes interop code
// actually hands us: lowercase GUI structs, capitalized OS structs, a nested
// origin/size pair, and a corner rect.

#[repr(C)]
#[derive(Copy, Clone)]
struct GuiPoint {
    x: f32,
    y: f32,
}
adapt_point!(GuiPoint: f32 { x, y });

#[repr(C)]
#[derive(Copy, Clone)]
struct OsPoint {
    X: i32,
    Y: i32,
}
adapt_point!(OsPoint: i32 { X, Y });

#[repr(C)]
#[derive(Copy, Clone)]
struct GuiSize {
    width: f32,
    height: f32,
}
adapt_size!(GuiSize: f32 { width, height });

#[repr(C)]
#[derive(Copy, Clone)]
struct OsSize {
    Width: i64,
    Height: i64,
}
adapt_size!(OsSize: i64 { Width, Height });

#[repr(C)]
#[derive(Copy, Clone)]
struct GuiRect {
    origin: GuiPoint,
    size: GuiSize,
}
adapt_rect!(GuiRect: f32 { origin, size });

#[repr(C)]
#[derive(Copy, Clone)]
struct CanvasRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}
adapt_rect!(CanvasRect: f64 { x, y, width, height });

#[repr(C)]
#[derive(Copy, Clone)]
struct OsRect {
    X: i32,
    Y: i32,
    Width: i32,
    Height: i32,
}
adapt_rect!(OsRect: i32 { X, Y, Width, Height });

#[repr(C)]
#[derive(Copy, Clone)]
struct CornerRect {
    left: i16,
    top: i16,
    right: i16,
    bottom: i16,
}
adapt_rect!(CornerRect: i16 { left, top, right, bottom });

#[test]
fn every_adapter_reports_its_family() {
    assert_eq!(GuiPoint::FAMILY, ShapeFamily::PointXy);
    assert_eq!(OsPoint::FAMILY, ShapeFamily::PointUpperXy);
    assert_eq!(GuiSize::FAMILY, ShapeFamily::SizeWh);
    assert_eq!(OsSize::FAMILY, ShapeFamily::SizeUpperWh);
    assert_eq!(GuiRect::FAMILY, ShapeFamily::RectOriginSize);
    assert_eq!(CanvasRect::FAMILY, ShapeFamily::RectXywh);
    assert_eq!(OsRect::FAMILY, ShapeFamily::RectUpperXywh);
    assert_eq!(CornerRect::FAMILY, ShapeFamily::RectLtrb);
}

#[test]
fn point_adapters_round_trip() {
    let p = Point::<f32>::from_compat(GuiPoint { x: 1.5, y: -2.5 });
    assert_eq!(p, Point::new(1.5, -2.5));
    let back: GuiPoint = p.to_compat();
    assert_eq!(back.x, 1.5);
    assert_eq!(back.y, -2.5);

    let q = Point::<i32>::from_compat(OsPoint { X: 7, Y: 9 });
    assert_eq!(q, Point::new(7, 9));
    let os: OsPoint = q.to_compat();
    assert_eq!(os.X, 7);
    assert_eq!(os.Y, 9);
}

#[test]
fn size_adapters_round_trip() {
    let s = Size::<f32>::from_compat(GuiSize {
        width: 4.0,
        height: 6.0,
    });
    assert_eq!(s, Size::new(4.0, 6.0));

    let big: OsSize = Size::new(800i64, 600).to_compat();
    assert_eq!(big.Width, 800);
    assert_eq!(big.Height, 600);
}

#[test]
fn nested_origin_size_rect_adapts_through_its_parts() {
    let foreign = GuiRect {
        origin: GuiPoint { x: 1.0, y: 2.0 },
        size: GuiSize {
            width: 3.0,
            height: 4.0,
        },
    };
    let r = Rect::<f32>::from_compat(foreign);
    assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));

    let back: GuiRect = r.to_compat();
    assert_eq!(back.origin.x, 1.0);
    assert_eq!(back.size.height, 4.0);
}

#[test]
fn corner_rect_converts_between_representations() {
    let r = Rect::<i16>::from_compat(CornerRect {
        left: 10,
        top: 20,
        right: 30,
        bottom: 60,
    });
    assert_eq!(r, Rect::new(10, 20, 20, 40));

    let c: CornerRect = r.to_compat();
    assert_eq!(c.right, 30);
    assert_eq!(c.bottom, 60);
}

#[test]
fn conversion_casts_across_scalar_types() {
    // A pixel-space i32 rect lifted into f64 user space and back.
    let r = Rect::<f64>::from_compat(OsRect {
        X: 3,
        Y: 4,
        Width: 5,
        Height: 6,
    });
    assert_eq!(r, Rect::new(3.0, 4.0, 5.0, 6.0));

    // Fractional coordinates truncate with native `as` semantics.
    let os: OsRect = Rect::new(1.9f64, -2.9, 3.5, 4.5).to_compat();
    assert_eq!((os.X, os.Y, os.Width, os.Height), (1, -2, 3, 4));

    let p: GuiPoint = Point::new(1i32, 2).to_compat();
    assert_eq!(p.x, 1.0);
}
