// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry primitives for Vellum.

This crate provides:
- Linear ranges (`Range`) with five containment policies.
- 2D points, sizes, and edge insets (`Point`, `Size`, `Padding`).
- Axis-aligned rectangles (`Rect`) with origin/size and flat x/y/width/height
  views over the same storage.
- Free-form quadrilaterals (`Quad`) and 2D affine transforms
  (`AffineTransform`).
- A compile-time structural adaptation layer (`compat`) that converts the
  primitives to and from foreign aggregate types with recognized field
  layouts, validated by field offsets.

Design notes:
- Plain value semantics throughout: every type is `Copy`, `#[repr(C)]`, and
  `bytemuck::Pod` for `Pod` scalars, so callers may rely on byte-wise copies.
- Equality on floating scalars tolerates one epsilon scaled by the larger
  operand; integral scalars compare exactly.
- No I/O, no allocation, no shared state; every operation is a pure
  computation over its arguments.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Structural adaptation of foreign point/size/rect types.
pub mod compat;
/// Scalar arithmetic abstraction shared by all primitives.
pub mod scalar;
/// Foundational geometric value types.
pub mod types;

pub use scalar::{FloatScalar, Scalar};
pub use types::padding::Padding;
pub use types::point::Point;
pub use types::quad::Quad;
pub use types::range::Range;
pub use types::rect::Rect;
pub use types::size::Size;
pub use types::transform::AffineTransform;
