// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry value types.
//!
//! Layout notes:
//! - Every type here is `#[repr(C)]` with homogeneous scalar fields, so the
//!   layout is fixed and padding-free for any scalar; `bytemuck::Pod` impls
//!   make the byte-copy contract explicit.
//! - Rect stores the flat `x/y/width/height` fields and synthesizes
//!   `Point`/`Size` views by value, so writes through either view are
//!   immediately visible through the other.
//! - Equality everywhere follows the scalar policy: epsilon-tolerant for
//!   floats, exact for integers.

#[doc = "Edge insets (top/left/bottom/right)."]
pub mod padding;
#[doc = "2D points."]
pub mod point;
#[doc = "Four-corner quadrilaterals."]
pub mod quad;
#[doc = "1D linear ranges."]
pub mod range;
#[doc = "Axis-aligned rectangles with dual views."]
pub mod rect;
#[doc = "2D sizes."]
pub mod size;
#[doc = "2D affine transforms."]
pub mod transform;
