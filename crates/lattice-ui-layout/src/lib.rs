//! Geometry and constraint primitives shared by every lattice crate.
//!
//! Everything in this crate is plain value arithmetic: sizes, points,
//! rectangles, edge insets, min/max constraints and the axis/alignment
//! enums the combinators dispatch on. Nothing here allocates or fails.

mod axis;
mod constraints;
mod geometry;

pub use axis::{Axis, CrossAlignment, OverlayAlignment};
pub use constraints::Constraints;
pub use geometry::{EdgeInsets, Point, Rect, Size};
