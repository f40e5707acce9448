//! Axis and alignment enums shared by the stack, flow and overlay
//! combinators.
//!
//! Stacks run one algorithm parameterized by [`Axis`] instead of two
//! near-identical horizontal/vertical implementations; the enum knows how
//! to split and recombine main/cross extents.

use crate::constraints::Constraints;
use crate::geometry::{Point, Size};

/// Main-axis orientation of a linear container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn main_extent(&self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    pub fn cross_extent(&self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Recombines main/cross extents into a size.
    pub fn size(&self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Recombines main/cross offsets into a point.
    pub fn point(&self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    pub fn main_max(&self, constraints: &Constraints) -> f32 {
        match self {
            Axis::Horizontal => constraints.max_width,
            Axis::Vertical => constraints.max_height,
        }
    }

    pub fn cross_max(&self, constraints: &Constraints) -> f32 {
        match self {
            Axis::Horizontal => constraints.max_height,
            Axis::Vertical => constraints.max_width,
        }
    }
}

/// Cross-axis placement of a child inside a linear container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAlignment {
    #[default]
    Start,
    Center,
    End,
    /// Forces the child's cross-axis constraint to the container extent
    /// when it is finite.
    Stretch,
}

impl CrossAlignment {
    /// Offset of a child of extent `child` inside a container of extent
    /// `container` along the cross axis.
    pub fn offset(&self, container: f32, child: f32) -> f32 {
        match self {
            CrossAlignment::Start | CrossAlignment::Stretch => 0.0,
            CrossAlignment::Center => (container - child) / 2.0,
            CrossAlignment::End => container - child,
        }
    }
}

/// Per-axis placement of an overlay child relative to its primary.
///
/// `Before` and `After` place the child fully outside the primary's bounds
/// on that axis without affecting the container size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayAlignment {
    #[default]
    Start,
    Center,
    End,
    /// Forces min = max = primary extent on this axis.
    Stretch,
    /// Placed entirely before the primary's leading edge.
    Before,
    /// Placed entirely after the primary's trailing edge.
    After,
}

impl OverlayAlignment {
    /// Base offset of an overlay child of extent `child` against a primary
    /// of extent `primary`, before the explicit user offset is added.
    ///
    /// `After` depends only on the primary extent, so the overlay's own
    /// size never shifts its anchor.
    pub fn offset(&self, primary: f32, child: f32) -> f32 {
        match self {
            OverlayAlignment::Start | OverlayAlignment::Stretch => 0.0,
            OverlayAlignment::Center => (primary - child) / 2.0,
            OverlayAlignment::End => primary - child,
            OverlayAlignment::Before => -child,
            OverlayAlignment::After => primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_roundtrip() {
        let s = Size::new(30.0, 40.0);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let rebuilt = axis.size(axis.main_extent(s), axis.cross_extent(s));
            assert_eq!(rebuilt, s);
        }
    }

    #[test]
    fn test_cross_alignment_offsets() {
        assert_eq!(CrossAlignment::Start.offset(100.0, 40.0), 0.0);
        assert_eq!(CrossAlignment::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(CrossAlignment::End.offset(100.0, 40.0), 60.0);
        assert_eq!(CrossAlignment::Stretch.offset(100.0, 40.0), 0.0);
    }

    #[test]
    fn test_overlay_after_ignores_child_extent() {
        assert_eq!(OverlayAlignment::After.offset(100.0, 10.0), 100.0);
        assert_eq!(OverlayAlignment::After.offset(100.0, 500.0), 100.0);
        assert_eq!(OverlayAlignment::Before.offset(100.0, 10.0), -10.0);
    }
}
