//! Alignment modifier.

use lattice_core::{
    AnyComponent, Component, Constraints, CrossAlignment, Point, RenderChild, RenderNode, Size,
};

/// Positions its child inside the available bounds.
///
/// The reported size expands to the finite max on each axis (falling back
/// to the child's extent when unbounded); `Stretch` tightens the child's
/// constraint on that axis instead of offsetting it.
pub struct Align {
    child: AnyComponent,
    horizontal: CrossAlignment,
    vertical: CrossAlignment,
}

impl Align {
    pub fn new(
        child: impl Component + 'static,
        horizontal: CrossAlignment,
        vertical: CrossAlignment,
    ) -> Self {
        Self {
            child: Box::new(child),
            horizontal,
            vertical,
        }
    }

    pub fn center(child: impl Component + 'static) -> Self {
        Self::new(child, CrossAlignment::Center, CrossAlignment::Center)
    }
}

impl Component for Align {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let child_constraints = Constraints::new(
            match self.horizontal {
                CrossAlignment::Stretch if constraints.has_bounded_width() => constraints.max_width,
                _ => 0.0,
            },
            constraints.max_width,
            match self.vertical {
                CrossAlignment::Stretch if constraints.has_bounded_height() => {
                    constraints.max_height
                }
                _ => 0.0,
            },
            constraints.max_height,
        );
        let child = self.child.layout(child_constraints);

        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            child.size().width.max(constraints.min_width)
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            child.size().height.max(constraints.min_height)
        };

        let offset = Point::new(
            self.horizontal.offset(width, child.size().width),
            self.vertical.offset(height, child.size().height),
        );
        RenderNode::container(
            Size::new(width, height),
            vec![RenderChild::new(offset, child)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Space;

    #[test]
    fn test_center_offsets_child() {
        let node = Align::center(Space::new(20.0, 10.0))
            .layout(Constraints::loose(Size::new(100.0, 50.0)));
        assert_eq!(node.size(), Size::new(100.0, 50.0));
        assert_eq!(node.children()[0].offset, Point::new(40.0, 20.0));
    }

    #[test]
    fn test_stretch_tightens_child_axis() {
        let node = Align::new(
            Space::new(20.0, 10.0),
            CrossAlignment::Stretch,
            CrossAlignment::Start,
        )
        .layout(Constraints::loose(Size::new(100.0, 50.0)));
        assert_eq!(node.children()[0].node.size().width, 100.0);
        assert_eq!(node.children()[0].offset, Point::ZERO);
    }

    #[test]
    fn test_unbounded_axis_shrinks_to_child() {
        let node = Align::center(Space::new(20.0, 10.0)).layout(Constraints::unbounded());
        assert_eq!(node.size(), Size::new(20.0, 10.0));
    }
}
