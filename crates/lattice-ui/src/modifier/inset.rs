//! Padding-style inset modifier.

use lattice_core::{
    AnyComponent, Component, Constraints, EdgeInsets, Point, RenderChild, RenderNode, Size,
};

/// Insets its child on all four edges.
///
/// The child sees the constraint shrunk by the insets (floored at zero);
/// the reported size is the child's size with the insets added back.
pub struct Inset {
    child: AnyComponent,
    insets: EdgeInsets,
}

impl Inset {
    pub fn new(child: impl Component + 'static, insets: EdgeInsets) -> Self {
        Self {
            child: Box::new(child),
            insets,
        }
    }

    pub fn uniform(child: impl Component + 'static, inset: f32) -> Self {
        Self::new(child, EdgeInsets::uniform(inset))
    }
}

impl Component for Inset {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let inner = self.child.layout(constraints.inset(self.insets));
        let size = Size::new(
            inner.size().width + self.insets.horizontal_sum(),
            inner.size().height + self.insets.vertical_sum(),
        );
        RenderNode::container(
            size,
            vec![RenderChild::new(
                Point::new(self.insets.left, self.insets.top),
                inner,
            )],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Space;

    #[test]
    fn test_inset_adds_back_after_layout() {
        let node = Inset::uniform(Space::new(50.0, 20.0), 8.0).layout(Constraints::unbounded());
        assert_eq!(node.size(), Size::new(66.0, 36.0));
        assert_eq!(node.children()[0].offset, Point::new(8.0, 8.0));
    }

    #[test]
    fn test_child_constraint_shrinks_floored_at_zero() {
        // A fill child inside a 10pt-wide bound with 8pt insets gets a
        // 0-wide max on the horizontal axis, not a negative one.
        let node = Inset::uniform(Space::fill(), 8.0)
            .layout(Constraints::loose(Size::new(10.0, 100.0)));
        assert_eq!(node.children()[0].node.size().width, 0.0);
    }
}
