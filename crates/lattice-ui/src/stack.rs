//! Linear stack combinator.

#![allow(non_snake_case)]

use lattice_core::{
    AnyComponent, Axis, Component, Constraints, CrossAlignment, RenderChild, RenderNode,
};

/// Sequential main-axis layout without wrapping.
///
/// Each child sees the cross-axis max fixed and the main-axis max reduced
/// by the space already consumed (an unbounded main axis stays unbounded).
/// Container size is (sum of main extents + spacing, max cross extent)
/// clamped into the incoming constraints.
pub struct Stack {
    axis: Axis,
    spacing: f32,
    alignment: CrossAlignment,
    children: Vec<AnyComponent>,
}

/// Horizontal stack.
pub fn HStack(children: Vec<AnyComponent>) -> Stack {
    Stack::new(Axis::Horizontal, children)
}

/// Vertical stack.
pub fn VStack(children: Vec<AnyComponent>) -> Stack {
    Stack::new(Axis::Vertical, children)
}

impl Stack {
    pub fn new(axis: Axis, children: Vec<AnyComponent>) -> Self {
        Self {
            axis,
            spacing: 0.0,
            alignment: CrossAlignment::Start,
            children,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn child_constraints(&self, remaining_main: f32, cross_max: f32) -> Constraints {
        let main_max = remaining_main.max(0.0);
        let (cross_min, cross_max) = match self.alignment {
            CrossAlignment::Stretch if cross_max.is_finite() => (cross_max, cross_max),
            _ => (0.0, cross_max),
        };
        match self.axis {
            Axis::Horizontal => Constraints::new(0.0, main_max, cross_min, cross_max),
            Axis::Vertical => Constraints::new(cross_min, cross_max, 0.0, main_max),
        }
    }
}

impl Component for Stack {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let cross_max = self.axis.cross_max(&constraints);
        let mut remaining = self.axis.main_max(&constraints);
        let mut nodes = Vec::with_capacity(self.children.len());

        let mut main_total = 0.0f32;
        let mut cross_total = 0.0f32;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                remaining -= self.spacing;
                main_total += self.spacing;
            }
            let node = child.layout(self.child_constraints(remaining, cross_max));
            remaining -= self.axis.main_extent(node.size());
            main_total += self.axis.main_extent(node.size());
            cross_total = cross_total.max(self.axis.cross_extent(node.size()));
            nodes.push(node);
        }

        let size = constraints.constrain(self.axis.size(main_total, cross_total));
        let container_cross = self.axis.cross_extent(size);

        let mut children = Vec::with_capacity(nodes.len());
        let mut cursor = 0.0f32;
        for node in nodes {
            let cross = self
                .alignment
                .offset(container_cross, self.axis.cross_extent(node.size()));
            let main = cursor;
            cursor += self.axis.main_extent(node.size()) + self.spacing;
            children.push(RenderChild::new(self.axis.point(main, cross), node));
        }
        RenderNode::container(size, children)
    }
}
