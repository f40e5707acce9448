//! Wrapping flow combinator.

use lattice_core::{AnyComponent, Component, Constraints, Point, RenderChild, RenderNode};

/// Packs children left-to-right, wrapping to a new row when the next child
/// would strictly exceed the remaining line width.
///
/// Tie-break rules: a child exactly filling the remaining space does not
/// wrap; a child wider than the whole line is placed alone on its own row
/// and may overflow, it is never split. An unbounded max width produces a
/// single row.
pub struct Flow {
    spacing: f32,
    line_spacing: f32,
    children: Vec<AnyComponent>,
}

impl Flow {
    pub fn new(children: Vec<AnyComponent>) -> Self {
        Self {
            spacing: 0.0,
            line_spacing: 0.0,
            children,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

impl Component for Flow {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let line_width = constraints.max_width;
        let child_constraints =
            Constraints::new(0.0, constraints.max_width, 0.0, f32::INFINITY);

        let mut children: Vec<RenderChild> = Vec::with_capacity(self.children.len());
        let mut cursor_x = 0.0f32;
        let mut row_top = 0.0f32;
        let mut row_height = 0.0f32;
        let mut row_used = false;
        let mut widest_row = 0.0f32;

        for child in &self.children {
            let node = child.layout(child_constraints);
            let width = node.size().width;

            let extended = if row_used {
                cursor_x + self.spacing + width
            } else {
                width
            };
            if row_used && extended > line_width {
                // Commit the current row and start a new one.
                widest_row = widest_row.max(cursor_x);
                row_top += row_height + self.line_spacing;
                cursor_x = 0.0;
                row_height = 0.0;
                row_used = false;
            }

            if !row_used && width > line_width {
                log::warn!(
                    "flow child wider than the line ({width} > {line_width}), \
                     placing it alone and letting it overflow"
                );
            }
            let x = if row_used {
                cursor_x + self.spacing
            } else {
                0.0
            };
            cursor_x = x + width;
            row_height = row_height.max(node.size().height);
            row_used = true;
            children.push(RenderChild::new(Point::new(x, row_top), node));
        }
        widest_row = widest_row.max(cursor_x);

        let total_height = if row_used {
            row_top + row_height
        } else {
            row_top
        };
        let size = constraints.constrain(lattice_core::Size::new(widest_row, total_height));
        RenderNode::container(size, children)
    }
}
