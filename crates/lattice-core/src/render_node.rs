//! The immutable result of layout.
//!
//! A render node stores its resolved size, optional element content,
//! optional explicit key and the laid-out children with their offsets
//! relative to this node's origin. Nodes are built once by `layout` and
//! never mutated; the tree is owned, so it cannot contain cycles.

use lattice_ui_layout::{Point, Rect, Size};

use crate::content::ElementContent;

/// A laid-out child: relative position plus subtree.
#[derive(Clone, Debug)]
pub struct RenderChild {
    pub offset: Point,
    pub node: RenderNode,
}

impl RenderChild {
    pub fn new(offset: Point, node: RenderNode) -> Self {
        Self { offset, node }
    }
}

/// Immutable, positioned layout result produced by a component.
#[derive(Clone, Debug)]
pub struct RenderNode {
    size: Size,
    content: Option<ElementContent>,
    key: Option<u64>,
    children: Vec<RenderChild>,
    /// Union of this node's own frame and every descendant frame, in this
    /// node's local coordinates. Lets viewport enumeration skip whole
    /// subtrees, including overlays extending outside their parent.
    subtree_bounds: Rect,
}

impl RenderNode {
    /// A contentless leaf. Occupies space but binds no element.
    pub fn leaf(size: Size) -> Self {
        Self {
            size,
            content: None,
            key: None,
            children: Vec::new(),
            subtree_bounds: Rect::from_origin_size(Point::ZERO, size),
        }
    }

    /// A leaf carrying element content.
    pub fn with_content(size: Size, content: ElementContent) -> Self {
        Self {
            content: Some(content),
            ..Self::leaf(size)
        }
    }

    /// A container owning laid-out children.
    pub fn container(size: Size, children: Vec<RenderChild>) -> Self {
        let mut bounds = Rect::from_origin_size(Point::ZERO, size);
        for child in &children {
            let child_bounds = child
                .node
                .subtree_bounds
                .translate(child.offset.x, child.offset.y);
            bounds = bounds.union(&child_bounds);
        }
        Self {
            size,
            content: None,
            key: None,
            children,
            subtree_bounds: bounds,
        }
    }

    /// Stamps an explicit identity key on this node.
    pub fn keyed(mut self, key: u64) -> Self {
        self.key = Some(key);
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn content(&self) -> Option<&ElementContent> {
        self.content.as_ref()
    }

    pub fn key(&self) -> Option<u64> {
        self.key
    }

    pub fn children(&self) -> &[RenderChild] {
        &self.children
    }

    pub fn subtree_bounds(&self) -> Rect {
        self.subtree_bounds
    }

    /// Total node count of this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.node.node_count())
            .sum::<usize>()
    }
}
