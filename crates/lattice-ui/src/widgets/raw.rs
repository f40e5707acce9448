//! Escape hatch wrapping a host-supplied element.

use std::rc::Rc;

use lattice_core::{Component, Constraints, ContentApplier, ElementContent, RenderNode, ReuseTag};

use crate::content::RAW_TAG;
use crate::sizing::Sizing;

/// Wraps an arbitrary host element: the caller supplies the reuse tag, the
/// applier and a per-axis sizing policy. The engine treats the payload as
/// opaque.
#[derive(Clone)]
pub struct Raw {
    tag: ReuseTag,
    applier: Rc<dyn ContentApplier>,
    width: Sizing,
    height: Sizing,
}

impl Raw {
    pub fn new(applier: Rc<dyn ContentApplier>, width: f32, height: f32) -> Self {
        Self {
            tag: RAW_TAG,
            applier,
            width: Sizing::Fixed(width),
            height: Sizing::Fixed(height),
        }
    }

    pub fn tag(mut self, tag: ReuseTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn sizing(mut self, width: Sizing, height: Sizing) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Component for Raw {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let width = self.width.resolve(
            constraints.min_width,
            constraints.max_width,
            self.width.intrinsic(),
        );
        let height = self.height.resolve(
            constraints.min_height,
            constraints.max_height,
            self.height.intrinsic(),
        );
        RenderNode::with_content(
            lattice_core::Size::new(width, height),
            ElementContent::new(self.tag, Rc::clone(&self.applier)),
        )
    }
}
