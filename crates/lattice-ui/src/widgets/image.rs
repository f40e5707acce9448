//! Image leaf with aspect-preserving sizing.

use std::rc::Rc;

use lattice_core::{Component, Constraints, ElementContent, RenderNode, Size};

use crate::content::{ImageContent, IMAGE_TAG};

/// How an image resolves its base size against the constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// Shrink-only: never exceeds the intrinsic size.
    #[default]
    Fit,
    /// Scales up or down to the largest aspect-preserving size fitting the
    /// finite max bounds.
    Fill,
}

/// An image leaf. `source` is host-resolved; the intrinsic size drives the
/// aspect arithmetic.
#[derive(Clone, Debug)]
pub struct Image {
    source: String,
    intrinsic: Size,
    mode: ScaleMode,
}

impl Image {
    pub fn new(source: impl Into<String>, intrinsic: Size) -> Self {
        Self {
            source: source.into(),
            intrinsic,
            mode: ScaleMode::Fit,
        }
    }

    pub fn scale_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Component for Image {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let scaled = match self.mode {
            ScaleMode::Fit => self.intrinsic.scaled_to_fit(&constraints),
            ScaleMode::Fill => self.intrinsic.scaled_to_fill(&constraints),
        };
        let size = Size::new(
            scaled.width.max(constraints.min_width),
            scaled.height.max(constraints.min_height),
        );
        RenderNode::with_content(
            size,
            ElementContent::new(
                IMAGE_TAG,
                Rc::new(ImageContent {
                    source: self.source.clone(),
                }),
            ),
        )
    }
}
