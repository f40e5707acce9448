//! Invisible sizing leaf.

use lattice_core::{Component, Constraints, RenderNode};

use crate::sizing::Sizing;

/// Occupies space without binding an element. Fixed axes ignore the
/// constraint's max and clamp to min only; fill axes expand to a finite
/// max.
#[derive(Clone, Copy, Debug)]
pub struct Space {
    width: Sizing,
    height: Sizing,
}

impl Space {
    /// Fixed-size spacer.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Sizing::Fixed(width),
            height: Sizing::Fixed(height),
        }
    }

    /// Expands to the available bounds on both axes.
    pub fn fill() -> Self {
        Self {
            width: Sizing::Fill,
            height: Sizing::Fill,
        }
    }

    pub fn from_sizing(width: Sizing, height: Sizing) -> Self {
        Self { width, height }
    }
}

impl Component for Space {
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
        RenderNode::leaf(lattice_core::Size::new(width, height))
    }
}
