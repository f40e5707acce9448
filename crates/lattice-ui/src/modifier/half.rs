//! Height-halving modifier.

use lattice_core::{AnyComponent, Component, Constraints, RenderNode};

/// Halves the height axis of the constraint handed to its child; the width
/// axis is untouched and the child's resolved size is reported as-is.
/// An unbounded max height stays unbounded.
pub struct HalfHeight {
    child: AnyComponent,
}

impl HalfHeight {
    pub fn new(child: impl Component + 'static) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl Component for HalfHeight {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        self.child.layout(Constraints::new(
            constraints.min_width,
            constraints.max_width,
            constraints.min_height / 2.0,
            constraints.max_height / 2.0,
        ))
    }
}
