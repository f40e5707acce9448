//! Aspect-ratio fitting modifier.

use lattice_core::{AnyComponent, Component, Constraints, RenderNode, Size};

/// Forces its child into the largest `ratio`-preserving rect that fits the
/// constraint's max bounds.
///
/// With both axes unbounded there is nothing to fit against and the
/// constraint passes through unchanged.
pub struct AspectFit {
    child: AnyComponent,
    /// Width / height.
    ratio: f32,
}

impl AspectFit {
    pub fn new(child: impl Component + 'static, ratio: f32) -> Self {
        debug_assert!(ratio > 0.0, "aspect ratio must be positive, got {ratio}");
        Self {
            child: Box::new(child),
            ratio,
        }
    }
}

impl Component for AspectFit {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        if !constraints.has_bounded_width() && !constraints.has_bounded_height() {
            return self.child.layout(constraints);
        }
        let target = if constraints.has_bounded_width() && constraints.has_bounded_height() {
            let width = constraints
                .max_width
                .min(constraints.max_height * self.ratio);
            Size::new(width, width / self.ratio)
        } else if constraints.has_bounded_width() {
            Size::new(constraints.max_width, constraints.max_width / self.ratio)
        } else {
            Size::new(constraints.max_height * self.ratio, constraints.max_height)
        };
        // Respect the incoming min even when it breaks the ratio; min <= max
        // is the caller's contract.
        self.child.layout(Constraints::tight(constraints.constrain(target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Space;

    #[test]
    fn test_fits_widescreen_into_bounds() {
        let node = AspectFit::new(Space::fill(), 2.0)
            .layout(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(node.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_height_bound_drives_width() {
        let node = AspectFit::new(Space::fill(), 2.0)
            .layout(Constraints::new(0.0, f32::INFINITY, 0.0, 30.0));
        assert_eq!(node.size(), Size::new(60.0, 30.0));
    }

    #[test]
    fn test_unbounded_passes_through() {
        let node = AspectFit::new(Space::new(10.0, 10.0), 2.0).layout(Constraints::unbounded());
        assert_eq!(node.size(), Size::new(10.0, 10.0));
    }
}
