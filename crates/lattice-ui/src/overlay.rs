//! Overlay/badge combinator.

#![allow(non_snake_case)]

use lattice_core::{
    AnyComponent, Component, Constraints, OverlayAlignment, Point, RenderChild, RenderNode,
};

/// A secondary child anchored to the primary.
pub struct OverlayChild {
    component: AnyComponent,
    horizontal: OverlayAlignment,
    vertical: OverlayAlignment,
    offset: Point,
}

/// Lays out a primary child under the full constraints, then anchors each
/// secondary child against the primary's resolved size.
///
/// Secondary children never grow the container: the node's size is the
/// primary's size, and `Before`/`After` alignments place secondaries fully
/// outside it. Secondaries come after the primary in document order, so
/// they render above it.
pub struct Overlay {
    primary: AnyComponent,
    overlays: Vec<OverlayChild>,
}

/// A badge anchored to the top-trailing corner of `primary`.
pub fn Badge(primary: impl Component + 'static, badge: impl Component + 'static) -> Overlay {
    Overlay::new(primary).with(badge, OverlayAlignment::End, OverlayAlignment::Start)
}

impl Overlay {
    pub fn new(primary: impl Component + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            overlays: Vec::new(),
        }
    }

    pub fn with(
        self,
        component: impl Component + 'static,
        horizontal: OverlayAlignment,
        vertical: OverlayAlignment,
    ) -> Self {
        self.with_offset(component, horizontal, vertical, Point::ZERO)
    }

    pub fn with_offset(
        mut self,
        component: impl Component + 'static,
        horizontal: OverlayAlignment,
        vertical: OverlayAlignment,
        offset: Point,
    ) -> Self {
        self.overlays.push(OverlayChild {
            component: Box::new(component),
            horizontal,
            vertical,
            offset,
        });
        self
    }

    fn axis_bounds(alignment: OverlayAlignment, primary: f32) -> (f32, f32) {
        match alignment {
            OverlayAlignment::Stretch => (primary, primary),
            OverlayAlignment::Before | OverlayAlignment::After => (0.0, f32::INFINITY),
            _ => (0.0, primary),
        }
    }
}

impl Component for Overlay {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let primary = self.primary.layout(constraints);
        let primary_size = primary.size();

        let mut children = Vec::with_capacity(1 + self.overlays.len());
        children.push(RenderChild::new(Point::ZERO, primary));

        for overlay in &self.overlays {
            let (min_w, max_w) = Self::axis_bounds(overlay.horizontal, primary_size.width);
            let (min_h, max_h) = Self::axis_bounds(overlay.vertical, primary_size.height);
            let node = overlay
                .component
                .layout(Constraints::new(min_w, max_w, min_h, max_h));

            let base = Point::new(
                overlay
                    .horizontal
                    .offset(primary_size.width, node.size().width),
                overlay
                    .vertical
                    .offset(primary_size.height, node.size().height),
            );
            children.push(RenderChild::new(
                base.offset(overlay.offset.x, overlay.offset.y),
                node,
            ));
        }
        RenderNode::container(primary_size, children)
    }
}
