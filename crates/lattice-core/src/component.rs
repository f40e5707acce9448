//! The component capability.
//!
//! A component is an immutable description of what to render and how to
//! size it. Layout is a pure function of the incoming constraints: no
//! component mutates shared state, so a tree can be laid out any number of
//! times with identical results.

use lattice_ui_layout::Constraints;
use std::rc::Rc;

use crate::render_node::RenderNode;

/// Boxed component, the common currency for container children.
pub type AnyComponent = Box<dyn Component>;

/// A stateless, immutable layout description.
///
/// `layout` computes the component's own size within `constraints` and
/// recursively lays out children, producing a [`RenderNode`] subtree.
pub trait Component {
    fn layout(&self, constraints: Constraints) -> RenderNode;
}

impl<T: Component + ?Sized> Component for &T {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        (**self).layout(constraints)
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        (**self).layout(constraints)
    }
}

impl<T: Component + ?Sized> Component for Rc<T> {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        (**self).layout(constraints)
    }
}
