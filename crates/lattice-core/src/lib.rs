//! Core value types of the lattice pipeline: the [`Component`] capability,
//! the immutable [`RenderNode`] tree it produces, identity paths and the
//! opaque element-content contract consumed by hosts.

pub mod collections;
mod component;
mod content;
mod identity;
mod render_node;

pub use component::{AnyComponent, Component};
pub use content::{ContentApplier, ElementContent, ReuseTag};
pub use identity::{IdentitySegment, NodeIdentity};
pub use render_node::{RenderChild, RenderNode};

pub use lattice_ui_layout::{
    Axis, Constraints, CrossAlignment, EdgeInsets, OverlayAlignment, Point, Rect, Size,
};
