//! Built-in components: sizing leaves, content leaves, single-child
//! modifiers and the stack/flow/overlay combinators.
//!
//! Every component here is a plain value implementing
//! [`lattice_core::Component`]; none of them touch host state. Constructor
//! functions use the framework's PascalCase convention (`HStack`,
//! `VStack`, `Badge`) so component trees read declaratively.

mod content;
mod flow;
mod for_each;
pub mod modifier;
mod overlay;
mod sizing;
mod stack;
mod text_measure;
pub mod widgets;

pub use content::{Color, ImageContent, TextContent, IMAGE_TAG, RAW_TAG, TEXT_TAG};
pub use flow::Flow;
pub use for_each::{for_each, for_each_indexed, Keyed};
pub use modifier::{Align, AspectFit, HalfHeight, Inset};
pub use overlay::{Badge, Overlay, OverlayChild};
pub use sizing::Sizing;
pub use stack::{HStack, Stack, VStack};
pub use text_measure::{MonospaceMeasurer, TextMeasurer};
pub use widgets::{Image, Raw, ScaleMode, Space, Text, TextStyle};

pub use lattice_core::{
    AnyComponent, Axis, Component, Constraints, CrossAlignment, EdgeInsets, OverlayAlignment,
    Point, Rect, RenderNode, Size,
};
