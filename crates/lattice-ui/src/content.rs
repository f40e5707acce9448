//! Content payloads for the built-in leaves.
//!
//! These are the appliers hosts downcast to when binding an element. The
//! engine itself never looks inside them.

use lattice_core::{ContentApplier, ReuseTag};
use std::any::Any;

/// Reuse tag for text elements.
pub const TEXT_TAG: ReuseTag = ReuseTag("lattice.text");
/// Reuse tag for image elements.
pub const IMAGE_TAG: ReuseTag = ReuseTag("lattice.image");
/// Default reuse tag for raw host elements.
pub const RAW_TAG: ReuseTag = ReuseTag("lattice.raw");

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Observable properties of a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

impl ContentApplier for TextContent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Observable properties of an image element. `source` is a host-resolved
/// identifier (asset name, URL, cache key).
#[derive(Clone, Debug, PartialEq)]
pub struct ImageContent {
    pub source: String,
}

impl ContentApplier for ImageContent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
