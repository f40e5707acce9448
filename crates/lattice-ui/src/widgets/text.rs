//! Text leaf.

use std::rc::Rc;

use lattice_core::{Component, Constraints, ElementContent, RenderNode, Size};

use crate::content::{Color, TextContent, TEXT_TAG};
use crate::text_measure::{MonospaceMeasurer, TextMeasurer};

/// Font size and color of a text leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            color: Color::BLACK,
        }
    }
}

/// A text leaf that wraps at the constraint's max width.
///
/// Measurement goes through the injected [`TextMeasurer`];
/// [`MonospaceMeasurer`] keeps layout deterministic when the host supplies
/// none.
#[derive(Clone)]
pub struct Text {
    text: String,
    style: TextStyle,
    measurer: Rc<dyn TextMeasurer>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            measurer: Rc::new(MonospaceMeasurer),
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.style.font_size = font_size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn measurer(mut self, measurer: Rc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }
}

impl Component for Text {
    fn layout(&self, constraints: Constraints) -> RenderNode {
        let measured =
            self.measurer
                .measure(&self.text, self.style.font_size, constraints.max_width);
        // Leaf policy: clamp to min only; the max already shaped wrapping.
        let size = Size::new(
            measured.width.max(constraints.min_width),
            measured.height.max(constraints.min_height),
        );
        RenderNode::with_content(
            size,
            ElementContent::new(
                TEXT_TAG,
                Rc::new(TextContent {
                    text: self.text.clone(),
                    font_size: self.style.font_size,
                    color: self.style.color,
                }),
            ),
        )
    }
}
