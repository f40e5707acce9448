//! Text measurement seam.
//!
//! Real glyph metrics live in the host's text stack; the engine only needs
//! a deterministic `(text, font_size, max_width) -> Size` function. The
//! default measurer uses a fixed advance per glyph so layout results are
//! reproducible in tests and host-independent.

use lattice_ui_layout::Size;

/// Measures wrapped text. Implementations must be pure: the same inputs
/// always produce the same size.
pub trait TextMeasurer {
    /// Size of `text` at `font_size`, greedily word-wrapped at
    /// `max_width` (infinite max means a single unwrapped line per input
    /// line).
    fn measure(&self, text: &str, font_size: f32, max_width: f32) -> Size;
}

/// Advance factor of the default measurer, in ems.
const GLYPH_ADVANCE_EM: f32 = 0.6;
/// Line height of the default measurer, in ems.
const LINE_HEIGHT_EM: f32 = 1.2;

/// Deterministic fixed-advance measurer used when the host supplies none.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospaceMeasurer;

impl MonospaceMeasurer {
    fn advance(font_size: f32) -> f32 {
        font_size * GLYPH_ADVANCE_EM
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font_size: f32, max_width: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let advance = Self::advance(font_size);
        let line_height = font_size * LINE_HEIGHT_EM;
        let space = advance;

        let mut line_count = 0usize;
        let mut widest = 0.0f32;
        for input_line in text.lines() {
            let mut current = 0.0f32;
            let mut line_used = false;
            for word in input_line.split_whitespace() {
                let word_width = word.chars().count() as f32 * advance;
                let extended = if line_used {
                    current + space + word_width
                } else {
                    word_width
                };
                // Exact fit stays on the line; only a strict overflow wraps.
                if line_used && extended > max_width {
                    widest = widest.max(current);
                    line_count += 1;
                    current = word_width;
                } else {
                    current = extended;
                    line_used = true;
                }
            }
            widest = widest.max(current);
            line_count += 1;
        }

        Size::new(widest, line_count as f32 * line_height)
    }
}
