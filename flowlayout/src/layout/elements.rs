//! Leaf layout elements - BoxElement, TextElement.
//!
//! These are the "atoms" of the layout system - they don't contain other nodes.

use unicode_width::UnicodeWidthChar;

use crate::primitives::{Rect, Size};

use super::constraints::{MeasureMode, MeasureSpec};
use super::node::LayoutNode;

// Monospace cell metrics used for text estimates.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

// =========================================================================
// BoxElement
// =========================================================================

/// A leaf with a fixed intrinsic size.
#[derive(Debug, Clone)]
pub struct BoxElement {
    label: String,
    intrinsic: Size,
    measured: Size,
    frame: Rect,
}

impl BoxElement {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            label: "box".to_string(),
            intrinsic: Size::new(width, height),
            measured: Size::ZERO,
            frame: Rect::ZERO,
        }
    }

    /// Set the label reported in logs and dumps.
    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl LayoutNode for BoxElement {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        self.measured = Size::new(
            width.resolve(self.intrinsic.width),
            height.resolve(self.intrinsic.height),
        );
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn arrange(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn label(&self) -> &str {
        &self.label
    }
}

// =========================================================================
// TextElement
// =========================================================================

/// A single run of text measured in monospace cells.
///
/// When the width is capped below the natural width the text wraps and
/// grows by whole lines.
#[derive(Debug, Clone)]
pub struct TextElement {
    pub text: String,
    measured: Size,
    frame: Rect,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            measured: Size::ZERO,
            frame: Rect::ZERO,
        }
    }

    /// Width and height of the text on a single line.
    pub fn natural_size(&self) -> Size {
        Size::new(unicode_display_width(&self.text) * CHAR_WIDTH, LINE_HEIGHT)
    }
}

impl LayoutNode for TextElement {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        let natural = self.natural_size();
        let w = width.resolve(natural.width);

        let lines = if width.mode != MeasureMode::Unspecified && w > 0.0 && w < natural.width {
            (natural.width / w).ceil()
        } else {
            1.0
        };

        self.measured = Size::new(w, height.resolve(lines * LINE_HEIGHT));
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn arrange(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn label(&self) -> &str {
        &self.text
    }
}
