//! Flow Container - wrapping left-to-right, top-to-bottom layout.
//!
//! Children are laid out horizontally until the next one would exceed the
//! available width, then wrap to a new line. Measurement partitions the
//! children into lines; arrangement walks those lines and places each child.
//!
//! The partition is a plain value ([`FlowMeasurement`]) built fresh by every
//! [`measure_flow`] call, so a stale partition can never leak between passes.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::{Rect, Size};

use super::constraints::MeasureSpec;
use super::node::{FlowChild, LayoutNode};
use super::params::{LayoutAttributes, MarginParams, Padding};

// =========================================================================
// Style
// =========================================================================

/// Spacing and padding for a flow container. All zero by default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStyle {
    /// Horizontal gap between adjacent children in a line.
    pub spacing: f32,
    /// Vertical gap between lines.
    pub line_spacing: f32,
    /// Space between the container edge and its content.
    pub padding: Padding,
}

// =========================================================================
// Measurement result
// =========================================================================

/// One row of the flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLine {
    /// Indices of the children in this line. Never empty.
    pub range: Range<usize>,
    /// Sum of box widths plus inner spacing.
    pub width: f32,
    /// Tallest box height in the line.
    pub height: f32,
}

impl FlowLine {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Output of a measurement pass: the line partition and the container size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowMeasurement {
    pub lines: Vec<FlowLine>,
    pub size: Size,
}

impl FlowMeasurement {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Heights of every line, in order.
    pub fn line_heights(&self) -> Vec<f32> {
        self.lines.iter().map(|l| l.height).collect()
    }

    /// Child indices grouped by line.
    pub fn line_indices(&self) -> Vec<Vec<usize>> {
        self.lines.iter().map(|l| l.range.clone().collect()).collect()
    }

    /// Index of the line holding the given child.
    pub fn line_of(&self, child: usize) -> Option<usize> {
        self.lines.iter().position(|l| l.range.contains(&child))
    }
}

// =========================================================================
// Measure / arrange
// =========================================================================

/// Measure every child and pack them greedily into lines.
///
/// A child starts a new line when the current line is non-empty and adding
/// it would push the line width strictly past the available width. A child
/// wider than the available width still gets a line of its own.
///
/// When both specs are exact the reported size is exactly the spec sizes,
/// but children are still packed so the result can be arranged.
pub fn measure_flow(
    children: &mut [FlowChild],
    style: &FlowStyle,
    width: MeasureSpec,
    height: MeasureSpec,
) -> FlowMeasurement {
    let padding = style.padding;
    let available = width.available(padding.horizontal());

    let mut lines = Vec::new();
    let mut max_width = 0.0f32;
    let mut total_height = 0.0f32;

    let mut line_start = 0;
    let mut line_width = 0.0f32;
    let mut line_height = 0.0f32;

    let mut close_line = |range: Range<usize>, w: f32, h: f32, lines: &mut Vec<FlowLine>| {
        if !lines.is_empty() {
            total_height += style.line_spacing;
        }
        max_width = max_width.max(w);
        total_height += h;
        lines.push(FlowLine { range, width: w, height: h });
    };

    for (i, child) in children.iter_mut().enumerate() {
        let child_width = width.child_spec(padding.horizontal(), child.params.width);
        let child_height = height.child_spec(padding.vertical(), child.params.height);
        child.node.measure(child_width, child_height);

        let box_width = child.box_width();
        let box_height = child.box_height();

        if i > line_start && line_width + style.spacing + box_width > available {
            tracing::trace!(
                child = i,
                line_width,
                box_width,
                available,
                "flow: wrapping to new line"
            );
            close_line(line_start..i, line_width, line_height, &mut lines);
            line_start = i;
        }

        if i == line_start {
            line_width = box_width;
            line_height = box_height;
        } else {
            line_width += style.spacing + box_width;
            line_height = line_height.max(box_height);
        }
    }

    if line_start < children.len() {
        close_line(line_start..children.len(), line_width, line_height, &mut lines);
    }

    let size = if width.is_exact() && height.is_exact() {
        Size::new(width.size, height.size)
    } else {
        Size::new(
            max_width + padding.horizontal(),
            total_height + padding.vertical(),
        )
    };

    tracing::debug!(
        children = children.len(),
        lines = lines.len(),
        width = size.width,
        height = size.height,
        "flow: measured"
    );

    FlowMeasurement { lines, size }
}

/// Place every child according to a measurement produced by [`measure_flow`].
///
/// Each line starts at the left content edge; the next line starts below it
/// by the stored line height.
pub fn arrange_flow(
    children: &mut [FlowChild],
    style: &FlowStyle,
    measurement: &FlowMeasurement,
    bounds: Rect,
) {
    let mut cursor_y = bounds.y + style.padding.top;

    for line in &measurement.lines {
        let Some(line_children) = children.get_mut(line.range.clone()) else {
            tracing::warn!(
                range = ?line.range,
                children = children.len(),
                "flow: measurement does not match children, skipping line"
            );
            continue;
        };

        let mut cursor_x = bounds.x + style.padding.left;
        for child in line_children {
            let margin = child.params.margin;
            let size = child.node.measured_size();

            let left = cursor_x + margin.left;
            let top = cursor_y + margin.top;
            child.node.arrange(Rect::new(left, top, size.width, size.height));

            cursor_x += size.width + margin.horizontal() + style.spacing;
        }

        cursor_y += line.height + style.line_spacing;
    }
}

// =========================================================================
// FlowContainer
// =========================================================================

/// A container that wraps children like flowing text.
///
/// Every child carries [`MarginParams`]; params built from host attributes go
/// through [`generate_layout_params`](Self::generate_layout_params).
pub struct FlowContainer {
    children: Vec<FlowChild>,
    style: FlowStyle,
    label: String,
    /// Partition from the latest measure. Replaced wholesale on every measure.
    measurement: Option<FlowMeasurement>,
    frame: Rect,
}

impl FlowContainer {
    /// Create an empty flow container.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            style: FlowStyle::default(),
            label: "flow".to_string(),
            measurement: None,
            frame: Rect::ZERO,
        }
    }

    /// Replace the whole style.
    pub fn style(mut self, style: FlowStyle) -> Self {
        self.style = style;
        self
    }

    /// Set horizontal spacing between items.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.style.spacing = spacing;
        self
    }

    /// Set vertical spacing between wrapped lines.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.style.line_spacing = spacing;
        self
    }

    /// Set uniform padding around content.
    pub fn padding(mut self, padding: f32) -> Self {
        self.style.padding = Padding::all(padding);
        self
    }

    /// Set custom padding.
    pub fn padding_custom(mut self, padding: Padding) -> Self {
        self.style.padding = padding;
        self
    }

    /// Set the label reported in logs and dumps.
    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a child with default params.
    pub fn push(self, node: impl LayoutNode + 'static) -> Self {
        let params = self.generate_default_layout_params();
        self.push_with(node, params)
    }

    /// Add a child with explicit params.
    pub fn push_with(mut self, node: impl LayoutNode + 'static, params: MarginParams) -> Self {
        self.add(FlowChild::new(node, params));
        self
    }

    /// Append a child slot. Drops any previous measurement.
    pub fn add(&mut self, child: FlowChild) {
        self.children.push(child);
        self.measurement = None;
    }

    /// Append a child whose params come from a host attribute set.
    pub fn add_with_attributes(
        &mut self,
        node: impl LayoutNode + 'static,
        attrs: &LayoutAttributes,
    ) -> Result<()> {
        let params = self.generate_layout_params(attrs)?;
        self.add(FlowChild::new(node, params));
        Ok(())
    }

    /// Build margin-aware params from host attributes.
    pub fn generate_layout_params(&self, attrs: &LayoutAttributes) -> Result<MarginParams> {
        MarginParams::from_attributes(attrs)
    }

    /// Params used when a child is added without attributes.
    pub fn generate_default_layout_params(&self) -> MarginParams {
        MarginParams::wrap_content()
    }

    pub fn children(&self) -> &[FlowChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Partition from the most recent measure, if still valid.
    pub fn measurement(&self) -> Option<&FlowMeasurement> {
        self.measurement.as_ref()
    }
}

impl Default for FlowContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlowContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowContainer")
            .field("label", &self.label)
            .field("children", &self.children)
            .field("style", &self.style)
            .field("measurement", &self.measurement)
            .finish()
    }
}

impl LayoutNode for FlowContainer {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        let measurement = measure_flow(&mut self.children, &self.style, width, height);
        self.measurement = Some(measurement);
    }

    fn measured_size(&self) -> Size {
        self.measurement.as_ref().map_or(Size::ZERO, |m| m.size)
    }

    fn arrange(&mut self, frame: Rect) {
        if self.measurement.is_none() {
            tracing::warn!(
                label = %self.label,
                "flow: arranged without a measure, measuring at frame size"
            );
            self.measure(
                MeasureSpec::exact(frame.width),
                MeasureSpec::exact(frame.height),
            );
        }

        self.frame = frame;
        if let Some(measurement) = &self.measurement {
            arrange_flow(&mut self.children, &self.style, measurement, frame);
        }
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn for_each_child(&self, visit: &mut dyn FnMut(&dyn LayoutNode)) {
        for child in &self.children {
            visit(child.node.as_ref());
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
