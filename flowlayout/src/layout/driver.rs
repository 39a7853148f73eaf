//! Host-side traversal driver.
//!
//! Runs one measure pass followed by one arrange pass on a root node.

use crate::primitives::{Point, Rect, Size};

use super::constraints::MeasureSpec;
use super::node::LayoutNode;

/// A single layout pass over a node tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPass {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
    pub origin: Point,
}

impl LayoutPass {
    pub fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self {
            width,
            height,
            origin: Point::ORIGIN,
        }
    }

    /// Width capped at the viewport, height free to grow.
    pub fn viewport(size: Size) -> Self {
        Self::new(MeasureSpec::at_most(size.width), MeasureSpec::UNSPECIFIED)
    }

    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Measure then arrange `root`, returning the frame it was given.
    pub fn run(&self, root: &mut dyn LayoutNode) -> Rect {
        root.measure(self.width, self.height);
        let frame = Rect::from_origin_size(self.origin, root.measured_size());
        root.arrange(frame);

        tracing::debug!(
            root = root.label(),
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "layout pass complete"
        );
        frame
    }
}

/// Collect every node's frame depth-first, keyed by a slash-separated path
/// of labels and child indices (`flow/0`, `flow/1/inner/0`, ...).
pub fn collect_frames(root: &dyn LayoutNode) -> Vec<(String, Rect)> {
    let mut out = Vec::new();
    collect_into(root, root.label().to_string(), &mut out);
    out
}

fn collect_into(node: &dyn LayoutNode, path: String, out: &mut Vec<(String, Rect)>) {
    out.push((path.clone(), node.frame()));

    let mut index = 0;
    node.for_each_child(&mut |child| {
        let child_path = format!("{path}/{index}:{}", child.label());
        collect_into(child, child_path, out);
        index += 1;
    });
}
