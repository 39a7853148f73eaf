//! The measure/arrange capability pair shared by every node.
//!
//! The host driver calls [`LayoutNode::measure`] first and
//! [`LayoutNode::arrange`] second. Containers forward both calls to their
//! children.

use crate::primitives::{Rect, Size};

use super::constraints::MeasureSpec;
use super::params::MarginParams;

/// A node that can be measured and placed.
pub trait LayoutNode {
    /// Measure against the given specs and remember the result.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec);

    /// Size recorded by the most recent [`measure`](Self::measure).
    fn measured_size(&self) -> Size;

    /// Place the node at an absolute rectangle.
    fn arrange(&mut self, frame: Rect);

    /// Rectangle assigned by the most recent [`arrange`](Self::arrange).
    fn frame(&self) -> Rect;

    /// Short label for logs and dumps.
    fn label(&self) -> &str {
        "node"
    }

    /// Visit direct children in layout order.
    fn for_each_child(&self, _visit: &mut dyn FnMut(&dyn LayoutNode)) {}
}

/// A child slot in a container: the node plus its margin-aware params.
pub struct FlowChild {
    pub node: Box<dyn LayoutNode>,
    pub params: MarginParams,
}

impl FlowChild {
    pub fn new(node: impl LayoutNode + 'static, params: MarginParams) -> Self {
        Self {
            node: Box::new(node),
            params,
        }
    }

    /// Measured width plus horizontal margins.
    #[inline]
    pub fn box_width(&self) -> f32 {
        self.node.measured_size().width + self.params.margin.horizontal()
    }

    /// Measured height plus vertical margins.
    #[inline]
    pub fn box_height(&self) -> f32 {
        self.node.measured_size().height + self.params.margin.vertical()
    }
}

impl std::fmt::Debug for FlowChild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowChild")
            .field("node", &self.node.label())
            .field("measured", &self.node.measured_size())
            .field("params", &self.params)
            .finish()
    }
}
