//! JSON scene descriptions.
//!
//! A scene names the root measure specs, the root flow style and a tree of
//! children. Children without a `layout` block get default params; children
//! with one go through the container's attribute path, so a scene fails to
//! load exactly when the host would reject the attributes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::{
    BoxElement, FlowChild, FlowContainer, FlowStyle, LayoutAttributes, LayoutNode, LayoutPass, MeasureSpec,
    TextElement, collect_frames,
};
use crate::primitives::Rect;

/// Root of a scene file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub name: Option<String>,
    pub width: MeasureSpec,
    pub height: MeasureSpec,
    pub style: FlowStyle,
    pub children: Vec<SceneNode>,
}

/// A child in a scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    Box {
        width: f32,
        height: f32,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        layout: Option<LayoutAttributes>,
    },
    Text {
        text: String,
        #[serde(default)]
        layout: Option<LayoutAttributes>,
    },
    Flow {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        style: FlowStyle,
        #[serde(default)]
        children: Vec<SceneNode>,
        #[serde(default)]
        layout: Option<LayoutAttributes>,
    },
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loading scene");
        Self::from_json(&json)
    }

    /// Cap the root width, keeping the height spec.
    pub fn with_max_width(mut self, width: f32) -> Self {
        self.width = MeasureSpec::at_most(width);
        self
    }

    /// Build the root container.
    pub fn build(&self) -> Result<FlowContainer> {
        build_flow(self.name.as_deref(), self.style, &self.children)
    }

    /// Build, run one layout pass, and return every frame depth-first.
    pub fn layout(&self) -> Result<Vec<(String, Rect)>> {
        let mut root = self.build()?;
        LayoutPass::new(self.width, self.height).run(&mut root);
        Ok(collect_frames(&root))
    }
}

fn build_flow(name: Option<&str>, style: FlowStyle, children: &[SceneNode]) -> Result<FlowContainer> {
    let mut flow = FlowContainer::new().style(style);
    if let Some(name) = name {
        flow = flow.named(name);
    }

    for child in children {
        match child {
            SceneNode::Box { width, height, name, layout } => {
                let mut element = BoxElement::new(
                    check_box_size("width", *width)?,
                    check_box_size("height", *height)?,
                );
                if let Some(name) = name {
                    element = element.named(name.clone());
                }
                attach(&mut flow, element, layout.as_ref())?;
            }
            SceneNode::Text { text, layout } => {
                attach(&mut flow, TextElement::new(text.clone()), layout.as_ref())?;
            }
            SceneNode::Flow { name, style, children, layout } => {
                let nested = build_flow(name.as_deref(), *style, children)?;
                attach(&mut flow, nested, layout.as_ref())?;
            }
        }
    }

    Ok(flow)
}

fn check_box_size(axis: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidSize { axis, value })
    }
}

fn attach(
    flow: &mut FlowContainer,
    node: impl LayoutNode + 'static,
    layout: Option<&LayoutAttributes>,
) -> Result<()> {
    match layout {
        Some(attrs) => flow.add_with_attributes(node, attrs),
        None => {
            let params = flow.generate_default_layout_params();
            flow.add(FlowChild::new(node, params));
            Ok(())
        }
    }
}
