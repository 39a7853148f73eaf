//! Per-child layout parameters.
//!
//! Every child of a flow container carries [`MarginParams`]: the size it asks
//! for on each axis plus its margins. Params are built from a host-parsed
//! [`LayoutAttributes`] set.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Requested size of a child on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildSize {
    /// As large as the parent allows.
    MatchParent,
    /// Just large enough for the child's content.
    #[default]
    WrapContent,
    /// Fixed pixel size.
    Fixed(f32),
}

/// Space outside a child's box.
///
/// Negative values are allowed and pull neighbours closer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margin {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create a margin with explicit values for each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform margin on all sides.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal margin.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Space inside a container, around its content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Raw layout attributes as handed over by the host's styling layer.
///
/// `layout_margin` wins over the axis shorthands, which win over the
/// per-side values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutAttributes {
    pub layout_width: Option<ChildSize>,
    pub layout_height: Option<ChildSize>,
    pub layout_margin: Option<f32>,
    pub layout_margin_horizontal: Option<f32>,
    pub layout_margin_vertical: Option<f32>,
    pub layout_margin_left: Option<f32>,
    pub layout_margin_top: Option<f32>,
    pub layout_margin_right: Option<f32>,
    pub layout_margin_bottom: Option<f32>,
}

impl LayoutAttributes {
    /// Attributes with both sizes set and no margins.
    pub fn sized(width: ChildSize, height: ChildSize) -> Self {
        Self {
            layout_width: Some(width),
            layout_height: Some(height),
            ..Self::default()
        }
    }

    pub fn margin(mut self, value: f32) -> Self {
        self.layout_margin = Some(value);
        self
    }
}

/// Margin-aware layout parameters attached to every child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarginParams {
    pub width: ChildSize,
    pub height: ChildSize,
    pub margin: Margin,
}

impl MarginParams {
    pub fn new(width: ChildSize, height: ChildSize) -> Self {
        Self {
            width,
            height,
            margin: Margin::ZERO,
        }
    }

    /// Wrap content on both axes, no margins.
    pub fn wrap_content() -> Self {
        Self::new(ChildSize::WrapContent, ChildSize::WrapContent)
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Build params from a host attribute set.
    ///
    /// Both `layout_width` and `layout_height` must be present.
    pub fn from_attributes(attrs: &LayoutAttributes) -> Result<Self> {
        let width = attrs
            .layout_width
            .ok_or(LayoutError::MissingAttribute("layout_width"))?;
        let height = attrs
            .layout_height
            .ok_or(LayoutError::MissingAttribute("layout_height"))?;
        check_size("width", width)?;
        check_size("height", height)?;

        let margin = match attrs.layout_margin {
            Some(all) => Margin::all(check_margin("all", all)?),
            None => {
                let horizontal = attrs.layout_margin_horizontal;
                let vertical = attrs.layout_margin_vertical;
                Margin {
                    left: side("left", horizontal.or(attrs.layout_margin_left))?,
                    top: side("top", vertical.or(attrs.layout_margin_top))?,
                    right: side("right", horizontal.or(attrs.layout_margin_right))?,
                    bottom: side("bottom", vertical.or(attrs.layout_margin_bottom))?,
                }
            }
        };

        Ok(Self { width, height, margin })
    }
}

fn side(name: &'static str, value: Option<f32>) -> Result<f32> {
    value.map_or(Ok(0.0), |v| check_margin(name, v))
}

fn check_margin(side: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::InvalidMargin { side, value })
    }
}

fn check_size(axis: &'static str, size: ChildSize) -> Result<()> {
    match size {
        ChildSize::Fixed(value) if !value.is_finite() || value < 0.0 => {
            Err(LayoutError::InvalidSize { axis, value })
        }
        _ => Ok(()),
    }
}
