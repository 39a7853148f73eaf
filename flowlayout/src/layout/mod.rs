//! Layout system for flowlayout.
//!
//! Nodes implement the [`LayoutNode`] measure/arrange pair. The host drives a
//! pass with [`LayoutPass`]: measure the root against a pair of
//! [`MeasureSpec`]s, then arrange it at its measured size.
//!
//! ```text
//! LayoutPass::run -> measure(specs) -> measure_flow -> FlowMeasurement
//!                 -> arrange(frame) -> arrange_flow -> child frames
//! ```

pub mod constraints;
pub mod driver;
pub mod elements;
pub mod flow;
pub mod node;
pub mod params;

pub use constraints::{MeasureMode, MeasureSpec};
pub use driver::{LayoutPass, collect_frames};
pub use elements::{BoxElement, TextElement, CHAR_WIDTH, LINE_HEIGHT};
pub use flow::{FlowContainer, FlowLine, FlowMeasurement, FlowStyle, arrange_flow, measure_flow};
pub use node::{FlowChild, LayoutNode};
pub use params::{ChildSize, LayoutAttributes, Margin, MarginParams, Padding};
