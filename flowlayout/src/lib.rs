//! flowlayout: a wrapping flow container.
//!
//! Children flow left to right and wrap onto a new line when the next one
//! would not fit, like words in a paragraph. Layout runs in two passes driven
//! by the host:
//!
//! ```
//! use flowlayout::layout::{BoxElement, FlowContainer, LayoutPass, MeasureSpec};
//!
//! let mut flow = FlowContainer::new()
//!     .push(BoxElement::new(40.0, 10.0))
//!     .push(BoxElement::new(40.0, 20.0))
//!     .push(BoxElement::new(40.0, 10.0));
//!
//! let frame = LayoutPass::new(MeasureSpec::at_most(100.0), MeasureSpec::UNSPECIFIED)
//!     .run(&mut flow);
//! assert_eq!((frame.width, frame.height), (80.0, 30.0));
//! ```

pub mod error;
pub mod layout;
pub mod primitives;
pub mod scene;

pub use error::{LayoutError, Result};
pub use layout::{FlowContainer, LayoutNode, LayoutPass};
pub use primitives::{Point, Rect, Size};
pub use scene::{Scene, SceneNode};
