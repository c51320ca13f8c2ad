//! Layout core — sizes and positions systems, measures and cells.
//!
//! Sizing flows bottom-up (cell → measure → system) and positioning flows
//! top-down (system → measure → cell). Every node walks the same per-pass
//! state machine:
//!
//! ```text
//! Unsized → MinWidthComputed → WidthAssigned → Flowed
//! ```
//!
//! Operations check the state they need and fail with
//! [`LayoutError::OutOfOrderPass`] instead of guessing a geometry.

pub mod cell;
pub mod engine;
pub mod justify;
pub mod measure;
pub mod staff;
pub mod system;

use std::fmt;

use serde::Serialize;

use crate::error::LayoutError;

pub use cell::{BarGeometry, CellMetrics, CellPlacement, LayoutCell, ModelRef};
pub use engine::LayoutEngine;
pub use justify::{FillLine, Justifier, MinimumWidths};
pub use measure::LayoutMeasure;
pub use system::LayoutSystem;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Progress of one node through a layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LayoutState {
    #[default]
    Unsized,
    MinWidthComputed,
    WidthAssigned,
    Flowed,
}

/// Identifies a layout node in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Node {
    Cell { part: usize, measure: usize },
    Measure(usize),
    System(usize),
    Engine,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Cell { part, measure } => write!(f, "cell (part {part}, measure {measure})"),
            Node::Measure(idx) => write!(f, "measure {idx}"),
            Node::System(idx) => write!(f, "system {idx}"),
            Node::Engine => write!(f, "layout engine"),
        }
    }
}

/// Behavior shared by the layout wrappers around score-model nodes.
pub trait Layoutable {
    fn node(&self) -> Node;

    fn state(&self) -> LayoutState;

    /// Minimum width, once computed in the current pass.
    fn min_width(&self) -> Option<f64>;

    /// Return the node (and everything it owns) to `Unsized`, zeroing the
    /// geometry of the previous pass. Drawable groups are kept for reuse.
    fn reset(&mut self);

    /// Fail with `OutOfOrderPass` unless the node has reached `at_least`.
    fn require(&self, operation: &'static str, at_least: LayoutState) -> Result<()> {
        if self.state() >= at_least {
            return Ok(());
        }
        log::warn!(
            "{}: `{}` needs {:?}, node is {:?}",
            self.node(),
            operation,
            at_least,
            self.state()
        );
        Err(LayoutError::OutOfOrderPass {
            node: self.node(),
            operation,
            state: self.state(),
        })
    }
}
