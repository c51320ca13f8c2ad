//! Error types for the layout core.
//!
//! Every variant is a local precondition failure. Nothing here is recovered
//! inside the crate: the failing operation returns the error unchanged and
//! the caller decides whether to abort rendering.

use thiserror::Error;

use crate::layout::{LayoutState, Node};

/// Layout precondition failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A measure was assigned a final width below its minimum width
    #[error("measure {measure}: width {width} is smaller than minimum width {min_width}")]
    InvalidWidth {
        measure: usize,
        width: f64,
        min_width: f64,
    },

    /// A cell was given a negative (or non-finite) width
    #[error("cell width {width} is not a valid geometry")]
    NegativeWidth { width: f64 },

    /// An operation ran before its prerequisite pass
    #[error("{node}: `{operation}` called in state {state:?}")]
    OutOfOrderPass {
        node: Node,
        operation: &'static str,
        state: LayoutState,
    },

    /// A cell has no usable content measurement
    #[error("cell (part {part}, measure {measure}) has no content measurement")]
    MissingGeometry { part: usize, measure: usize },

    /// The justifier produced a width list that does not match the system
    #[error("system {system}: justifier returned {actual} widths for {expected} measures")]
    WidthCountMismatch {
        system: usize,
        expected: usize,
        actual: usize,
    },

    /// Layout options could not be parsed
    #[error("invalid layout options: {0}")]
    Options(String),
}
