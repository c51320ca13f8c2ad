//! Cell layout — one voice's content within one measure.

use serde::{Deserialize, Serialize};

use super::{LayoutState, Layoutable, Node, Result};
use crate::error::LayoutError;
use crate::graphics::{reuse_or_create, Canvas, GroupClass, GroupId};
use crate::options::LayoutOptions;

/// Horizontal space taken by a bar-line glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub width: f64,
}

impl BarGeometry {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Index of the score-model node a cell wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    /// Part (voice) index
    pub part: usize,
    /// Measure index within the part
    pub measure: usize,
}

impl ModelRef {
    pub fn new(part: usize, measure: usize) -> Self {
        Self { part, measure }
    }
}

/// Measurements supplied by glyph measurement before layout starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Minimum content width; `None` until the content has been measured
    pub content_width: Option<f64>,
    /// Opening bar line
    pub bar_left: BarGeometry,
    /// Closing bar line
    pub bar_right: BarGeometry,
}

impl CellMetrics {
    pub fn new(content_width: f64) -> Self {
        Self {
            content_width: Some(content_width),
            ..Self::default()
        }
    }

    pub fn with_bars(mut self, left: f64, right: f64) -> Self {
        self.bar_left = BarGeometry::new(left);
        self.bar_right = BarGeometry::new(right);
        self
    }
}

/// Geometry a measure hands to each of its cells when flowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Measure height (equal to the system height)
    pub height: f64,
    /// Offset of the content within the measure
    pub x: f64,
    /// Bottom extent (the system height)
    pub y2: f64,
}

/// Layout wrapper for one cell.
#[derive(Debug, Clone)]
pub struct LayoutCell {
    source: ModelRef,
    metrics: CellMetrics,
    min_width: Option<f64>,
    width: f64,
    height: f64,
    x: f64,
    y2: f64,
    group: Option<GroupId>,
    state: LayoutState,
}

impl LayoutCell {
    pub fn new(source: ModelRef, metrics: CellMetrics) -> Self {
        Self {
            source,
            metrics,
            min_width: None,
            width: 0.0,
            height: 0.0,
            x: 0.0,
            y2: 0.0,
            group: None,
            state: LayoutState::Unsized,
        }
    }

    pub fn source(&self) -> ModelRef {
        self.source
    }

    pub fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    /// Replace the content measurement, e.g. after the content changed.
    /// The cell drops back to `Unsized`.
    pub fn set_metrics(&mut self, metrics: CellMetrics) {
        self.metrics = metrics;
        self.reset();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn bar_left_in_system(&self) -> BarGeometry {
        self.metrics.bar_left
    }

    pub fn bar_right_in_system(&self) -> BarGeometry {
        self.metrics.bar_right
    }

    /// Establish the minimum width from the content measurement.
    pub fn compute_min_width(&mut self) -> Result<f64> {
        match self.metrics.content_width {
            Some(w) if w.is_finite() && w >= 0.0 => {
                self.min_width = Some(w);
                self.state = LayoutState::MinWidthComputed;
                Ok(w)
            }
            _ => {
                log::warn!("{}: no usable content measurement", self.node());
                Err(LayoutError::MissingGeometry {
                    part: self.source.part,
                    measure: self.source.measure,
                })
            }
        }
    }

    /// Validate a width without applying it.
    pub(crate) fn check_width(&self, w: f64) -> Result<()> {
        self.require("set_width", LayoutState::MinWidthComputed)?;
        if w.is_finite() && w >= 0.0 {
            Ok(())
        } else {
            Err(LayoutError::NegativeWidth { width: w })
        }
    }

    pub fn set_width(&mut self, w: f64) -> Result<()> {
        self.check_width(w)?;
        self.width = w;
        self.state = LayoutState::WidthAssigned;
        Ok(())
    }

    /// Bind the cell's group under `measure_group` and copy the measure's geometry.
    ///
    /// Re-attaching to the same measure group reuses the existing cell group.
    pub fn attach_to_measure(
        &mut self,
        canvas: &mut dyn Canvas,
        measure_group: GroupId,
        placement: CellPlacement,
        options: &LayoutOptions,
    ) -> Result<()> {
        self.require("attach_to_measure", LayoutState::WidthAssigned)?;

        let group = reuse_or_create(canvas, self.group, Some(measure_group), GroupClass::Cell);
        self.group = Some(group);
        self.height = placement.height;
        self.x = placement.x;
        self.y2 = placement.y2;

        if options.debug_borders {
            canvas.clear(group);
            canvas.rect(group, self.x, 0.0, self.width, self.height);
        }

        self.state = LayoutState::Flowed;
        Ok(())
    }

    /// Forget the drawable group, e.g. before flowing onto a new canvas.
    pub fn detach(&mut self) {
        self.group = None;
    }
}

impl Layoutable for LayoutCell {
    fn node(&self) -> Node {
        Node::Cell {
            part: self.source.part,
            measure: self.source.measure,
        }
    }

    fn state(&self) -> LayoutState {
        self.state
    }

    fn min_width(&self) -> Option<f64> {
        self.min_width
    }

    fn reset(&mut self) {
        self.min_width = None;
        self.width = 0.0;
        self.height = 0.0;
        self.x = 0.0;
        self.y2 = 0.0;
        self.state = LayoutState::Unsized;
    }
}
