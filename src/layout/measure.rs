//! Measure layout — aggregates the cells of one measure across voices.
//!
//! All cells of a measure share one width. The first cell is the reference
//! voice: its bar-line geometry stands for the whole measure.

use super::cell::{BarGeometry, CellPlacement, LayoutCell};
use super::{LayoutState, Layoutable, Node, Result};
use crate::error::LayoutError;
use crate::graphics::{reuse_or_create, Canvas, GroupClass, GroupId};
use crate::options::LayoutOptions;

#[derive(Debug, Clone)]
pub struct LayoutMeasure {
    index: usize,
    cells: Vec<LayoutCell>,
    min_width: Option<f64>,
    padding: f64,
    width: f64,
    x: f64,
    height: f64,
    group: Option<GroupId>,
    state: LayoutState,
}

impl LayoutMeasure {
    /// `index` is the measure's position in the score; `cells` holds one
    /// cell per voice, reference voice first.
    pub fn new(index: usize, cells: Vec<LayoutCell>) -> Self {
        Self {
            index,
            cells,
            min_width: None,
            padding: 0.0,
            width: 0.0,
            x: 0.0,
            height: 0.0,
            group: None,
            state: LayoutState::Unsized,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[LayoutCell] {
        &self.cells
    }

    pub fn cell_mut(&mut self, idx: usize) -> Option<&mut LayoutCell> {
        self.cells.get_mut(idx)
    }

    /// Left + right padding, fixed by the last `compute_min_width`.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Offset from the system's origin.
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn bar_left_in_system(&self) -> BarGeometry {
        self.cells
            .first()
            .map(LayoutCell::bar_left_in_system)
            .unwrap_or_default()
    }

    pub fn bar_right_in_system(&self) -> BarGeometry {
        self.cells
            .first()
            .map(LayoutCell::bar_right_in_system)
            .unwrap_or_default()
    }

    /// Run `compute_min_width` on every owned cell.
    pub fn measure_cells(&mut self) -> Result<()> {
        for cell in &mut self.cells {
            cell.compute_min_width()?;
        }
        Ok(())
    }

    /// `min_width = padding + max(cell.min_width)`.
    ///
    /// Every cell must already have computed its own minimum width.
    pub fn compute_min_width(&mut self, options: &LayoutOptions) -> Result<f64> {
        let mut content = 0.0_f64;
        for cell in &self.cells {
            cell.require("compute_min_width", LayoutState::MinWidthComputed)?;
            if let Some(w) = cell.min_width() {
                content = content.max(w);
            }
        }

        self.padding = options.measure_padding();
        let min_width = content + self.padding;
        self.min_width = Some(min_width);
        self.state = LayoutState::MinWidthComputed;
        log::trace!("measure {}: min width {:.1}", self.index, min_width);
        Ok(min_width)
    }

    /// Create (or reuse) the measure group under `system_group` and copy the system height.
    pub fn bind_to_system(&mut self, canvas: &mut dyn Canvas, system_group: GroupId, height: f64) {
        self.group = Some(reuse_or_create(
            canvas,
            self.group,
            Some(system_group),
            GroupClass::Measure,
        ));
        self.height = height;
    }

    /// Validate a final width without applying it: the measure and every
    /// cell must be sized, and `w` must be finite and at least the minimum.
    pub(crate) fn check_width(&self, w: f64) -> Result<()> {
        self.require("set_width", LayoutState::MinWidthComputed)?;
        for cell in &self.cells {
            cell.require("set_width", LayoutState::MinWidthComputed)?;
        }

        let min_width = self.min_width.unwrap_or(self.padding);
        if !w.is_finite() || w < min_width {
            log::warn!(
                "measure {}: width {} below minimum {}",
                self.index,
                w,
                min_width
            );
            return Err(LayoutError::InvalidWidth {
                measure: self.index,
                width: w,
                min_width,
            });
        }

        let cell_width = w - self.padding;
        for cell in &self.cells {
            cell.check_width(cell_width)?;
        }
        Ok(())
    }

    /// Assign the final width and give every cell `w - padding`.
    ///
    /// Fails without touching any cell when `w` is not a valid width.
    pub fn set_width(&mut self, w: f64) -> Result<()> {
        self.check_width(w)?;

        let cell_width = w - self.padding;
        for cell in &mut self.cells {
            cell.set_width(cell_width)?;
        }

        self.width = w;
        self.state = LayoutState::WidthAssigned;
        Ok(())
    }

    /// Translate the measure group by `(x, 0)` relative to its system.
    pub fn set_x(&mut self, canvas: &mut dyn Canvas, x: f64) -> Result<()> {
        let group = self.bound_group("set_x")?;
        self.x = x;
        canvas.translate(group, x, 0.0);
        Ok(())
    }

    /// Attach every cell to this measure.
    ///
    /// Every cell gets the same horizontal offset: half the reference
    /// voice's opening bar line plus the right padding.
    pub fn flow(&mut self, canvas: &mut dyn Canvas, options: &LayoutOptions) -> Result<()> {
        self.require("flow", LayoutState::WidthAssigned)?;
        let group = self.bound_group("flow")?;

        let placement = CellPlacement {
            height: self.height,
            x: self.bar_left_in_system().width / 2.0 + options.measure_padding_right,
            y2: self.height,
        };
        for cell in &mut self.cells {
            cell.attach_to_measure(canvas, group, placement, options)?;
        }

        self.state = LayoutState::Flowed;
        log::trace!(
            "measure {}: x {:.1} width {:.1} height {:.1}",
            self.index,
            self.x,
            self.width,
            self.height
        );
        Ok(())
    }

    /// Forget all drawable groups, e.g. before flowing onto a new canvas.
    pub fn detach(&mut self) {
        self.group = None;
        for cell in &mut self.cells {
            cell.detach();
        }
    }

    fn bound_group(&self, operation: &'static str) -> Result<GroupId> {
        self.group.ok_or_else(|| {
            log::warn!("measure {}: `{}` before binding to a system", self.index, operation);
            LayoutError::OutOfOrderPass {
                node: self.node(),
                operation,
                state: self.state,
            }
        })
    }
}

impl Layoutable for LayoutMeasure {
    fn node(&self) -> Node {
        Node::Measure(self.index)
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
        self.x = 0.0;
        self.height = 0.0;
        self.state = LayoutState::Unsized;
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}
