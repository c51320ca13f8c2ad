//! System layout — one horizontal line of measures sharing one height.

use super::measure::LayoutMeasure;
use super::{LayoutState, Layoutable, Node, Result};
use crate::error::LayoutError;
use crate::graphics::{reuse_or_create, Canvas, GroupClass, GroupId};
use crate::options::LayoutOptions;

#[derive(Debug, Clone)]
pub struct LayoutSystem {
    index: usize,
    measures: Vec<LayoutMeasure>,
    height: Option<f64>,
    width_budget: Option<f64>,
    min_width: Option<f64>,
    y: f64,
    group: Option<GroupId>,
    state: LayoutState,
}

impl LayoutSystem {
    /// `measures` are in left-to-right order, as decided by line breaking.
    pub fn new(index: usize, measures: Vec<LayoutMeasure>) -> Self {
        Self {
            index,
            measures,
            height: None,
            width_budget: None,
            min_width: None,
            y: 0.0,
            group: None,
            state: LayoutState::Unsized,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn measures(&self) -> &[LayoutMeasure] {
        &self.measures
    }

    pub fn measure_mut(&mut self, idx: usize) -> Option<&mut LayoutMeasure> {
        self.measures.get_mut(idx)
    }

    /// Vertical extent, as computed by staff stacking.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = Some(height);
    }

    /// Width the justifier may fill; `None` means the page content width.
    pub fn width_budget(&self) -> Option<f64> {
        self.width_budget
    }

    pub fn set_width_budget(&mut self, width: f64) {
        self.width_budget = Some(width);
    }

    /// Sum of the final measure widths.
    pub fn width(&self) -> f64 {
        self.measures.iter().map(LayoutMeasure::width).sum()
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Minimum widths of all measures, in order.
    pub fn measure_min_widths(&self) -> Vec<f64> {
        self.measures
            .iter()
            .map(|m| m.min_width().unwrap_or(0.0))
            .collect()
    }

    /// Measure every cell, then every measure; the system minimum is the sum.
    pub fn compute_min_width(&mut self, options: &LayoutOptions) -> Result<f64> {
        let mut total = 0.0;
        for measure in &mut self.measures {
            measure.measure_cells()?;
            total += measure.compute_min_width(options)?;
        }
        self.min_width = Some(total);
        self.state = LayoutState::MinWidthComputed;
        log::debug!(
            "system {}: {} measures, min width {:.1}",
            self.index,
            self.measures.len(),
            total
        );
        Ok(total)
    }

    /// Create (or reuse) the system group under `parent`.
    pub fn bind(&mut self, canvas: &mut dyn Canvas, parent: Option<GroupId>) -> GroupId {
        let group = reuse_or_create(canvas, self.group, parent, GroupClass::System);
        self.group = Some(group);
        group
    }

    /// Place the system group on the page.
    pub fn set_y(&mut self, canvas: &mut dyn Canvas, x: f64, y: f64) -> Result<()> {
        let group = self.bound_group("set_y")?;
        self.y = y;
        canvas.translate(group, x, y);
        Ok(())
    }

    /// Assign final widths and flow every measure, left to right.
    ///
    /// Each measure's `x` is the sum of the widths before it. All widths are
    /// validated before any measure changes.
    pub fn flow(
        &mut self,
        canvas: &mut dyn Canvas,
        options: &LayoutOptions,
        widths: &[f64],
    ) -> Result<()> {
        self.require("flow", LayoutState::MinWidthComputed)?;
        let group = self.bound_group("flow")?;
        let height = self.height.ok_or_else(|| {
            log::warn!("system {}: flow before its height was set", self.index);
            self.out_of_order("flow")
        })?;

        if widths.len() != self.measures.len() {
            return Err(LayoutError::WidthCountMismatch {
                system: self.index,
                expected: self.measures.len(),
                actual: widths.len(),
            });
        }
        for (measure, &w) in self.measures.iter().zip(widths) {
            measure.check_width(w)?;
        }

        let mut x = 0.0;
        for (measure, &w) in self.measures.iter_mut().zip(widths) {
            measure.bind_to_system(canvas, group, height);
            measure.set_width(w)?;
            measure.set_x(canvas, x)?;
            measure.flow(canvas, options)?;
            x += w;
        }

        self.state = LayoutState::Flowed;
        log::debug!("system {}: flowed, width {:.1}", self.index, x);
        Ok(())
    }

    /// Forget all drawable groups, e.g. before flowing onto a new canvas.
    pub fn detach(&mut self) {
        self.group = None;
        for measure in &mut self.measures {
            measure.detach();
        }
    }

    fn bound_group(&self, operation: &'static str) -> Result<GroupId> {
        self.group.ok_or_else(|| self.out_of_order(operation))
    }

    fn out_of_order(&self, operation: &'static str) -> LayoutError {
        LayoutError::OutOfOrderPass {
            node: self.node(),
            operation,
            state: self.state,
        }
    }
}

impl Layoutable for LayoutSystem {
    fn node(&self) -> Node {
        Node::System(self.index)
    }

    fn state(&self) -> LayoutState {
        self.state
    }

    fn min_width(&self) -> Option<f64> {
        self.min_width
    }

    fn reset(&mut self) {
        self.min_width = None;
        self.y = 0.0;
        self.state = LayoutState::Unsized;
        for measure in &mut self.measures {
            measure.reset();
        }
    }
}
