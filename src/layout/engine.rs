//! Layout engine — drives the two passes across all systems.
//!
//! Pass 1 (`measure_pass`) sizes every system bottom-up and finishes for all
//! systems before any width is consumed. Pass 2 (`flow_pass`) asks the
//! justifier for final widths and flows systems → measures → cells.

use super::justify::Justifier;
use super::system::LayoutSystem;
use super::{LayoutState, Layoutable, Result};
use crate::graphics::{Canvas, SvgCanvas};
use crate::options::LayoutOptions;
use crate::snapshot::LayoutSnapshot;

pub struct LayoutEngine {
    systems: Vec<LayoutSystem>,
    options: LayoutOptions,
    total_height: f64,
}

impl LayoutEngine {
    /// `systems` are in top-to-bottom reading order.
    pub fn new(systems: Vec<LayoutSystem>, options: LayoutOptions) -> Self {
        Self {
            systems,
            options,
            total_height: 0.0,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn systems(&self) -> &[LayoutSystem] {
        &self.systems
    }

    pub fn system_mut(&mut self, idx: usize) -> Option<&mut LayoutSystem> {
        self.systems.get_mut(idx)
    }

    /// Page height after the last flow: top margin, stacked systems, bottom margin.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Pass 1: restart every node and compute minimum widths bottom-up.
    pub fn measure_pass(&mut self) -> Result<()> {
        log::debug!("measure pass over {} systems", self.systems.len());
        for system in &mut self.systems {
            system.reset();
        }
        for system in &mut self.systems {
            system.compute_min_width(&self.options)?;
        }
        Ok(())
    }

    /// Pass 2: justify, then flow every system top to bottom.
    pub fn flow_pass(&mut self, canvas: &mut dyn Canvas, justifier: &dyn Justifier) -> Result<()> {
        for system in &self.systems {
            system.require("flow_pass", LayoutState::MinWidthComputed)?;
        }

        let options = &self.options;
        let mut y = options.page_margin_top;
        let mut bottom = y;
        for system in &mut self.systems {
            let budget = system.width_budget().unwrap_or_else(|| options.content_width());
            let widths = justifier.justify(system, budget);

            system.bind(canvas, None);
            system.set_y(canvas, options.page_margin_left, y)?;
            system.flow(canvas, options, &widths)?;

            bottom = y + system.height().unwrap_or(0.0);
            y = bottom + options.system_spacing;
        }
        self.total_height = bottom + options.page_margin_bottom;
        log::debug!("flow pass done, total height {:.1}", self.total_height);
        Ok(())
    }

    /// Both passes in order.
    pub fn run(&mut self, canvas: &mut dyn Canvas, justifier: &dyn Justifier) -> Result<()> {
        self.measure_pass()?;
        self.flow_pass(canvas, justifier)
    }

    /// Forget every drawable group so the next flow starts on a fresh canvas.
    pub fn detach(&mut self) {
        for system in &mut self.systems {
            system.detach();
        }
    }

    /// Run both passes onto a new SVG canvas and return the markup.
    pub fn render_svg(&mut self, justifier: &dyn Justifier) -> Result<String> {
        self.detach();
        let mut canvas = SvgCanvas::new(self.options.page_width, 0.0);
        self.run(&mut canvas, justifier)?;
        canvas.set_size(self.options.page_width, self.total_height);
        Ok(canvas.build())
    }

    /// Serializable geometry of the current layout.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_engine(self)
    }
}
