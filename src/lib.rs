//! scorelayout — two-pass layout core for SVG score rendering.
//!
//! Given systems of measures, each measure holding one cell per voice, the
//! engine computes every measure's minimum width (bottom-up), takes final
//! widths from a justifier, and flows systems → measures → cells (top-down)
//! into nested drawable groups.
//!
//! # Example
//! ```no_run
//! use scorelayout::{
//!     CellMetrics, FillLine, LayoutCell, LayoutEngine, LayoutMeasure, LayoutOptions,
//!     LayoutSystem, ModelRef,
//! };
//!
//! let cells = vec![LayoutCell::new(ModelRef::new(0, 0), CellMetrics::new(40.0))];
//! let mut system = LayoutSystem::new(0, vec![LayoutMeasure::new(0, cells)]);
//! system.set_height(40.0);
//!
//! let mut engine = LayoutEngine::new(vec![system], LayoutOptions::default());
//! let svg = engine.render_svg(&FillLine).unwrap();
//! println!("{svg}");
//! ```

mod constants;
pub mod error;
pub mod graphics;
pub mod layout;
pub mod options;
pub mod snapshot;

pub use error::LayoutError;
pub use graphics::{Canvas, GroupClass, GroupId, SvgCanvas};
pub use layout::staff::stacked_height;
pub use layout::{
    BarGeometry, CellMetrics, CellPlacement, FillLine, Justifier, LayoutCell, LayoutEngine,
    LayoutMeasure, LayoutState, LayoutSystem, Layoutable, MinimumWidths, ModelRef, Node,
};
pub use options::LayoutOptions;
pub use snapshot::{snapshot_to_json, LayoutSnapshot};

/// Lay out `systems` with `options`, filling each line, and return the SVG.
pub fn layout_to_svg(systems: Vec<LayoutSystem>, options: LayoutOptions) -> Result<String, LayoutError> {
    LayoutEngine::new(systems, options).render_svg(&FillLine)
}

/// Lay out `systems` and return the flowed geometry as JSON.
///
/// `options_json` may be empty to use the defaults.
pub fn layout_to_json(systems: Vec<LayoutSystem>, options_json: &str) -> Result<String, LayoutError> {
    let options = if options_json.trim().is_empty() {
        LayoutOptions::default()
    } else {
        LayoutOptions::from_json(options_json)?
    };
    let mut engine = LayoutEngine::new(systems, options);
    let mut canvas = SvgCanvas::new(engine.options().page_width, 0.0);
    engine.run(&mut canvas, &FillLine)?;
    Ok(snapshot_to_json(&engine.snapshot()))
}
