//! Layout snapshot: the flowed geometry of every system, measure and cell
//! in plain serializable records, for hosts that position their own
//! overlays (cursors, selections) over the rendered SVG.

use serde::Serialize;

use crate::layout::{LayoutEngine, Layoutable};

/// Complete flowed geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub systems: Vec<SystemPosition>,
    pub measures: Vec<MeasurePosition>,
    pub cells: Vec<CellPosition>,
    /// Page height including margins
    pub total_height: f64,
}

/// Position and dimensions of a system (line of music).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemPosition {
    pub index: usize,
    /// Y coordinate of the system's top edge on the page
    pub y: f64,
    pub height: f64,
    /// Sum of the final measure widths
    pub width: f64,
    pub min_width: f64,
}

/// Position of a measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurePosition {
    /// Index of the measure in the score
    pub measure_idx: usize,
    /// Which system (line) this measure belongs to (0-based)
    pub system_idx: usize,
    /// X offset within the system
    pub x: f64,
    /// X coordinate on the page
    pub page_x: f64,
    pub width: f64,
    pub min_width: f64,
}

/// Geometry of a cell within its measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellPosition {
    pub part: usize,
    pub measure: usize,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub y2: f64,
}

impl LayoutSnapshot {
    pub fn from_engine(engine: &LayoutEngine) -> Self {
        let margin_left = engine.options().page_margin_left;
        let mut systems = Vec::new();
        let mut measures = Vec::new();
        let mut cells = Vec::new();

        for (system_idx, system) in engine.systems().iter().enumerate() {
            systems.push(SystemPosition {
                index: system.index(),
                y: system.y(),
                height: system.height().unwrap_or(0.0),
                width: system.width(),
                min_width: system.min_width().unwrap_or(0.0),
            });

            for measure in system.measures() {
                measures.push(MeasurePosition {
                    measure_idx: measure.index(),
                    system_idx,
                    x: measure.x(),
                    page_x: margin_left + measure.x(),
                    width: measure.width(),
                    min_width: measure.min_width().unwrap_or(0.0),
                });

                cells.extend(measure.cells().iter().map(|cell| CellPosition {
                    part: cell.source().part,
                    measure: cell.source().measure,
                    x: cell.x(),
                    width: cell.width(),
                    height: cell.height(),
                    y2: cell.y2(),
                }));
            }
        }

        Self {
            systems,
            measures,
            cells,
            total_height: engine.total_height(),
        }
    }
}

/// Serialize a LayoutSnapshot to JSON.
pub fn snapshot_to_json(snapshot: &LayoutSnapshot) -> String {
    serde_json::to_string(snapshot).unwrap_or_else(|_| "{}".to_string())
}
