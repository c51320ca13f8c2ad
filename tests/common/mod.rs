//! Shared builders for the layout tests.

#![allow(dead_code)]

use scorelayout::{
    CellMetrics, Justifier, LayoutCell, LayoutMeasure, LayoutOptions, LayoutSystem, ModelRef,
};

/// Options with padding (2, 3), as used by the worked two-measure example.
pub fn small_padding() -> LayoutOptions {
    LayoutOptions {
        measure_padding_left: 2.0,
        measure_padding_right: 3.0,
        ..LayoutOptions::default()
    }
}

/// A measure with one cell per entry of `content_widths`; every cell has a
/// 4-unit opening bar and a 2-unit closing bar.
pub fn measure(index: usize, content_widths: &[f64]) -> LayoutMeasure {
    let cells = content_widths
        .iter()
        .enumerate()
        .map(|(part, &w)| {
            LayoutCell::new(ModelRef::new(part, index), CellMetrics::new(w).with_bars(4.0, 2.0))
        })
        .collect();
    LayoutMeasure::new(index, cells)
}

pub fn system(index: usize, height: f64, measures: Vec<LayoutMeasure>) -> LayoutSystem {
    let mut system = LayoutSystem::new(index, measures);
    system.set_height(height);
    system
}

/// Justifier returning fixed widths per system index.
pub struct Fixed(pub Vec<Vec<f64>>);

impl Justifier for Fixed {
    fn justify(&self, system: &LayoutSystem, _budget: f64) -> Vec<f64> {
        self.0.get(system.index()).cloned().unwrap_or_default()
    }
}
