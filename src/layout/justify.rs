//! Justification — final per-measure widths for a sized system.
//!
//! Justification decisions belong to the host; the engine only asks a
//! [`Justifier`] for widths once every measure reports its minimum width.

use super::system::LayoutSystem;

pub trait Justifier {
    /// One width per measure of `system`, each at least that measure's minimum width.
    fn justify(&self, system: &LayoutSystem, budget: f64) -> Vec<f64>;
}

/// Every measure gets exactly its minimum width.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumWidths;

impl Justifier for MinimumWidths {
    fn justify(&self, system: &LayoutSystem, _budget: f64) -> Vec<f64> {
        system.measure_min_widths()
    }
}

/// Stretch measures proportionally to their minimum widths so the system
/// fills its budget. Never shrinks a measure below its minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillLine;

impl Justifier for FillLine {
    fn justify(&self, system: &LayoutSystem, budget: f64) -> Vec<f64> {
        stretch(&system.measure_min_widths(), budget)
    }
}

pub(crate) fn stretch(min_widths: &[f64], budget: f64) -> Vec<f64> {
    let total: f64 = min_widths.iter().sum();
    let scale = if total > 0.0 && budget > total {
        budget / total
    } else {
        1.0
    };
    min_widths.iter().map(|w| w * scale).collect()
}
