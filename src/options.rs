//! Layout configuration.
//!
//! Options are read once per layout pass and never mutated by the core.
//! Field names serialize in camelCase so host applications can pass the
//! familiar `measurePaddingLeft` / `measurePaddingRight` keys unchanged.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::LayoutError;

/// Named numeric options consumed by the layout core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Space between the opening bar line and the cell content
    pub measure_padding_left: f64,
    /// Space between the cell content and the closing bar line
    pub measure_padding_right: f64,
    /// Page width in SVG user units
    pub page_width: f64,
    pub page_margin_left: f64,
    pub page_margin_right: f64,
    pub page_margin_top: f64,
    pub page_margin_bottom: f64,
    /// Vertical space between consecutive systems
    pub system_spacing: f64,
    /// Height of one five-line staff
    pub staff_height: f64,
    /// Gap between the staves of a grand staff
    pub grand_staff_gap: f64,
    /// Gap between different parts stacked in one system
    pub part_gap: f64,
    /// Outline every cell when flowing (layout debugging)
    pub debug_borders: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            measure_padding_left: MEASURE_PADDING_LEFT,
            measure_padding_right: MEASURE_PADDING_RIGHT,
            page_width: DEFAULT_PAGE_WIDTH,
            page_margin_left: PAGE_MARGIN_LEFT,
            page_margin_right: PAGE_MARGIN_RIGHT,
            page_margin_top: PAGE_MARGIN_TOP,
            page_margin_bottom: PAGE_MARGIN_BOTTOM,
            system_spacing: SYSTEM_SPACING,
            staff_height: STAFF_HEIGHT,
            grand_staff_gap: GRAND_STAFF_GAP,
            part_gap: PART_GAP,
            debug_borders: false,
        }
    }
}

impl LayoutOptions {
    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Options(e.to_string()))
    }

    /// Total horizontal padding of a measure (left + right).
    pub fn measure_padding(&self) -> f64 {
        self.measure_padding_left + self.measure_padding_right
    }

    /// Width available to one system: page width minus horizontal margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - self.page_margin_left - self.page_margin_right
    }
}
