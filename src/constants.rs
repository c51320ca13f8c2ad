//! Default spacing constants for the layout core (all in SVG user units).
//!
//! These seed [`LayoutOptions::default`](crate::LayoutOptions); callers that
//! need different spacing override the options, never these values.

// ── Page & margins ──────────────────────────────────────────────────
pub(crate) const DEFAULT_PAGE_WIDTH: f64 = 820.0;
pub(crate) const PAGE_MARGIN_LEFT: f64 = 50.0;
pub(crate) const PAGE_MARGIN_RIGHT: f64 = 30.0;
pub(crate) const PAGE_MARGIN_TOP: f64 = 30.0;
pub(crate) const PAGE_MARGIN_BOTTOM: f64 = 40.0;

// ── Staff stacking ──────────────────────────────────────────────────
pub(crate) const STAFF_HEIGHT: f64 = 40.0; // 5 lines, 4 spaces
pub(crate) const SYSTEM_SPACING: f64 = 90.0; // vertical space between systems
pub(crate) const GRAND_STAFF_GAP: f64 = 60.0; // vertical gap between staves in a grand staff
pub(crate) const PART_GAP: f64 = 80.0; // vertical gap between different parts/instruments

// ── Measure padding ─────────────────────────────────────────────────
pub(crate) const MEASURE_PADDING_LEFT: f64 = 14.0;
pub(crate) const MEASURE_PADDING_RIGHT: f64 = 14.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const BORDER_COLOR: &str = "#c0c0ff";
pub(crate) const BORDER_WIDTH: f64 = 0.5;
