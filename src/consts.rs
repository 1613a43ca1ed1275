//! Shared numeric constants for the map engine.
//!
//! Values marked as defaults seed [`crate::config::MapConfig`]; the rest are
//! fixed presentation constants.

// ── Calibration / distance ──────────────────────────────────────

/// Real-world length the two-click ruler is assumed to span.
pub const RULER_REFERENCE_LENGTH: f64 = 500.0;

/// Distance units covered per day of travel, used for the HUD estimate.
pub const DAILY_TRAVEL_RATE: f64 = 24.0;

/// Label for real-world distance units shown in the HUD.
pub const UNIT_LABEL: &str = "miles";

// ── Screen ──────────────────────────────────────────────────────

/// Backing-store pixels per CSS pixel on the canvas.
pub const DENSITY_FACTOR: f64 = 2.0;

/// Height of the host's control bar above the canvas, in backing pixels.
pub const CONTROL_BAR_HEIGHT: f64 = 40.0;

/// Default zoom limits for wheel/pinch zoom.
pub const MIN_ZOOM: f64 = 0.05;
pub const MAX_ZOOM: f64 = 64.0;

// ── Hex grid ────────────────────────────────────────────────────

/// Hex radius in world pixels per unit of `units_per_pixel`.
pub const HEX_CELL_SIZE: f64 = 12.0;

/// The grid is drawn only when zoomed in strictly past this scale.
pub const HEX_MIN_SCALE: f64 = 3.0;

/// World-space margin around the visible rectangle when culling cells.
pub const HEX_CULL_MARGIN: f64 = 20.0;

/// Upper bound on cells emitted per frame.
pub const MAX_HEX_CELLS: usize = 20_000;

/// Subtracted from the hex row step to close a visible seam between rows.
///
/// Empirically tuned against rendered output, not derived.
pub const HEX_ROW_SEAM_CORRECTION: f64 = 2.0;

// ── Markers ─────────────────────────────────────────────────────

/// Screen-space shift that puts the marker's pin tip on the clicked point.
///
/// Empirically tuned against rendered output, not derived.
pub const MARKER_VISUAL_OFFSET: (f64, f64) = (-5.0, -47.0);

/// Calibration marker radius in world units.
pub const RULER_MARKER_RADIUS: f64 = 20.0;

/// Calibration line width in world units.
pub const RULER_LINE_WIDTH: f64 = 4.0;

/// Path marker radius in screen pixels.
pub const PATH_MARKER_RADIUS_PX: f64 = 15.0;

/// Path segment width in screen pixels.
pub const PATH_LINE_WIDTH_PX: f64 = 4.0;

/// Side of the origin reference square in world units.
pub const ORIGIN_SQUARE_SIZE: f64 = 20.0;

// ── HUD ─────────────────────────────────────────────────────────

/// HUD font size in screen pixels.
pub const HUD_FONT_PX: f64 = 32.0;

/// Left padding of HUD text; the panel adds the same on the right.
pub const HUD_PADDING_PX: f64 = 10.0;

/// Baseline of the first HUD line below the panel top.
pub const HUD_FIRST_BASELINE_PX: f64 = 35.0;

/// Distance between consecutive HUD baselines.
pub const HUD_LINE_STEP_PX: f64 = 40.0;

/// Space below the last HUD baseline.
pub const HUD_BOTTOM_PADDING_PX: f64 = 25.0;

// ── Colors ──────────────────────────────────────────────────────

pub const ORIGIN_MARKER_COLOR: &str = "#000";
pub const HEX_STROKE_COLOR: &str = "rgba(0, 0, 0, 0.15)";
pub const HEX_LINE_WIDTH: f64 = 1.0;
pub const HUD_FILL_COLOR: &str = "rgba(255, 255, 255, 0.8)";
pub const HUD_TEXT_COLOR: &str = "#000";
pub const MARKER_COLOR: &str = "red";
