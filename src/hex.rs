//! Hex grid overlay: tessellation over the image footprint, culled to the viewport.
//!
//! Cells are flat-topped hexagons of radius `hex_cell_size * units_per_pixel`,
//! so each cell models a fixed real-world size. Columns step by `1.5 * radius`
//! and every odd column is shifted down by half a row step. Only cells whose
//! center lies inside the visible world rectangle (plus a margin) are emitted,
//! and the column/row ranges are derived from that rectangle up front so the
//! work per frame tracks the visible cell count, not the image area.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use std::f64::consts::FRAC_PI_3;

use crate::camera::Viewport;
use crate::config::MapConfig;
use crate::consts::HEX_ROW_SEAM_CORRECTION;
use crate::geometry::{self, ImageFootprint, Point, Rect};

/// Slack on column/row index bounds. Centers on the cull edge must survive
/// float rounding of the quotient; `Rect::contains` stays the exact filter.
const INDEX_EPSILON: f64 = 1e-9;

/// One hexagon of the overlay. Derived each frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    pub center: Point,
    pub radius: f64,
}

impl HexCell {
    #[must_use]
    pub fn vertices(&self) -> [Point; 6] {
        geometry::hexagon_vertices(self.center, self.radius)
    }
}

/// Tiling parameters for a given cell radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGrid {
    radius: f64,
    col_step: f64,
    row_step: f64,
}

impl HexGrid {
    /// Tiling for cells of `radius` world pixels.
    ///
    /// Returns `None` when the radius is too small for the seam correction to
    /// leave a positive row step.
    #[must_use]
    pub fn new(radius: f64) -> Option<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let col_step = radius + radius * FRAC_PI_3.cos();
        let row_step = radius * FRAC_PI_3.sin() + radius - HEX_ROW_SEAM_CORRECTION;
        if row_step <= 0.0 {
            log::debug!("hex radius {radius} too small for a positive row step");
            return None;
        }
        Some(Self { radius, col_step, row_step })
    }

    /// Tiling for the current calibration.
    #[must_use]
    pub fn for_calibration(units_per_pixel: f64, cell_size: f64) -> Option<Self> {
        Self::new(cell_size * units_per_pixel)
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn col_step(&self) -> f64 {
        self.col_step
    }

    #[must_use]
    pub fn row_step(&self) -> f64 {
        self.row_step
    }

    /// Cells tiling `image` whose centers fall inside `cull`, at most `limit` of them.
    ///
    /// Cell positions are laid out in image-local pixels starting at the
    /// image's top-left corner.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn cells_in(&self, image: &ImageFootprint, cull: Rect, limit: usize) -> Vec<HexCell> {
        let width = f64::from(image.width);
        let height = f64::from(image.height);
        let mut cells = Vec::new();
        if width <= 0.0 || height <= 0.0 || limit == 0 {
            return cells;
        }

        let origin = image.origin;
        let col_count = (width / self.col_step).ceil();
        let first_col = ((cull.min.x - origin.x) / self.col_step - INDEX_EPSILON).ceil().max(0.0);
        let last_col = ((cull.max.x - origin.x) / self.col_step + INDEX_EPSILON).floor().min(col_count - 1.0);
        if first_col > last_col {
            return cells;
        }

        for col in (first_col as i64)..=(last_col as i64) {
            let local_x = col as f64 * self.col_step;
            if local_x >= width {
                break;
            }
            let shift = if col % 2 == 1 { self.row_step * 0.5 } else { 0.0 };
            if shift >= height {
                continue;
            }
            let row_count = ((height - shift) / self.row_step).ceil();
            let first_row = ((cull.min.y - origin.y - shift) / self.row_step - INDEX_EPSILON).ceil().max(0.0);
            let last_row = ((cull.max.y - origin.y - shift) / self.row_step + INDEX_EPSILON).floor().min(row_count - 1.0);
            if first_row > last_row {
                continue;
            }

            for row in (first_row as i64)..=(last_row as i64) {
                let local_y = row as f64 * self.row_step + shift;
                if local_y >= height {
                    break;
                }
                let center = origin.offset(local_x, local_y);
                if !cull.contains(center) {
                    continue;
                }
                if cells.len() == limit {
                    log::warn!("hex grid capped at {limit} cells");
                    return cells;
                }
                cells.push(HexCell { center, radius: self.radius });
            }
        }
        cells
    }
}

/// Whether the grid should be drawn at all.
#[must_use]
pub fn is_eligible(units_per_pixel: f64, image: Option<&ImageFootprint>, scale: f64, config: &MapConfig) -> bool {
    units_per_pixel > 0.0 && image.is_some() && scale > config.hex_min_scale
}

/// The rectangle cell centers must fall inside to be drawn.
#[must_use]
pub fn cull_rect(viewport: &Viewport, margin: f64) -> Rect {
    viewport.visible_world_rect().expand(margin)
}

/// Cells to draw for the current frame, or none if the grid is not eligible.
#[must_use]
pub fn visible_cells(
    image: Option<&ImageFootprint>,
    units_per_pixel: f64,
    viewport: &Viewport,
    config: &MapConfig,
) -> Vec<HexCell> {
    let Some(image) = image else {
        return Vec::new();
    };
    if !is_eligible(units_per_pixel, Some(image), viewport.scale(), config) {
        return Vec::new();
    }
    let Some(grid) = HexGrid::for_calibration(units_per_pixel, config.hex_cell_size) else {
        return Vec::new();
    };
    grid.cells_in(image, cull_rect(viewport, config.hex_cull_margin), config.max_hex_cells)
}
