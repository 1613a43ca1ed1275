//! Two-click ruler calibration.
//!
//! The user clicks the two ends of a known real-world distance. The first click
//! sets `start`, the second sets `end` and derives `units_per_pixel`, and a
//! third click starts over. `units_per_pixel` is the ruler's pixel length per
//! real-world unit, so a pixel distance divided by it is a real-world distance.

#[cfg(test)]
#[path = "calibration_test.rs"]
mod calibration_test;

use crate::consts::RULER_REFERENCE_LENGTH;
use crate::geometry::{self, Point};

/// What a calibration click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationStep {
    /// A new ruler was started at this point.
    Started(Point),
    /// The ruler was completed, producing this ratio.
    Completed { units_per_pixel: f64 },
}

/// Ruler endpoints and the derived pixel-to-unit ratio.
///
/// `end` is only ever set while `start` is set, and `units_per_pixel` is zero
/// whenever `end` is unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    start: Option<Point>,
    end: Option<Point>,
    units_per_pixel: f64,
    reference_length: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(RULER_REFERENCE_LENGTH)
    }
}

impl Calibration {
    /// An empty calibration whose ruler represents `reference_length` units.
    #[must_use]
    pub fn new(reference_length: f64) -> Self {
        Self { start: None, end: None, units_per_pixel: 0.0, reference_length }
    }

    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[must_use]
    pub fn units_per_pixel(&self) -> f64 {
        self.units_per_pixel
    }

    #[must_use]
    pub fn reference_length(&self) -> f64 {
        self.reference_length
    }

    /// Whether a usable (non-degenerate) ratio exists.
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.units_per_pixel > 0.0
    }

    /// Advance the ruler by one click at `point` (world space).
    pub fn record_click(&mut self, point: Point) -> CalibrationStep {
        match (self.start, self.end) {
            (Some(start), None) => {
                let ratio = geometry::units_per_pixel(start, point, self.reference_length);
                self.end = Some(point);
                self.units_per_pixel = ratio;
                log::debug!(
                    "ruler completed: {:.1}px = {} units, ratio {ratio}",
                    geometry::distance(start, point),
                    self.reference_length
                );
                CalibrationStep::Completed { units_per_pixel: ratio }
            }
            _ => {
                self.start = Some(point);
                self.end = None;
                self.units_per_pixel = 0.0;
                log::debug!("ruler started at ({:.1}, {:.1})", point.x, point.y);
                CalibrationStep::Started(point)
            }
        }
    }
}
