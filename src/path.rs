//! User-drawn travel path.
//!
//! A path is an ordered list of world points. Once finished it accepts no more
//! points until it is restarted or cleared.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::geometry::{self, Point};

/// Ordered path points plus the finished flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathModel {
    finished: bool,
    points: Vec<Point>,
}

impl PathModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point to an unfinished path.
    ///
    /// Returns `false` and leaves the path untouched if it is already finished.
    pub fn append(&mut self, point: Point) -> bool {
        if self.finished {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Replace the path with a fresh single-point path.
    pub fn restart(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
        self.finished = false;
        log::debug!("path restarted at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Append a final point and mark the path finished.
    pub fn finish_with(&mut self, point: Point) {
        self.points.push(point);
        self.finished = true;
        log::debug!("path finished with {} points", self.points.len());
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.finished = false;
    }

    /// Path length in pixels.
    #[must_use]
    pub fn pixel_length(&self) -> f64 {
        geometry::path_length(&self.points)
    }

    /// Real-world path length.
    ///
    /// Paths with fewer than two points measure `Some(0.0)`. Otherwise `None`
    /// means the distance is unknown because no usable calibration exists.
    #[must_use]
    pub fn distance(&self, units_per_pixel: f64) -> Option<f64> {
        if self.points.len() < 2 {
            return Some(0.0);
        }
        if !units_per_pixel.is_finite() || units_per_pixel <= 0.0 {
            return None;
        }
        Some(self.pixel_length() / units_per_pixel)
    }
}
