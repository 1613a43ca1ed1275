//! Pure geometry helpers: points, rectangles, distances, and hexagon vertices.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::FRAC_PI_3;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle, `min` top-left and `max` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow the rectangle by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: self.min.offset(-margin, -margin),
            max: self.max.offset(margin, margin),
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Where the background image sits in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFootprint {
    /// World position of the image's top-left pixel.
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl ImageFootprint {
    /// Footprint of a `width` x `height` image centered on `center`.
    #[must_use]
    pub fn centered_on(center: Point, width: u32, height: u32) -> Self {
        let origin = center.offset(-f64::from(width) * 0.5, -f64::from(height) * 0.5);
        Self { origin, width, height }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, self.origin.offset(f64::from(self.width), f64::from(self.height)))
    }
}

/// Straight-line distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Ruler pixel length per real-world unit, given the ruler endpoints and the
/// real-world length the ruler represents.
///
/// Returns `0.0` for a degenerate ruler or a non-positive reference length.
#[must_use]
pub fn units_per_pixel(start: Point, end: Point, reference_length: f64) -> f64 {
    if reference_length <= 0.0 {
        return 0.0;
    }
    let ratio = distance(start, end) / reference_length;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// Sum of segment lengths along `points`, in pixels.
#[must_use]
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Vertices of a regular hexagon, starting at angle 0 and stepping 60°.
#[must_use]
pub fn hexagon_vertices(center: Point, radius: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = FRAC_PI_3 * i as f64;
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}
