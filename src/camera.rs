//! Viewport state and screen/world coordinate conversions.
//!
//! World space is the background image's own pixel space. Screen space is the
//! pointer position reported by the host in CSS pixels, measured from the top
//! of the page, so it includes the control bar above the canvas. The
//! [`ScreenFrame`] carries those two host facts; the [`Viewport`] carries the
//! pan/zoom state and canvas size. Conversions never mutate either.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{CONTROL_BAR_HEIGHT, DENSITY_FACTOR};
use crate::geometry::{Point, Rect};

/// Errors from viewport updates.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// Zoom scale must be strictly positive and finite.
    #[error("invalid zoom scale: {0}")]
    InvalidScale(f64),
    /// Pan offset must be finite.
    #[error("invalid pan offset: ({x}, {y})")]
    InvalidPan { x: f64, y: f64 },
}

/// Fixed facts about how host screen points map onto the canvas backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFrame {
    /// Backing-store pixels per CSS pixel.
    pub density: f64,
    /// Backing-store height of the control bar above the canvas.
    pub control_bar_height: f64,
}

impl Default for ScreenFrame {
    fn default() -> Self {
        Self { density: DENSITY_FACTOR, control_bar_height: CONTROL_BAR_HEIGHT }
    }
}

/// Pan/zoom camera over the background image.
///
/// `pan` is the world-space point at the canvas's top-left corner.
/// `scale` is the zoom factor (1.0 = one backing pixel per world pixel).
/// `canvas_width` / `canvas_height` are backing-store pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pan: Point,
    scale: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan: Point::default(), scale: 1.0, canvas_width: 0, canvas_height: 0 }
    }
}

impl Viewport {
    /// Build a viewport, rejecting a non-positive or non-finite scale.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError`] if `scale` or `pan` is invalid.
    pub fn new(pan: Point, scale: f64, canvas_width: u32, canvas_height: u32) -> Result<Self, ViewportError> {
        let mut viewport = Self { canvas_width, canvas_height, ..Self::default() };
        viewport.set_pan(pan)?;
        viewport.set_scale(scale)?;
        Ok(viewport)
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Move the viewport's top-left corner. Scale and size are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidPan`] if either coordinate is not finite.
    pub fn set_pan(&mut self, pan: Point) -> Result<(), ViewportError> {
        if !pan.is_finite() {
            return Err(ViewportError::InvalidPan { x: pan.x, y: pan.y });
        }
        self.pan = pan;
        Ok(())
    }

    /// Change the zoom factor. Pan and size are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidScale`] unless `scale` is finite and `> 0`.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Change the canvas size. Pan and scale are untouched.
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }

    /// Convert a host screen point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, frame: &ScreenFrame) -> Point {
        Point {
            x: self.pan.x + screen.x * frame.density / self.scale,
            y: self.pan.y + (screen.y * frame.density - frame.control_bar_height) / self.scale,
        }
    }

    /// Convert a world point to a host screen point. Inverse of [`Self::screen_to_world`].
    #[must_use]
    pub fn world_to_screen(&self, world: Point, frame: &ScreenFrame) -> Point {
        Point {
            x: (world.x - self.pan.x) * self.scale / frame.density,
            y: ((world.y - self.pan.y) * self.scale + frame.control_bar_height) / frame.density,
        }
    }

    /// Convert a screen-space length (pixels) to world-space length.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// World-space rectangle currently covered by the canvas.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let bottom_right = self.pan.offset(
            f64::from(self.canvas_width) / self.scale,
            f64::from(self.canvas_height) / self.scale,
        );
        Rect::new(self.pan, bottom_right)
    }

    /// Canvas center as seen with zero pan at unit scale. The background image
    /// and origin marker are laid out around this point.
    #[must_use]
    pub fn layout_center(&self) -> Point {
        Point::new(f64::from(self.canvas_width) * 0.5, f64::from(self.canvas_height) * 0.5)
    }
}
