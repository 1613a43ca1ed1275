//! Engine tunables, loadable from JSON.
//!
//! Every field has a default, so the host can pass `{}` or only the fields it
//! wants to override. Values are validated after parsing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::ScreenFrame;
use crate::consts::{
    CONTROL_BAR_HEIGHT, DAILY_TRAVEL_RATE, DENSITY_FACTOR, HEX_CELL_SIZE, HEX_CULL_MARGIN, HEX_MIN_SCALE,
    MAX_HEX_CELLS, MAX_ZOOM, MIN_ZOOM, RULER_REFERENCE_LENGTH, UNIT_LABEL,
};

/// Errors produced while loading a [`MapConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for this struct.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field that must be strictly positive and finite was not.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A field that must be non-negative and finite was not.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// `min_zoom` exceeds `max_zoom`.
    #[error("zoom range is inverted: min {min} > max {max}")]
    ZoomRange { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Real-world length the calibration ruler spans.
    pub ruler_reference_length: f64,
    /// Name of the real-world unit, shown in the HUD.
    pub unit_label: String,
    /// Units travelled per day for the HUD travel estimate.
    pub daily_travel_rate: f64,
    /// Hex radius per unit of `units_per_pixel`.
    pub hex_cell_size: f64,
    /// Grid appears only when the zoom scale is strictly above this.
    pub hex_min_scale: f64,
    /// World-space margin around the viewport when culling hex cells.
    pub hex_cull_margin: f64,
    /// Upper bound on hex cells emitted per frame.
    pub max_hex_cells: usize,
    /// Backing-store pixels per CSS pixel.
    pub density_factor: f64,
    /// Height of the host control bar in backing pixels.
    pub control_bar_height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            ruler_reference_length: RULER_REFERENCE_LENGTH,
            unit_label: UNIT_LABEL.to_owned(),
            daily_travel_rate: DAILY_TRAVEL_RATE,
            hex_cell_size: HEX_CELL_SIZE,
            hex_min_scale: HEX_MIN_SCALE,
            hex_cull_margin: HEX_CULL_MARGIN,
            max_hex_cells: MAX_HEX_CELLS,
            density_factor: DENSITY_FACTOR,
            control_bar_height: CONTROL_BAR_HEIGHT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl MapConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric field is within its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ruler_reference_length", self.ruler_reference_length)?;
        positive("daily_travel_rate", self.daily_travel_rate)?;
        positive("hex_cell_size", self.hex_cell_size)?;
        positive("density_factor", self.density_factor)?;
        positive("min_zoom", self.min_zoom)?;
        positive("max_zoom", self.max_zoom)?;
        non_negative("hex_min_scale", self.hex_min_scale)?;
        non_negative("hex_cull_margin", self.hex_cull_margin)?;
        non_negative("control_bar_height", self.control_bar_height)?;
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        Ok(())
    }

    /// The screen mapping described by this config.
    #[must_use]
    pub fn screen_frame(&self) -> ScreenFrame {
        ScreenFrame { density: self.density_factor, control_bar_height: self.control_bar_height }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
