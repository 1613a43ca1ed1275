//! Input model: interaction modes, modifier keys, and routed events.
//!
//! The host captures raw pointer/wheel events and turns each into one
//! [`InteractionEvent`], tagged with the active [`Mode`]. The engine never sees
//! raw DOM events and does no gesture recognition of its own.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which interaction the user has selected in the host toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Drag to pan, wheel to zoom (default).
    #[default]
    Pan,
    /// Clicks place the calibration ruler endpoints.
    Configure,
    /// Clicks extend the travel path.
    Draw,
}

impl Mode {
    /// CSS cursor the host should show while this mode is active.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Pan => "grab",
            Self::Configure | Self::Draw => "crosshair",
        }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the "finish path" modifier is held (Ctrl, or Command on macOS).
    #[must_use]
    pub fn finish_held(self) -> bool {
        self.ctrl || self.meta
    }
}

/// One discrete interaction, already reduced by the host's input capture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Mode that was active when the event fired.
    pub mode: Mode,
    /// Pointer position in host screen space.
    pub screen: Point,
    /// World-space amount to move the viewport's top-left corner by.
    pub pan_delta: Option<Point>,
    /// Multiplicative zoom factor (`> 1.0` zooms in).
    pub zoom_factor: Option<f64>,
    pub modifiers: Modifiers,
}

impl InteractionEvent {
    /// A click at `screen` in `mode`.
    #[must_use]
    pub fn click(mode: Mode, screen: Point, modifiers: Modifiers) -> Self {
        Self { mode, screen, pan_delta: None, zoom_factor: None, modifiers }
    }

    /// A pan-mode drag step.
    #[must_use]
    pub fn pan(delta: Point) -> Self {
        Self { mode: Mode::Pan, pan_delta: Some(delta), ..Self::default() }
    }

    /// A pan-mode zoom step.
    #[must_use]
    pub fn zoom(factor: f64) -> Self {
        Self { mode: Mode::Pan, zoom_factor: Some(factor), ..Self::default() }
    }
}
