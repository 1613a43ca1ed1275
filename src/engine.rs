use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::calibration::{Calibration, CalibrationStep};
use crate::camera::{Viewport, ViewportError};
use crate::canvas2d;
use crate::config::MapConfig;
use crate::geometry::{ImageFootprint, Point};
use crate::input::{InteractionEvent, Mode};
use crate::path::PathModel;
use crate::render::{self, Frame, Scene, TextMeasure};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCursor(String),
    RenderNeeded,
}

/// Errors from painting a frame onto the canvas.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The canvas has no usable 2D context.
    #[error("canvas has no 2d context")]
    MissingContext,

    /// A `Canvas2D` call failed.
    #[error("canvas call failed: {0}")]
    Canvas(String),

    /// The host supplied an unusable top-left or scale.
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        Self::Canvas(format!("{value:?}"))
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: MapConfig,
    viewport: Viewport,
    calibration: Calibration,
    path: PathModel,
    mode: Mode,
    image: Option<ImageFootprint>,
    redraw_token: u64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: MapConfig) -> Self {
        Self {
            calibration: Calibration::new(config.ruler_reference_length),
            config,
            viewport: Viewport::default(),
            path: PathModel::new(),
            mode: Mode::default(),
            image: None,
            redraw_token: 0,
        }
    }

    // --- Host inputs ---

    /// Switch the active interaction mode.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.mode = mode;
        vec![Action::SetCursor(mode.cursor().to_owned())]
    }

    /// The canvas backing store changed size.
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32) -> Vec<Action> {
        self.viewport.resize(canvas_width, canvas_height);
        vec![Action::RenderNeeded]
    }

    /// The background image finished loading. It is centered on the canvas as
    /// currently sized and stays at that world position afterwards.
    pub fn attach_image(&mut self, width: u32, height: u32) -> Vec<Action> {
        let footprint = ImageFootprint::centered_on(self.viewport.layout_center(), width, height);
        log::info!(
            "image attached: {width}x{height} at ({:.1}, {:.1})",
            footprint.origin.x,
            footprint.origin.y
        );
        self.image = Some(footprint);
        vec![Action::RenderNeeded]
    }

    /// Route one host event according to its mode.
    pub fn handle_event(&mut self, event: &InteractionEvent) -> Vec<Action> {
        let top_left = self.viewport.pan();
        let scale = self.viewport.scale();
        match event.mode {
            Mode::Pan => {
                let mut changed = false;
                if let Some(delta) = event.pan_delta {
                    changed |= self.pan_by(delta);
                }
                if let Some(factor) = event.zoom_factor {
                    changed |= self.zoom_by(factor);
                }
                render_if(changed)
            }
            Mode::Configure => self.on_configure_click(top_left, event.screen, scale),
            Mode::Draw => self.on_draw_click(event.modifiers.finish_held(), top_left, event.screen, scale),
        }
    }

    /// A click while placing the calibration ruler.
    pub fn on_configure_click(&mut self, top_left: Point, screen: Point, scale: f64) -> Vec<Action> {
        let Some(world) = self.click_to_world(top_left, screen, scale) else {
            return Vec::new();
        };
        if let CalibrationStep::Completed { units_per_pixel } = self.calibration.record_click(world)
            && units_per_pixel <= 0.0
        {
            log::warn!("ruler endpoints coincide; distances stay unknown until recalibrated");
        }
        vec![Action::RenderNeeded]
    }

    /// A click while drawing the travel path. `finish` is the finish-path modifier.
    pub fn on_draw_click(&mut self, finish: bool, top_left: Point, screen: Point, scale: f64) -> Vec<Action> {
        let Some(world) = self.click_to_world(top_left, screen, scale) else {
            return Vec::new();
        };
        match (finish, self.path.is_finished()) {
            (true, true) => self.path.restart(world),
            (true, false) => self.path.finish_with(world),
            (false, false) => {
                self.path.append(world);
            }
            (false, true) => return Vec::new(),
        }
        vec![Action::RenderNeeded]
    }

    /// Drop every path point.
    pub fn clear_path(&mut self) -> Vec<Action> {
        self.path.clear();
        log::debug!("path cleared");
        vec![Action::RenderNeeded]
    }

    /// Ask for a frame without changing any model.
    pub fn request_redraw(&mut self) -> Vec<Action> {
        self.redraw_token = self.redraw_token.wrapping_add(1);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    #[must_use]
    pub fn path(&self) -> &PathModel {
        &self.path
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageFootprint> {
        self.image.as_ref()
    }

    /// Bumped by every [`Self::request_redraw`].
    #[must_use]
    pub fn redraw_token(&self) -> u64 {
        self.redraw_token
    }

    /// Real-world path length, or `None` until a usable ruler exists.
    #[must_use]
    pub fn path_distance(&self) -> Option<f64> {
        self.path.distance(self.calibration.units_per_pixel())
    }

    /// Everything a frame depends on, seen through `viewport`.
    #[must_use]
    pub fn scene<'a>(&'a self, viewport: &'a Viewport) -> Scene<'a> {
        Scene {
            viewport,
            image: self.image.as_ref(),
            calibration: &self.calibration,
            path: &self.path,
            config: &self.config,
        }
    }

    /// Build the frame for the engine's own viewport.
    #[must_use]
    pub fn frame(&self, measure: &impl TextMeasure) -> Frame {
        self.frame_for(&self.viewport, measure)
    }

    /// Build the frame for a host-supplied viewport, leaving the stored one alone.
    #[must_use]
    pub fn frame_for(&self, viewport: &Viewport, measure: &impl TextMeasure) -> Frame {
        render::build_frame(&self.scene(viewport), measure)
    }

    // --- Internals ---

    /// Adopt the host's top-left and scale, then map `screen` into world space.
    fn click_to_world(&mut self, top_left: Point, screen: Point, scale: f64) -> Option<Point> {
        if let Err(err) = self.sync_viewport(top_left, scale) {
            log::warn!("click ignored: {err}");
            return None;
        }
        let world = self.viewport.screen_to_world(screen, &self.config.screen_frame());
        if !world.is_finite() {
            log::warn!("click ignored: non-finite screen point ({}, {})", screen.x, screen.y);
            return None;
        }
        Some(world)
    }

    fn sync_viewport(&mut self, top_left: Point, scale: f64) -> Result<(), ViewportError> {
        let mut next = self.viewport;
        next.set_pan(top_left)?;
        next.set_scale(scale)?;
        self.viewport = next;
        Ok(())
    }

    fn pan_by(&mut self, delta: Point) -> bool {
        let pan = self.viewport.pan().offset(delta.x, delta.y);
        match self.viewport.set_pan(pan) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("pan rejected: {err}");
                false
            }
        }
    }

    fn zoom_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("zoom rejected: factor {factor}");
            return false;
        }
        let scale = (self.viewport.scale() * factor).clamp(self.config.min_zoom, self.config.max_zoom);
        match self.viewport.set_scale(scale) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("zoom rejected: {err}");
                false
            }
        }
    }
}

fn render_if(changed: bool) -> Vec<Action> {
    if changed { vec![Action::RenderNeeded] } else { Vec::new() }
}

/// The full map engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: MapConfig) -> Self {
        let mut core = EngineCore::new(config);
        core.resize(canvas.width(), canvas.height());
        Self { canvas, image: None, core }
    }

    /// Adopt a decoded background image.
    pub fn set_image(&mut self, image: HtmlImageElement) -> Vec<Action> {
        let actions = self.core.attach_image(image.natural_width(), image.natural_height());
        self.image = Some(image);
        actions
    }

    // --- Delegated inputs ---

    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.core.set_mode(mode)
    }

    /// Resize the canvas backing store and the viewport with it.
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32) -> Vec<Action> {
        self.canvas.set_width(canvas_width);
        self.canvas.set_height(canvas_height);
        self.core.resize(canvas_width, canvas_height)
    }

    pub fn handle_event(&mut self, event: &InteractionEvent) -> Vec<Action> {
        self.core.handle_event(event)
    }

    pub fn on_configure_click(&mut self, top_left: Point, screen: Point, scale: f64) -> Vec<Action> {
        self.core.on_configure_click(top_left, screen, scale)
    }

    pub fn on_draw_click(&mut self, finish: bool, top_left: Point, screen: Point, scale: f64) -> Vec<Action> {
        self.core.on_draw_click(finish, top_left, screen, scale)
    }

    pub fn clear_path(&mut self) -> Vec<Action> {
        self.core.clear_path()
    }

    pub fn request_redraw(&mut self) -> Vec<Action> {
        self.core.request_redraw()
    }

    // --- Rendering ---

    /// Paint the engine's current state onto its own canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the canvas has no 2D context or a draw call fails.
    pub fn render(&self) -> Result<(), RenderError> {
        let ctx = self.context()?;
        let frame = self.core.frame(&ctx);
        self.paint(&ctx, &frame)
    }

    /// Paint onto `ctx` using a host-supplied viewport. The stored viewport is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if `top_left`/`scale` are unusable or a draw call fails.
    pub fn render_into(
        &self,
        ctx: &CanvasRenderingContext2d,
        canvas_width: u32,
        canvas_height: u32,
        top_left: Point,
        scale: f64,
    ) -> Result<(), RenderError> {
        let viewport = Viewport::new(top_left, scale, canvas_width, canvas_height)?;
        let frame = self.core.frame_for(&viewport, ctx);
        self.paint(ctx, &frame)
    }

    fn paint(&self, ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), RenderError> {
        let started = js_sys::Date::now();
        canvas2d::paint(ctx, frame, self.image.as_ref())?;
        log::trace!(
            "frame painted: {} commands in {:.2}ms",
            frame.commands.len(),
            js_sys::Date::now() - started
        );
        Ok(())
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, RenderError> {
        self.canvas
            .get_context("2d")?
            .ok_or(RenderError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::MissingContext)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport()
    }

    #[must_use]
    pub fn path_distance(&self) -> Option<f64> {
        self.core.path_distance()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }
}
