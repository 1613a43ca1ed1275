//! Render pass: turns the current models into an ordered list of draw commands.
//!
//! [`build_frame`] is a pure function of the scene. It does not touch the
//! browser; [`crate::canvas2d`] replays the resulting [`Frame`] onto a 2D
//! context. Commands are in world coordinates and are painted in order, so
//! later commands occlude earlier ones:
//!
//! 1. clear
//! 2. origin reference square
//! 3. background image
//! 4. hex grid (when eligible)
//! 5. HUD panel and text
//! 6. calibration ruler
//! 7. travel path
//!
//! Sizes that should look constant on screen (HUD, path markers, hex strokes)
//! are converted through [`Viewport::screen_dist_to_world`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::calibration::Calibration;
use crate::camera::Viewport;
use crate::config::MapConfig;
use crate::consts::{
    HEX_LINE_WIDTH, HEX_STROKE_COLOR, HUD_BOTTOM_PADDING_PX, HUD_FILL_COLOR, HUD_FIRST_BASELINE_PX, HUD_FONT_PX,
    HUD_LINE_STEP_PX, HUD_PADDING_PX, HUD_TEXT_COLOR, MARKER_COLOR, MARKER_VISUAL_OFFSET, ORIGIN_MARKER_COLOR,
    ORIGIN_SQUARE_SIZE, PATH_LINE_WIDTH_PX, PATH_MARKER_RADIUS_PX, RULER_LINE_WIDTH, RULER_MARKER_RADIUS,
};
use crate::geometry::{ImageFootprint, Point, Rect};
use crate::hex;
use crate::path::PathModel;

/// Measures rendered text width for a CSS font string.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: &str) -> f64;
}

/// One drawing operation in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface.
    Clear,
    FillRect { rect: Rect, color: &'static str },
    /// Draw the background image over its footprint.
    Image { footprint: ImageFootprint },
    /// Closed, stroked (unfilled) polygon.
    StrokePolygon { points: Vec<Point>, color: &'static str, line_width: f64 },
    FillCircle { center: Point, radius: f64, color: &'static str },
    StrokeLine { from: Point, to: Point, color: &'static str, line_width: f64 },
    FillText { text: String, at: Point, font: String, color: &'static str },
}

/// A complete frame: the viewport it was built for and its commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

/// Read-only view of everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub viewport: &'a Viewport,
    pub image: Option<&'a ImageFootprint>,
    pub calibration: &'a Calibration,
    pub path: &'a PathModel,
    pub config: &'a MapConfig,
}

/// Build the full frame for `scene`.
#[must_use]
pub fn build_frame(scene: &Scene<'_>, measure: &impl TextMeasure) -> Frame {
    let mut commands = vec![DrawCommand::Clear];

    push_origin_marker(&mut commands, scene.viewport);

    if let Some(footprint) = scene.image {
        commands.push(DrawCommand::Image { footprint: *footprint });
    }

    let cells = hex::visible_cells(
        scene.image,
        scene.calibration.units_per_pixel(),
        scene.viewport,
        scene.config,
    );
    let hex_line_width = scene.viewport.screen_dist_to_world(HEX_LINE_WIDTH);
    commands.extend(cells.iter().map(|cell| DrawCommand::StrokePolygon {
        points: cell.vertices().to_vec(),
        color: HEX_STROKE_COLOR,
        line_width: hex_line_width,
    }));

    push_hud(&mut commands, scene, measure);
    push_ruler(&mut commands, scene.calibration, scene.viewport.scale());
    push_path(&mut commands, scene.path, scene.viewport);

    Frame { viewport: *scene.viewport, commands }
}

/// HUD text lines, top to bottom.
#[must_use]
pub fn hud_lines(scene: &Scene<'_>) -> Vec<String> {
    let config = scene.config;
    let viewport = scene.viewport;
    let unit = &config.unit_label;
    let ratio = scene.calibration.units_per_pixel();

    let distance = match scene.path.distance(ratio) {
        Some(d) => format!("Path distance: {d:.2} {unit} / {:.1} days", d / config.daily_travel_rate),
        None => "Path distance: unknown (set a ruler first)".to_owned(),
    };
    let pan = viewport.pan();

    vec![
        distance,
        format!("Zoom: {:.2}", viewport.scale()),
        format!("TopLeft: {:.0}, {:.0}", pan.x.floor(), pan.y.floor()),
        format!("Size: {}, {}", viewport.canvas_width, viewport.canvas_height),
        format!("Scale: {ratio:.3} pixels per {unit}"),
    ]
}

/// Where a marker for `point` is drawn so its pin tip lands on the point.
#[must_use]
pub fn pin_position(point: Point, scale: f64) -> Point {
    point.offset(MARKER_VISUAL_OFFSET.0 / scale, MARKER_VISUAL_OFFSET.1 / scale)
}

fn push_origin_marker(commands: &mut Vec<DrawCommand>, viewport: &Viewport) {
    let half = ORIGIN_SQUARE_SIZE * 0.5;
    let center = viewport.layout_center();
    commands.push(DrawCommand::FillRect {
        rect: Rect::new(center.offset(-half, -half), center.offset(half, half)),
        color: ORIGIN_MARKER_COLOR,
    });
}

#[allow(clippy::cast_precision_loss)]
fn push_hud(commands: &mut Vec<DrawCommand>, scene: &Scene<'_>, measure: &impl TextMeasure) {
    let viewport = scene.viewport;
    let top_left = viewport.pan();
    let lines = hud_lines(scene);
    let font = format!("{}px serif", viewport.screen_dist_to_world(HUD_FONT_PX));
    let padding = viewport.screen_dist_to_world(HUD_PADDING_PX);

    let text_width = lines
        .iter()
        .map(|line| measure.text_width(line, &font))
        .fold(0.0, f64::max);
    let last_baseline = HUD_FIRST_BASELINE_PX + HUD_LINE_STEP_PX * lines.len().saturating_sub(1) as f64;
    let panel_height = viewport.screen_dist_to_world(last_baseline + HUD_BOTTOM_PADDING_PX);

    commands.push(DrawCommand::FillRect {
        rect: Rect::new(top_left, top_left.offset(text_width + padding * 2.0, panel_height)),
        color: HUD_FILL_COLOR,
    });
    for (idx, line) in lines.into_iter().enumerate() {
        let baseline = viewport.screen_dist_to_world(HUD_FIRST_BASELINE_PX + HUD_LINE_STEP_PX * idx as f64);
        commands.push(DrawCommand::FillText {
            text: line,
            at: top_left.offset(padding, baseline),
            font: font.clone(),
            color: HUD_TEXT_COLOR,
        });
    }
}

fn push_ruler(commands: &mut Vec<DrawCommand>, calibration: &Calibration, scale: f64) {
    let Some(start) = calibration.start() else {
        return;
    };
    let start = pin_position(start, scale);
    commands.push(DrawCommand::FillCircle { center: start, radius: RULER_MARKER_RADIUS, color: MARKER_COLOR });

    let Some(end) = calibration.end() else {
        return;
    };
    let end = pin_position(end, scale);
    commands.push(DrawCommand::FillCircle { center: end, radius: RULER_MARKER_RADIUS, color: MARKER_COLOR });
    commands.push(DrawCommand::StrokeLine {
        from: start,
        to: end,
        color: MARKER_COLOR,
        line_width: RULER_LINE_WIDTH,
    });
}

fn push_path(commands: &mut Vec<DrawCommand>, path: &PathModel, viewport: &Viewport) {
    let scale = viewport.scale();
    let radius = viewport.screen_dist_to_world(PATH_MARKER_RADIUS_PX);
    let line_width = viewport.screen_dist_to_world(PATH_LINE_WIDTH_PX);
    let mut last: Option<Point> = None;

    for &point in path.points() {
        let pin = pin_position(point, scale);
        if let Some(prev) = last {
            commands.push(DrawCommand::StrokeLine { from: prev, to: pin, color: MARKER_COLOR, line_width });
        }
        commands.push(DrawCommand::FillCircle { center: pin, radius, color: MARKER_COLOR });
        last = Some(pin);
    }
}
