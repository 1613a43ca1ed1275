//! Replays a [`Frame`] onto a browser 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It paints commands exactly as given and keeps no state between frames.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::render::{DrawCommand, Frame, TextMeasure};

impl TextMeasure for CanvasRenderingContext2d {
    fn text_width(&self, text: &str, font: &str) -> f64 {
        self.set_font(font);
        match self.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(err) => {
                log::warn!("measure_text failed: {err:?}");
                0.0
            }
        }
    }
}

/// Paint `frame` onto `ctx`. `image` is the decoded background image, if loaded.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame, image: Option<&HtmlImageElement>) -> Result<(), JsValue> {
    for command in &frame.commands {
        match command {
            DrawCommand::Clear => clear(ctx, frame)?,
            DrawCommand::FillRect { rect, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(rect.min.x, rect.min.y, rect.width(), rect.height());
            }
            DrawCommand::Image { footprint } => {
                if let Some(image) = image {
                    ctx.draw_image_with_html_image_element(image, footprint.origin.x, footprint.origin.y)?;
                }
            }
            DrawCommand::StrokePolygon { points, color, line_width } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
                ctx.close_path();
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.stroke();
            }
            DrawCommand::FillCircle { center, radius, color } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            DrawCommand::StrokeLine { from, to, color, line_width } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.stroke();
            }
            DrawCommand::FillText { text, at, font, color } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, at.x, at.y)?;
            }
        }
    }
    Ok(())
}

/// Wipe the backing store, then re-establish the world transform for the frame.
fn clear(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    let viewport = &frame.viewport;
    let scale = viewport.scale();
    let pan = viewport.pan();

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, f64::from(viewport.canvas_width), f64::from(viewport.canvas_height));
    ctx.set_transform(scale, 0.0, 0.0, scale, -pan.x * scale, -pan.y * scale)?;
    Ok(())
}
