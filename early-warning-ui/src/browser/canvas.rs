//! Canvas rendering
//!
//! [`CanvasRenderer`] paints scene frames into a canvas it creates inside a
//! container element and removes again on dispose. The helpers below are
//! shared with the chart cards.

use std::f64::consts::TAU;

use leptos::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use early_warning::scene::{DrawCommand, Frame, Renderer};

/// 2D context of a canvas, if the browser provides one
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Size the backing store for the device pixel ratio and scale the context
/// so drawing code works in CSS pixels
pub fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    let ratio = leptos::window().device_pixel_ratio().max(1.0);
    canvas.set_width((width * ratio).round() as u32);
    canvas.set_height((height * ratio).round() as u32);

    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", width));
    let _ = style.set_property("height", &format!("{}px", height));

    if let Err(err) = ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
        tracing::warn!("Failed to scale canvas: {:?}", err);
    }
}

/// Renderer that owns a `<canvas>` appended to a container
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: f64,
}

impl CanvasRenderer {
    /// Create the canvas and append it to `container`
    ///
    /// Returns `None`, and logs, when the canvas or its context cannot be
    /// created.
    pub fn attach(container: &web_sys::Element) -> Option<Self> {
        let canvas = match document()
            .create_element("canvas")
            .map(|el| el.dyn_into::<HtmlCanvasElement>())
        {
            Ok(Ok(canvas)) => canvas,
            _ => {
                tracing::warn!("Could not create scene canvas");
                return None;
            }
        };
        let Some(ctx) = context_2d(&canvas) else {
            tracing::warn!("Canvas 2D context unavailable, scene disabled");
            return None;
        };
        if let Err(err) = container.append_child(&canvas) {
            tracing::warn!("Could not attach scene canvas: {:?}", err);
            return None;
        }

        Some(Self {
            canvas,
            ctx,
            size: 0.0,
        })
    }

    fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.size, self.size);

        for command in &frame.commands {
            match command {
                DrawCommand::Polygon { points, fill, .. } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    let color = JsValue::from_str(&fill.to_css());
                    ctx.begin_path();
                    ctx.move_to(first.x, first.y);
                    for p in rest {
                        ctx.line_to(p.x, p.y);
                    }
                    ctx.close_path();
                    ctx.set_fill_style(&color);
                    ctx.fill();
                    // Hairline in the fill color hides seams between faces
                    ctx.set_stroke_style(&color);
                    ctx.set_line_width(0.5);
                    ctx.stroke();
                }
                DrawCommand::Line {
                    from,
                    to,
                    stroke,
                    width,
                    ..
                } => {
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.set_stroke_style(&JsValue::from_str(&stroke.to_css()));
                    ctx.set_line_width(*width);
                    ctx.stroke();
                }
                DrawCommand::Dot {
                    center,
                    radius,
                    fill,
                    ..
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                    ctx.set_fill_style(&JsValue::from_str(&fill.to_css()));
                    ctx.fill();
                }
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn resize(&mut self, size: f64) {
        self.size = size;
        fit_canvas(&self.canvas, &self.ctx, size, size);
    }

    fn render(&mut self, frame: &Frame) {
        if let Err(err) = self.paint(frame) {
            tracing::warn!("Scene frame failed to paint: {:?}", err);
        }
    }

    fn dispose(&mut self) {
        self.canvas.remove();
        tracing::debug!("Scene canvas removed");
    }
}
