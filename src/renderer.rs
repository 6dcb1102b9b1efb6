// Renderer struct that owns the canvas 2d context and implements the drawing
// surface on top of it: plain rects for the background, gradient-filled arcs
// for particles, gradient-stroked paths for links.

use crate::color::Color;
use crate::error::NetworkError;
use crate::gradient_helpers;
use crate::surface::{GradientLine, RadialGlow, Surface};
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context from the canvas; failing here is fatal for the caller
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, NetworkError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(NetworkError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| NetworkError::ContextUnavailable)?;
        Ok(Renderer { context })
    }

    pub fn from_context(context: CanvasRenderingContext2d) -> Self {
        Renderer { context }
    }
}

impl Surface for Renderer {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(x, y, width, height);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(x, y, width, height);
        Ok(())
    }

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), JsValue> {
        let gradient = gradient_helpers::radial_gradient(&self.context, glow)?;
        self.context.begin_path();
        self.context
            .arc(glow.center[0], glow.center[1], glow.radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style_canvas_gradient(&gradient);
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, line: &GradientLine) -> Result<(), JsValue> {
        let gradient = gradient_helpers::linear_gradient(&self.context, line)?;
        self.context.begin_path();
        self.context.move_to(line.from[0], line.from[1]);
        self.context.line_to(line.to[0], line.to[1]);
        self.context.set_stroke_style_canvas_gradient(&gradient);
        self.context.stroke();
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }
}
