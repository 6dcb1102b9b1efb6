// Helper functions for turning glow and link descriptions into canvas gradients

use crate::surface::{ColorStop, GradientLine, RadialGlow};
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

pub fn radial_gradient(
    context: &CanvasRenderingContext2d,
    glow: &RadialGlow,
) -> Result<CanvasGradient, JsValue> {
    let [x, y] = glow.center;
    let gradient = context.create_radial_gradient(x, y, glow.inner_radius, x, y, glow.radius)?;
    add_stops(&gradient, &glow.stops)?;
    Ok(gradient)
}

pub fn linear_gradient(
    context: &CanvasRenderingContext2d,
    line: &GradientLine,
) -> Result<CanvasGradient, JsValue> {
    let gradient = context.create_linear_gradient(line.from[0], line.from[1], line.to[0], line.to[1]);
    add_stops(
        &gradient,
        &[
            ColorStop {
                offset: 0.0,
                color: line.from_color,
            },
            ColorStop {
                offset: 1.0,
                color: line.to_color,
            },
        ],
    )?;
    Ok(gradient)
}

// Canvas rejects offsets outside [0, 1] and unparsable colors with a DOMException
fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset as f32, &stop.color.to_css())?;
    }
    Ok(())
}
