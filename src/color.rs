// Simple color struct with byte channels and a fractional alpha, plus the
// positional color field that tints every particle and link by where it is on screen

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

// Channel endpoints of the color field. Red and blue follow x, green follows y.
pub const RED_RANGE: (f64, f64) = (172.0, 35.0);
pub const GREEN_RANGE: (f64, f64) = (30.0, 251.0);
pub const BLUE_RANGE: (f64, f64) = (255.0, 224.0);

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Color of the field at `pos` for a viewport of `width` x `height`.
///
/// The result depends only on the coordinate, so two particles at the same
/// point always share a color. Positions outside the viewport extrapolate and
/// then clamp to the byte range, the way a canvas clamps `rgb()` arguments.
pub fn positional(pos: Vector2<f64>, width: f64, height: f64) -> Color {
    let tx = ratio(pos[0], width);
    let ty = ratio(pos[1], height);
    Color {
        r: lerp_channel(RED_RANGE, tx),
        g: lerp_channel(GREEN_RANGE, ty),
        b: lerp_channel(BLUE_RANGE, tx),
        a: 1.0,
    }
}

fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        value / extent
    } else {
        0.0
    }
}

// Rounds half up, then clamps
fn lerp_channel((from, to): (f64, f64), t: f64) -> u8 {
    let value = (from + t * (to - from) + 0.5).floor();
    value.max(0.0).min(255.0) as u8
}
