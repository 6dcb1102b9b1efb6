//! Drawing seam between the simulation and whatever rasterizes it.
//!
//! The field describes each frame as a handful of primitive commands. The
//! browser implementation lives in `renderer`; `CommandRecorder` keeps the
//! commands in memory so a frame can be stepped and inspected headlessly.

use crate::color::Color;
use std::convert::Infallible;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// A filled circle whose fill is a radial gradient between two concentric circles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: Vector2<f64>,
    pub inner_radius: f64,
    pub radius: f64,
    pub stops: [ColorStop; 3],
}

/// A stroked segment with a two-stop linear gradient running from `from` to `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientLine {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub from_color: Color,
    pub to_color: Color,
}

pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), Self::Error>;

    fn stroke_line(&mut self, line: &GradientLine) -> Result<(), Self::Error>;

    fn set_global_alpha(&mut self, alpha: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: Color },
    Glow(RadialGlow),
    Line(GradientLine),
    GlobalAlpha(f64),
}

/// Headless surface that records every command it is given.
#[derive(Default, Debug)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glows(&self) -> impl Iterator<Item = &RadialGlow> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Glow(glow) => Some(glow),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &GradientLine> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }
}

impl Surface for CommandRecorder {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Glow(*glow));
        Ok(())
    }

    fn stroke_line(&mut self, line: &GradientLine) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
}
