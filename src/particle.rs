// Single node of the network. Depth is picked once at spawn and scales speed,
// size and opacity together, which fakes a depth-of-field effect.

use crate::color::{self, Color};
use crate::random::RandomSource;
use crate::surface::{ColorStop, RadialGlow};
use vecmath::{vec2_add, vec2_scale, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    depth: f64,
}

impl Particle {
    const MAX_RADIUS_GROWTH: f64 = 4.0;
    const MIN_RADIUS: f64 = 1.0;
    const HIGHLIGHT_RATIO: f64 = 0.2;
    const CORE_RATIO: f64 = 0.3;
    const CORE_ALPHA: f64 = 0.4;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, depth: f64) -> Particle {
        Particle { pos, vel, depth }
    }

    // Draws depth first, then the two velocity components in [-1, 1)
    pub fn spawn<R: RandomSource>(pos: Vector2<f64>, rng: &mut R) -> Particle {
        let depth = rng.next_unit();
        let vel_x = (rng.next_unit() - 0.5) * 2.0;
        let vel_y = (rng.next_unit() - 0.5) * 2.0;
        Particle::new(pos, [vel_x, vel_y], depth)
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Moves by `vel * depth`, then reverses each velocity component whose
    /// coordinate ended up outside `[0, extent]`.
    ///
    /// The position is never clamped, so a particle can sit just outside the
    /// viewport for a frame before the reversed velocity brings it back.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, vec2_scale(self.vel, self.depth));
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn radius(&self) -> f64 {
        Particle::MAX_RADIUS_GROWTH * self.depth + Particle::MIN_RADIUS
    }

    pub fn opacity(&self) -> f64 {
        self.depth
    }

    /// Glowing dot at the current position: a faint white core fading through
    /// the positional color to transparent at the particle's radius.
    pub fn glow(&self, width: f64, height: f64) -> RadialGlow {
        let radius = self.radius();
        let opacity = self.opacity();
        let tint = color::positional(self.pos, width, height);
        RadialGlow {
            center: self.pos,
            inner_radius: radius * Particle::HIGHLIGHT_RATIO * Particle::CORE_RATIO,
            radius,
            stops: [
                ColorStop {
                    offset: 0.0,
                    color: Color::WHITE.with_alpha(opacity * Particle::CORE_ALPHA),
                },
                ColorStop {
                    offset: 0.5,
                    color: tint.with_alpha(opacity),
                },
                ColorStop {
                    offset: 1.0,
                    color: tint.with_alpha(0.0),
                },
            ],
        }
    }
}
