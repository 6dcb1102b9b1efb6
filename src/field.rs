//! The particle field: spawning, per-frame update and frame composition.

use crate::color::{self, Color};
use crate::config::NetworkConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::{GradientLine, Surface};
use vecmath::{vec2_len, vec2_sub};

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    config: NetworkConfig,
}

impl ParticleField {
    /// Spawns `config.group_count` clusters of `node_count / group_count`
    /// particles each.
    ///
    /// Every cluster anchors at a uniform point in the viewport and scatters
    /// its particles over a square of half-side `spawn_spread` around it.
    /// Particles are not clamped, so some may start off screen.
    pub fn new<R: RandomSource>(
        config: NetworkConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> ParticleField {
        let per_group = config.nodes_per_group();
        let spread = config.spawn_spread;
        let mut particles = Vec::with_capacity(per_group * config.group_count);
        for _ in 0..config.group_count {
            let anchor_x = rng.next_unit() * width;
            let anchor_y = rng.next_unit() * height;
            for _ in 0..per_group {
                let x = anchor_x + rng.next_unit() * spread * 2.0 - spread;
                let y = anchor_y + rng.next_unit() * spread * 2.0 - spread;
                particles.push(Particle::spawn([x, y], rng));
            }
        }
        ParticleField::from_particles(config, width, height, particles)
    }

    pub fn from_particles(
        config: NetworkConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            particles,
            width,
            height,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // Positions are left alone; the next reflection check uses the new bounds
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Index pairs `(i, j)` with `i < j` whose distance is strictly below
    /// `max_distance`. Full pairwise scan.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let count = self.particles.len();
        (0..count)
            .flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.within_reach(&self.particles[i], &self.particles[j]))
    }

    fn within_reach(&self, a: &Particle, b: &Particle) -> bool {
        vec2_len(vec2_sub(a.pos(), b.pos())) < self.config.max_distance
    }

    /// Renders one frame and advances the simulation by one step.
    ///
    /// Order matters for layering: clear, black background, links from the
    /// positions of the previous step, then each particle is moved and drawn
    /// on top.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let (width, height) = (self.width, self.height);
        surface.clear_rect(0.0, 0.0, width, height)?;
        surface.fill_rect(0.0, 0.0, width, height, Color::BLACK)?;
        self.draw_connections(surface)?;
        for particle in &mut self.particles {
            particle.advance(width, height);
            surface.fill_glow(&particle.glow(width, height))?;
        }
        Ok(())
    }

    fn draw_connections<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.set_global_alpha(self.config.link_alpha);
        for (i, j) in self.connections() {
            let from = self.particles[i].pos();
            let to = self.particles[j].pos();
            surface.stroke_line(&GradientLine {
                from,
                to,
                from_color: color::positional(from, self.width, self.height),
                to_color: color::positional(to, self.width, self.height),
            })?;
        }
        surface.set_global_alpha(1.0);
        Ok(())
    }
}
