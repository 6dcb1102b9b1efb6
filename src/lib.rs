#[macro_use]
mod utils;
mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
mod gradient_helpers;
pub mod particle;
pub mod random;
pub mod renderer;
pub mod surface;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
#[cfg(feature = "frame_timing")]
use web_sys::console;

pub use animation::{start, start_default};
pub use config::NetworkConfig;
pub use error::NetworkError;
pub use field::ParticleField;
pub use particle::Particle;
pub use random::RandomSource;
pub use renderer::Renderer;
pub use surface::{CommandRecorder, DrawCommand, Surface};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

#[cfg(feature = "frame_timing")]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(feature = "frame_timing")]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(feature = "frame_timing")]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Particle network sized to a canvas, for pages that drive their own frame loop.
#[wasm_bindgen]
pub struct NetworkCanvas {
    field: ParticleField,
}

#[wasm_bindgen]
impl NetworkCanvas {
    pub fn new(width: u32, height: u32) -> NetworkCanvas {
        let mut rng = rand::thread_rng();
        NetworkCanvas::with_config(NetworkConfig::default(), width, height, &mut rng)
    }

    /// Same layout on every load for a given seed.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> NetworkCanvas {
        let mut rng = StdRng::seed_from_u64(seed);
        NetworkCanvas::with_config(NetworkConfig::default(), width, height, &mut rng)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.field.resize(width as f64, height as f64);
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn connection_count(&self) -> usize {
        self.field.connections().count()
    }

    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut renderer = Renderer::from_context(ctx.clone());
        self.draw(&mut renderer)
    }
}

impl NetworkCanvas {
    pub fn with_config<R: RandomSource>(
        config: NetworkConfig,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> NetworkCanvas {
        NetworkCanvas {
            field: ParticleField::new(config, width as f64, height as f64, rng),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn draw<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        #[cfg(feature = "frame_timing")]
        let _timer = Timer::new("NetworkCanvas::draw");
        self.field.tick(surface)
    }
}
