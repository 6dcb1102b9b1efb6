//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_network::config::DEFAULT_CANVAS_ID;
use particle_network::{NetworkCanvas, NetworkConfig, Particle, ParticleField, Renderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

fn pixel(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> Vec<u8> {
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().0
}

#[wasm_bindgen_test]
fn empty_frame_is_opaque_black() {
    let canvas = canvas(64, 48);
    let mut renderer = Renderer::new(&canvas).unwrap();
    let mut field = ParticleField::from_particles(NetworkConfig::default(), 64.0, 48.0, Vec::new());
    field.tick(&mut renderer).unwrap();
    assert_eq!(pixel(&renderer.context, 10.0, 10.0), vec![0, 0, 0, 255]);
    assert_eq!(renderer.context.global_alpha(), 1.0);
}

#[wasm_bindgen_test]
fn particle_glow_lights_its_center() {
    let canvas = canvas(100, 100);
    let mut renderer = Renderer::new(&canvas).unwrap();
    let mut field = ParticleField::from_particles(
        NetworkConfig::default(),
        100.0,
        100.0,
        vec![Particle::new([50.0, 50.0], [0.0, 0.0], 0.9)],
    );
    field.tick(&mut renderer).unwrap();
    let center = pixel(&renderer.context, 50.0, 50.0);
    assert!(center[0] > 0 && center[1] > 0 && center[2] > 0);
    assert_eq!(pixel(&renderer.context, 5.0, 5.0), vec![0, 0, 0, 255]);
}

#[wasm_bindgen_test]
fn linked_pair_draws_a_line_between_them() {
    let canvas = canvas(100, 100);
    let mut renderer = Renderer::new(&canvas).unwrap();
    let mut field = ParticleField::from_particles(
        NetworkConfig::default(),
        100.0,
        100.0,
        vec![
            Particle::new([10.0, 50.5], [0.0, 0.0], 0.0),
            Particle::new([90.0, 50.5], [0.0, 0.0], 0.0),
        ],
    );
    field.tick(&mut renderer).unwrap();
    let midpoint = pixel(&renderer.context, 50.0, 50.0);
    assert!(midpoint[0] > 0 || midpoint[1] > 0 || midpoint[2] > 0);
}

#[wasm_bindgen_test]
fn network_canvas_renders_through_a_context() {
    let canvas = canvas(320, 240);
    let ctx = Renderer::new(&canvas).unwrap().context;
    let mut network = NetworkCanvas::with_seed(320, 240, 7);
    for _ in 0..3 {
        network.render(&ctx).unwrap();
    }
    assert_eq!(network.particle_count(), NetworkConfig::NODE_COUNT);
}

#[wasm_bindgen_test]
fn start_rejects_missing_canvas() {
    assert!(particle_network::start("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn start_rejects_non_canvas_element() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();
    assert!(particle_network::start("not-a-canvas").is_err());
}

#[wasm_bindgen_test]
fn default_start_fills_window_and_follows_resize() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let canvas = canvas(1, 1);
    canvas.set_id(DEFAULT_CANVAS_ID);
    document.body().unwrap().append_child(&canvas).unwrap();

    particle_network::start_default().unwrap();
    let inner_width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let inner_height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!((canvas.width(), canvas.height()), (inner_width, inner_height));

    canvas.set_width(1);
    canvas.set_height(1);
    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();
    assert_eq!((canvas.width(), canvas.height()), (inner_width, inner_height));
}
