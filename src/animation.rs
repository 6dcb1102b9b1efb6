//! Self-driving entry point: sizes the canvas to the window, keeps it sized on
//! resize, and renders one frame per `requestAnimationFrame` forever.

use crate::config::DEFAULT_CANVAS_ID;
use crate::error::{NetworkError, Result};
use crate::renderer::Renderer;
use crate::NetworkCanvas;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, Window};

/// Starts the background animation on the canvas with id `canvas_id`.
///
/// Any missing page resource is returned as an error and nothing is scheduled.
/// Once running, the loop has no stop path besides page teardown.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> std::result::Result<(), JsValue> {
    crate::utils::set_panic_hook();

    let window = web_sys::window().ok_or(NetworkError::NoWindow)?;
    let canvas = find_canvas(&window, canvas_id)?;
    let (width, height) = window_size(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let renderer = Renderer::new(&canvas)?;
    let network = Rc::new(RefCell::new(NetworkCanvas::new(width, height)));
    log!(
        "particle network: {} particles on {}x{}",
        network.borrow().particle_count(),
        width,
        height
    );

    listen_for_resize(&window, canvas, network.clone())?;
    run_frame_loop(window, renderer, network)?;
    Ok(())
}

/// Starts the animation on the page's `network` canvas.
#[wasm_bindgen]
pub fn start_default() -> std::result::Result<(), JsValue> {
    start(DEFAULT_CANVAS_ID)
}

fn find_canvas(window: &Window, canvas_id: &str) -> Result<HtmlCanvasElement> {
    let document = window.document().ok_or(NetworkError::NoDocument)?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| NetworkError::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| NetworkError::NotACanvas(canvas_id.to_owned()))
}

fn window_size(window: &Window) -> Result<(u32, u32)> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or(NetworkError::InvalidViewport)?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or(NetworkError::InvalidViewport)?;
    Ok((width as u32, height as u32))
}

// Resizing the canvas also resets its pixels and context state; the next frame
// repaints everything anyway
fn listen_for_resize(
    window: &Window,
    canvas: HtmlCanvasElement,
    network: Rc<RefCell<NetworkCanvas>>,
) -> Result<()> {
    let target = window.clone();
    let on_resize = Closure::wrap(Box::new(move || match window_size(&target) {
        Ok((width, height)) => {
            canvas.set_width(width);
            canvas.set_height(height);
            network.borrow_mut().resize(width, height);
            log!("particle network: resized to {}x{}", width, height);
        }
        Err(err) => console::error_1(&err.into()),
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_resize.forget();
    Ok(())
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<()> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

fn run_frame_loop(
    window: Window,
    mut renderer: Renderer,
    network: Rc<RefCell<NetworkCanvas>>,
) -> Result<()> {
    // The closure holds a handle to itself so each frame can schedule the next
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let target = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = network.borrow_mut().draw(&mut renderer) {
            console::error_1(&err);
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&target, callback) {
                console::error_1(&err.into());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(&window, callback)?;
    }
    Ok(())
}
