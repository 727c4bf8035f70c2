use wasm_bindgen::prelude::*;

mod app;
pub mod attrs;
pub mod classes;
pub mod components;
pub mod geometry;
pub mod render;

pub use attrs::PassthroughAttrs;
pub use components::progress_circle::{ProgressCircle, ProgressCircleProps};
pub use geometry::{ProgressSpec, RingGeometry, RingSize};

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
