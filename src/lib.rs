use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod constants;
pub mod theme;
pub mod validation;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
