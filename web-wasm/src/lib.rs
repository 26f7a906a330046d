//! Rubber Sheet Grading Web App (Leptos + WASM)

mod app;
mod components;
mod download;
mod pages;
mod timer;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("RubberSheetGrading web app starting");
    leptos::mount::mount_to_body(app::App);
}
