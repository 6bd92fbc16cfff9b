mod app;
mod components;
mod utils;

pub mod canvas_state;
pub mod error;
pub mod rectangle;
pub mod scene;
pub mod types;

pub use utils::viewport_size;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting canvas");
    yew::Renderer::<App>::new().render();
}
