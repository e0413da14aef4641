mod carousel;
mod components;
mod config;
mod content;
mod error;
mod particles;
mod state;
mod theme;
mod utils;
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Mounting landing page");
    yew::Renderer::<LandingPage>::new().render();
}
