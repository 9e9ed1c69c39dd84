#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    // Forwards `tracing` events to the browser console.
    let _ = dioxus::logger::init(Level::INFO);

    tracing::info!("Starting iPlantGuard page controller");

    dioxus::LaunchBuilder::web().launch(app::App);
}
