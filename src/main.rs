#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod relay;
mod theme;

fn main() {
    // Fails only if a subscriber is already installed
    if dioxus::logger::init(tracing::Level::INFO).is_err() {
        tracing::warn!("Logger already initialised");
    }

    tracing::info!("Starting SPACE website");
    dioxus::launch(app::App);
}
