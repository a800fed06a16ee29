//! Pokédex Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod loader;
mod models;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Err means a logger is already installed; keep that one
    let _ = console_logger::init(config::LOG_LEVEL);
    mount_to_body(App);
}
