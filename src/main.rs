//! Todo Table Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod loader;
mod models;
mod store;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    _ = console_log::init_with_level(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
