//! Atlantis Site Entry Point

mod context;
mod store;
mod data;
mod content;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = data::site_config();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] mounting {}", config.agency_name);
    mount_to_body(move || view! { <App config=config /> });
}
