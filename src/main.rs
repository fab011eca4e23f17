//! Task Link List Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod search;
mod selection;
mod store;
mod task_list;

use app::App;
use config::TodoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match TodoConfig::from_window() {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(e) => (TodoConfig::default(), Some(e)),
    };

    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[APP] logger setup failed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] {}, using defaults", e);
    }
    log::info!("[APP] mounting todo list");

    mount_to_body(move || view! { <App config=config /> });
}
