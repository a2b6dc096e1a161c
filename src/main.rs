//! Scrapbook Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod editor;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }

    let config = config::load_config();
    log::set_max_level(config.level_filter());
    log::info!("Starting scrapbook (storage key '{}')", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
