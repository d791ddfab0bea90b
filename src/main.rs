//! Range Trainer Frontend Entry Point

mod config;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("RangeTrainer", config::LOG_CAPACITY) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    commands::announce_store();
    mount_to_body(App);
}
