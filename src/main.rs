//! Cookfarm Frontend Entry Point

mod alert;
mod api;
mod app;
mod calendar;
mod components;
mod config;
mod context;
mod error;
mod inventory;
mod models;
mod pages;
mod request;
mod storage;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] starting, API at {}", config::api_base());
    mount_to_body(App);
}
