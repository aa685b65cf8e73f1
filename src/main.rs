#![allow(warnings)]
//! Todo Web Frontend Entry Point

mod models;
mod config;
mod api;
mod store;
mod controller;
mod context;
mod components;
mod app;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(config::APP_NAME, log::LevelFilter::Info, config::LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
