//! Food Menu Frontend Entry Point

mod actions;
mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod models;
mod session;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(LevelFilter::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    mount_to_body(App);
}
