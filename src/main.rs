#![allow(warnings)]
//! Study Desk Frontend Entry Point

mod app;
mod belongings;
mod checklist;
mod components;
mod config;
mod context;
mod cue;
mod models;
mod storage;
mod timer;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use leptos_reveal::{observe_reveal, DEFAULT_THRESHOLD, VISIBLE_CLASS};
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&BrowserStorage);
    if let Err(e) = rolling_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("starting, timer {}s/{}s", config.timer.work_secs, config.timer.break_secs);

    // Static markup from index.html (the page header)
    let watched = observe_reveal(".reveal", VISIBLE_CLASS, DEFAULT_THRESHOLD);
    log::debug!("watching {} static reveal elements", watched);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
