#![allow(warnings)]
//! Estate Profile Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod commands;
mod storage;
mod session;
mod context;
mod store;
mod profile;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);

    if let Err(e) = storage::init_storage(&config.firebase) {
        log::error!("avatar uploads unavailable: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
