pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use shared::api::{ApiController, GlooTransport};
use shared::config::{default_config, load_config};
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default configuration: {}", e);
        default_config()
    });
    log::info!(
        "API base URL: {}, upload endpoint: {}",
        config.api.base_url,
        config.api.upload_endpoint
    );

    let api = ApiController::new(&config.api, Rc::new(GlooTransport));
    leptos::mount::mount_to_body(move || view! { <app::App config=config api=api /> });
}
