pub mod app;
pub mod domain;
pub mod shared;

use contracts::shared::config::{load_config, ScreenConfig};
use leptos::prelude::*;
use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = load_config();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| log::Level::from_str(&config.logging.level).ok())
        .unwrap_or(log::Level::Debug);

    // логирование через `log` в консоль браузера
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Falling back to default screen configuration: {:#}", err);
            ScreenConfig::default()
        }
    };

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
