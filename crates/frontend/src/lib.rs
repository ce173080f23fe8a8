pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        let config = match shared::config::load_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load configuration: {}", e);
                return;
            }
        };
        log::info!("Remote store: {}", config.remote.endpoint);
        leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
