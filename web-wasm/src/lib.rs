//! Recipe Lens Web App (Leptos + WASM)

mod app;
pub mod api;
pub mod components;
pub mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        // ロガーが既に登録済み
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Recipe Lens starting...");
    leptos::mount::mount_to_body(app::App);
}
