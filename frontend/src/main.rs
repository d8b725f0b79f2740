//! Entry point for the WASM application

use leptos::*;
use lkb_frontend::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Legal Knowledge Base - Starting Leptos App");
    log::debug!("Backend endpoint: {}", lkb_frontend::upload_url());

    mount_to_body(|| view! { <App/> })
}
