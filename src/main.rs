#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use context::AppContext;
use stores::{app_config::AppConfig, session};

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Cityscope client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restore the stored session before the router runs its guard
    use_hook(session::init_session);

    use_context_provider(|| {
        let config = AppConfig::load();
        log::info!("API base URL: {}", config.api_base_url);
        AppContext::new(config, services::api::default_transport())
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
