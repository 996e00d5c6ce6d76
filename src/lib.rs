//! # portfolio
//!
//! Leptos + WASM client for a static portfolio site: theme toggle, responsive
//! navigation, a filterable/searchable project gallery loaded from a JSON
//! document, and a keyboard-navigable lightbox.
//!
//! Browser glue lives behind the `csr` feature; without it every module still
//! compiles and the state, filtering and formatting logic runs on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::PortfolioConfig::from_location();
    log::info!("portfolio starting, data path {}", config.data_path);
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
