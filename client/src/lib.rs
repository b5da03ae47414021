//! # client
//!
//! Leptos + WASM frontend for Cropix, the agricultural advisory site.
//!
//! One page per advisory form (crop yield, fertilizer, soil-based crop,
//! disease detection, weather, market prices) plus home and contact. Form
//! schemas, validation and response decoding come from the `forms` crate;
//! this crate renders them and owns the browser transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
