//! # relay-client
//!
//! Leptos + WASM frontend for the Relay channel messaging application.
//! Replaces the React + MUI client with a Rust-native UI layer.
//!
//! This crate contains pages, components, the shared session state, network
//! types, and the REST helpers used to talk to the messaging backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
