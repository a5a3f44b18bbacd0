//! # newsdesk
//!
//! Leptos + WASM frontend for the curated news reader and its assistant side
//! panel.
//!
//! This crate contains the feed page, the assistant panel components, the
//! conversation/layout state machines, and the HTTP client for the article and
//! assistant backends. Browser-only code is gated behind the `hydrate` feature
//! so the state logic stays testable on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
