//! # client
//!
//! Leptos + WASM frontend for the weekly planner.
//!
//! This crate contains the planner form page, the results page the server
//! renders after a submission, and the thin browser helpers they need. The
//! form model itself lives in the `planner` crate so the server and CLI can
//! share the same field-naming contract.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered planner page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
