//! Browser client for the session-creation studio.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate renders the session-creation surface: the toolbar that picks a
//! session mode/model and the JSON inspector dialog for the pending request
//! payload. All durable state (auth, session config) is owned by the pages;
//! components derive visibility from it and forward events upward.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated loader after the SSR shell lands.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
