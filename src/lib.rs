//! # activity-board
//!
//! Leptos + WASM frontend for the school activity sign-up page.
//! Loads the activity roster from the backend API, renders one card per
//! activity with its participant list, and lets a student sign up for or
//! withdraw from an activity. Every successful mutation is followed by a
//! full re-fetch of the roster; no incremental reconciliation is attempted.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
