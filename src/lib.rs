//! # conscious-coin-client
//!
//! Leptos + WASM front end for "Grok & Ani: The Conscious Coin", a gamified
//! community app. This crate contains pages, components, application state,
//! and the REST helpers for the community API. The session holder in
//! `state::auth` / `util::auth` owns the client's view of the server-side
//! session; everything else renders from it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log sinks and hydrates the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
