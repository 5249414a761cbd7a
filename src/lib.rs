//! # authgate
//!
//! Leptos + WASM front end for an e-mail OTP login service: a signup page,
//! a two-step login page (password first, then a one-time code), and a
//! gated dashboard landing page.
//!
//! This crate is a pure browser client. Network and storage access is
//! gated behind the `csr` feature, so the session, flow, and protocol
//! logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point. Mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
