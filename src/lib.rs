//! # spendix-client
//!
//! Leptos + WASM authentication front end for the SpenDix expense tracker.
//!
//! This crate contains the login and signup pages, the submission flow that
//! validates forms and talks to the auth API, the session state shared with
//! the rest of the application, and the browser glue for token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own signals and delegate every branching decision to `flow`, which
//! only sees collaborators through the `AuthApi`, `TokenStore`, `UserSession`,
//! and `Navigator` traits. That keeps the flow testable natively while the
//! `hydrate` build plugs in `gloo-net` and `localStorage`.

pub mod app;
pub mod config;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
