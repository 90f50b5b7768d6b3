//! Page script for a static portfolio site.
//!
//! Two independent components run once per page load:
//!
//! - a light/dark theme toggle persisted in `localStorage`
//!   ([`core::ThemeController`])
//! - GitHub star badges filled lazily from a `sessionStorage` cache and the
//!   GitHub API ([`core::StarsLoader`])
//!
//! Both take their storage, DOM and network collaborators as trait-typed
//! parameters; the browser implementations live in [`components`] and
//! [`utils`].

mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use wasm_bindgen::prelude::*;

/// Module entry point, called by the generated JS glue on load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::start();
}
