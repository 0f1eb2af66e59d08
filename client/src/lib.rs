//! # menu-ui
//!
//! Leptos + WASM frontend for the food menu. Lists dishes and lets the user
//! add, edit, delete and toggle availability through modal dialogs backed by
//! the `/foods` REST collection.
//!
//! State, reducers and form parsing come from the shared `menu` crate; this
//! crate holds the components, the page, and the `gloo-net` transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
