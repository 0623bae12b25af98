//! Code-snippet pages with copy-to-clipboard buttons.
//!
//! With the `ssr` feature this crate renders pages (`generator`); compiled
//! to WASM with the `hydrate` feature it provides the click handling for the
//! copy buttons on those pages ([`clipboard`]).

pub mod clipboard;
pub mod components;
#[cfg(feature = "ssr")]
pub mod generator;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point, called by the page once the module has loaded.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::logging::error;

    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        error!("[clipboard] no window; copy buttons not bound");
        return;
    };
    let Some(document) = window.document() else {
        error!("[clipboard] no document; copy buttons not bound");
        return;
    };

    if let Err(e) = clipboard::bind_copy_buttons(&window, &document) {
        error!("[clipboard] failed to bind copy buttons: {:?}", e);
    }
}
