//! Studio landing page
//!
//! A single-page marketing site for a small web studio with a contact form
//! that delivers enquiries to a spreadsheet-backed web endpoint, built with
//! Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::ui::site_config::{provide_site_config, site_config_from_document};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = site_config_from_document();
    leptos::mount::hydrate_body(move || {
        provide_site_config(config);
        view! { <App/> }
    });
}
