#![allow(warnings)]
//! Message Board Frontend Entry Point
//!
//! Installs the page-wide enhancements, then mounts the board widget into
//! the element marked with `data-board`, if the page has one.

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dom;
mod enhance;
mod models;
mod store;
mod view;

use app::App;
use config::{BoardConfig, FOR_USER_ATTR, MOUNT_ATTR, OVERRIDES_ATTR};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    enhance::install();

    let Some(root) = dom::query_all(&format!("[{}]", MOUNT_ATTR)).into_iter().next() else {
        return;
    };

    let config = BoardConfig::from_attributes(
        &root.get_attribute(MOUNT_ATTR).unwrap_or_default(),
        root.get_attribute(FOR_USER_ATTR).as_deref(),
        root.get_attribute(OVERRIDES_ATTR).as_deref(),
    );
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[BOARD] {}", e).into());
            return;
        }
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    web_sys::console::log_1(&format!("[BOARD] Mounting {} board", config.endpoints.prefix).into());
    leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
}
