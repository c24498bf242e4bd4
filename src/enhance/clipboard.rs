//! Copy To Clipboard
//!
//! Copies the value of an input (e.g. a share link) to the clipboard.
//! Templates call `window.copyToClipboard('<id>')` from inline handlers or
//! mark a button with `data-copy-target="<id>"`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::commands::write_clipboard_text;
use crate::dom::{bind_document_click, closest_from_event, document};

const COPY_ATTR: &str = "data-copy-target";
/// Global used by inline `onclick` handlers in server templates
pub const GLOBAL_NAME: &str = "copyToClipboard";

/// Select the input's text and copy its value.
pub fn copy_to_clipboard(element_id: &str) {
    let input = document()
        .and_then(|doc| doc.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let Some(input) = input else {
        web_sys::console::warn_1(&format!("[CLIPBOARD] No input #{}", element_id).into());
        return;
    };

    input.select();
    // For mobile devices
    let _ = input.set_selection_range(0, 99_999);

    let value = input.value();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = write_clipboard_text(&value).await {
            web_sys::console::log_1(&format!("[CLIPBOARD] {}", e).into());
        }
    });
}

/// Publish [`copy_to_clipboard`] on `window` for inline handlers.
pub fn expose_global() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let copy = Closure::<dyn Fn(String)>::new(|element_id: String| copy_to_clipboard(&element_id));
    if let Err(e) = js_sys::Reflect::set(&win, &JsValue::from_str(GLOBAL_NAME), copy.as_ref()) {
        web_sys::console::warn_1(&format!("[CLIPBOARD] Could not expose {}: {:?}", GLOBAL_NAME, e).into());
    }
    copy.forget();
}

pub fn bind_copy_buttons() {
    let selector = format!("[{}]", COPY_ATTR);
    bind_document_click(move |ev| {
        let target = closest_from_event(&ev, &selector).and_then(|el| el.get_attribute(COPY_ATTR));
        if let Some(element_id) = target {
            ev.prevent_default();
            copy_to_clipboard(&element_id);
        }
    });
}
