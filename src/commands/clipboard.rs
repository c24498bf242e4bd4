//! Clipboard Commands
//!
//! Async Clipboard API access. The API only exists in secure contexts, so
//! every step is looked up dynamically and reported as an error string.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard
pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let win = web_sys::window().ok_or("no window")?;
    let navigator = win.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| format!("Failed to read navigator.clipboard: {:?}", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("navigator.clipboard is unavailable (no SSL certificate?)".to_string());
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("Failed to read clipboard.writeText: {:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("clipboard.writeText threw: {:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write rejected: {:?}", e))
}
