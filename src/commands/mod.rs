//! Board Server Requests
//!
//! `fetch` wrappers for the board's HTTP endpoints, organized by domain.

mod board;
mod clipboard;

use list_loader::{LoadError, LoadResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use board::*;
pub use clipboard::*;

// ========================
// Fetch Primitives
// ========================

/// Issue a request and return the response if its status is 2xx.
pub async fn send(method: &str, url: &str) -> LoadResult<Response> {
    let win = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    let req = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    // The server tells fragment requests apart by this header
    req.headers()
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(network_error)?;

    let resp_val = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_val
        .dyn_into()
        .map_err(|_| LoadError::MalformedResponse("fetch did not yield a Response".to_string()))?;

    if !resp.ok() {
        web_sys::console::warn_1(&format!("[HTTP] {} {} -> {}", method, url, resp.status()).into());
        return Err(LoadError::Server { status: resp.status() });
    }
    Ok(resp)
}

/// GET an HTML fragment.
pub async fn get_text(url: &str) -> LoadResult<String> {
    let resp = send("GET", url).await?;
    let body = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    body.as_string()
        .ok_or_else(|| LoadError::MalformedResponse("response body is not text".to_string()))
}

/// GET a JSON document.
pub async fn get_json(url: &str) -> LoadResult<serde_json::Value> {
    let resp = send("GET", url).await?;
    let promise = resp
        .json()
        .map_err(|e| LoadError::MalformedResponse(describe(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| LoadError::MalformedResponse(describe(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| LoadError::MalformedResponse(e.to_string()))
}

/// Browser timer used between retries.
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

fn network_error(err: JsValue) -> LoadError {
    LoadError::Network(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
