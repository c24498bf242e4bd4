//! Alert Auto-Close
//!
//! Flash banners rendered by the server close themselves a few seconds
//! after the page loads.

use gloo_timers::future::TimeoutFuture;

use crate::dom::query_all;

pub const ALERT_SELECTOR: &str = "#alert";
pub const AUTO_CLOSE_MS: u32 = 3_000;
/// Length of Bootstrap's `.fade` transition
const FADE_MS: u32 = 150;

pub fn auto_close_alerts() {
    let alerts = query_all(ALERT_SELECTOR);
    if alerts.is_empty() {
        return;
    }
    web_sys::console::log_1(&format!("[ALERTS] Closing {} alert(s) in {}ms", alerts.len(), AUTO_CLOSE_MS).into());

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(AUTO_CLOSE_MS).await;
        for alert in &alerts {
            let _ = alert.class_list().remove_1("show");
        }
        TimeoutFuture::new(FADE_MS).await;
        for alert in alerts {
            alert.remove();
        }
    });
}
