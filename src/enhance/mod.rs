//! Page Enhancements
//!
//! Behaviour attached to server-rendered markup on every page, whether or
//! not a board widget is mounted.

mod alerts;
mod clipboard;
mod password;

pub fn install() {
    alerts::auto_close_alerts();
    password::bind_password_toggles();
    clipboard::expose_global();
    clipboard::bind_copy_buttons();
}
