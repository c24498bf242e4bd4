//! Password Visibility Toggle
//!
//! `.toggle_hide_password` buttons flip the sibling password field between
//! hidden and plain text, swapping the eye icon with it.

use crate::dom::{bind_document_click, closest_from_event, query_all_in};

const TOGGLE_SELECTOR: &str = ".toggle_hide_password";
const GROUP_SELECTOR: &str = ".input-group";
const INPUT_SELECTOR: &str = "input.form-control";
const ICON_CLASSES: [&str; 2] = ["bi-eye-slash-fill", "bi-eye-fill"];

/// Input type after one toggle.
pub fn next_input_type(current: Option<&str>) -> &'static str {
    if current == Some("text") {
        "password"
    } else {
        "text"
    }
}

/// Input types after one toggle, for every field in a group.
pub fn next_input_types(current: &[Option<String>]) -> Vec<&'static str> {
    current.iter().map(|t| next_input_type(t.as_deref())).collect()
}

pub fn bind_password_toggles() {
    bind_document_click(|ev| {
        let Some(toggle) = closest_from_event(&ev, TOGGLE_SELECTOR) else {
            return;
        };
        ev.prevent_default();

        let Some(group) = toggle.closest(GROUP_SELECTOR).ok().flatten() else {
            return;
        };
        let inputs = query_all_in(&group, INPUT_SELECTOR);
        let current: Vec<_> = inputs.iter().map(|input| input.get_attribute("type")).collect();
        for (input, next) in inputs.iter().zip(next_input_types(&current)) {
            let _ = input.set_attribute("type", next);
        }
        for icon in query_all_in(&group, "i") {
            let classes = icon.class_list();
            for class in ICON_CLASSES {
                let _ = classes.toggle(class);
            }
        }
    });
}
