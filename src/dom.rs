//! DOM Helpers

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Element the event was dispatched on, if it is an element.
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(ev: &Event, selector: &str) -> Option<Element> {
    event_element(ev).and_then(|el| el.closest(selector).ok().flatten())
}

/// Every element matching `selector` in the document.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    node_list_elements(&list)
}

/// Every element matching `selector` below `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Bind a click listener on the document for the lifetime of the page.
pub fn bind_document_click<F>(handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}
