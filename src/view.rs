//! DOM List View
//!
//! [`ListView`] over the widget's container element and the board store.
//! Fragments are spliced in as-is; counts are read back from the DOM.

use leptos::html::Div;
use leptos::prelude::*;
use list_loader::{ItemId, ListView, Trigger};

use crate::config::Selectors;
use crate::store::{store_set_counts, store_set_trigger, BoardStore};

pub struct DomView {
    container: NodeRef<Div>,
    store: BoardStore,
    selectors: Selectors,
}

impl DomView {
    pub fn new(container: NodeRef<Div>, store: BoardStore, selectors: Selectors) -> Self {
        Self { container, store, selectors }
    }

    fn container(&self) -> Option<web_sys::HtmlDivElement> {
        let el = self.container.get_untracked();
        if el.is_none() {
            web_sys::console::warn_1(&"[VIEW] list container is not mounted".into());
        }
        el
    }
}

impl ListView for DomView {
    fn replace_items(&self, html: &str) {
        if let Some(el) = self.container() {
            el.set_inner_html(html);
        }
    }

    fn append_items(&self, html: &str) {
        if let Some(el) = self.container() {
            if let Err(e) = el.insert_adjacent_html("beforeend", html) {
                web_sys::console::error_1(&format!("[VIEW] append failed: {:?}", e).into());
            }
        }
    }

    fn remove_item(&self, id: ItemId) -> bool {
        let Some(el) = self.container() else {
            return false;
        };
        let selector = format!("#{}", id.element_id(&self.selectors.item_id_prefix));
        match el.query_selector(&selector) {
            Ok(Some(item)) => {
                item.remove();
                true
            }
            _ => false,
        }
    }

    fn item_count(&self) -> u32 {
        self.container().map_or(0, |el| el.child_element_count())
    }

    fn show_counts(&self, displayed: u32, total: u32) {
        store_set_counts(&self.store, displayed, total);
    }

    fn show_trigger(&self, trigger: Trigger) {
        store_set_trigger(&self.store, trigger);
    }

    fn replace_like(&self, post_id: &str, html: &str) {
        let target_id = format!("{}{}", self.selectors.like_target_prefix, post_id);
        match crate::dom::document().and_then(|doc| doc.get_element_by_id(&target_id)) {
            Some(target) => target.set_inner_html(html),
            None => web_sys::console::warn_1(&format!("[VIEW] no like control #{}", target_id).into()),
        }
    }
}
