//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity of the counts,
//! the trigger and the notices.

use leptos::prelude::*;
use list_loader::Trigger;
use reactive_stores::Store;

use crate::models::Notice;

/// What the widget renders around the server fragments
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Rendered items in the container
    pub displayed: u32,
    /// Items on the server
    pub total: u32,
    /// State of the "load more" control
    pub trigger: Trigger,
    /// Open notices, oldest first
    pub notices: Vec<Notice>,
    /// Id handed to the next notice
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_counts(store: &BoardStore, displayed: u32, total: u32) {
    store.displayed().set(displayed);
    store.total().set(total);
}

pub fn store_set_trigger(store: &BoardStore, trigger: Trigger) {
    store.trigger().set(trigger);
}

/// Open a notice and return its id
pub fn store_push_notice(store: &BoardStore, message: String) -> u32 {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id.wrapping_add(1));
    store.notices().write().push(Notice { id, message });
    id
}

/// Close a notice by id (no-op if already closed)
pub fn store_dismiss_notice(store: &BoardStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}
