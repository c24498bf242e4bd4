//! Board Context
//!
//! The list controller and the store, shared with every component via the
//! Leptos Context API. User actions spawn onto the UI thread and report
//! failures as notices.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_loader::{ItemId, ListController, LoadError};

use crate::commands::HttpSource;
use crate::config::Selectors;
use crate::store::{store_dismiss_notice, store_push_notice, BoardStore};
use crate::view::DomView;

pub type BoardController = ListController<HttpSource, DomView>;

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Controller owning the pagination state (single-threaded)
    controller: StoredValue<Rc<BoardController>, LocalStorage>,
    /// Reactive mirror of the controller state plus notices
    pub store: BoardStore,
    selectors: StoredValue<Selectors>,
    notice_timeout_ms: u32,
}

impl BoardContext {
    pub fn new(
        controller: BoardController,
        store: BoardStore,
        selectors: Selectors,
        notice_timeout_ms: u32,
    ) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            store,
            selectors: StoredValue::new(selectors),
            notice_timeout_ms,
        }
    }

    pub fn selectors(&self) -> Selectors {
        self.selectors.get_value()
    }

    fn controller(&self) -> Rc<BoardController> {
        self.controller.get_value()
    }

    /// Whether the resource exposes an action endpoint
    pub fn can_delete(&self) -> bool {
        self.controller().source().endpoints().delete.is_some()
    }

    pub fn can_like(&self) -> bool {
        self.controller().source().endpoints().like.is_some()
    }

    // ========================
    // Actions
    // ========================

    /// Fetch parameters and the first page
    pub fn initialize(&self) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            web_sys::console::log_1(&"[BOARD] Loading first page".into());
            if let Err(err) = controller.initialize().await {
                ctx.report(&err);
            }
        });
    }

    /// Handle a click on the "load more" trigger
    pub fn load_more(&self) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.load_next().await {
                Ok(Some(page)) => {
                    web_sys::console::log_1(&format!("[BOARD] Loaded page {}", page).into());
                }
                Ok(None) => {}
                Err(err) => ctx.report(&err),
            }
        });
    }

    pub fn remove_item(&self, id: ItemId) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[BOARD] Deleting item {}", id).into());
            if let Err(err) = controller.remove_item(id).await {
                ctx.report(&err);
            }
        });
    }

    pub fn toggle_like(&self, post_id: String) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            if let Err(err) = controller.toggle_like(&post_id).await {
                ctx.report(&err);
            }
        });
    }

    // ========================
    // Notices
    // ========================

    /// Show a failure as a notice that closes itself after a while
    pub fn report(&self, err: &LoadError) {
        web_sys::console::error_1(&format!("[BOARD] {}", err).into());
        self.notify(err.user_message());
    }

    pub fn notify(&self, message: String) {
        let store = self.store;
        let id = store_push_notice(&store, message);
        let timeout = self.notice_timeout_ms;
        if timeout > 0 {
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(timeout).await;
                store_dismiss_notice(&store, id);
            });
        }
    }

    pub fn dismiss(&self, notice_id: u32) {
        store_dismiss_notice(&self.store, notice_id);
    }
}
