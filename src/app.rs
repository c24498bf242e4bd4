//! Board Widget
//!
//! Notices, the item container, the counters and the "load more" trigger
//! for one paginated resource.

use leptos::html::Div;
use leptos::prelude::*;
use list_loader::ListController;
use reactive_stores::Store;

use crate::commands::HttpSource;
use crate::components::{ItemCounter, ItemList, LoadMoreButton, NoticeList};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::BoardState;
use crate::view::DomView;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let container = NodeRef::<Div>::new();

    let source = HttpSource::new(config.endpoints.clone(), config.retry);
    let view = DomView::new(container, store, config.selectors.clone());
    let ctx = BoardContext::new(
        ListController::new(source, view),
        store,
        config.selectors.clone(),
        config.notice_timeout_ms,
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the first page once the container is in the DOM
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if container.get().is_some() {
            ctx.initialize();
            return true;
        }
        false
    });

    view! {
        <div class="board">
            <NoticeList />
            <ItemList container=container />
            <div class="board-footer d-flex justify-content-between align-items-center mt-3">
                <ItemCounter />
                <LoadMoreButton />
            </div>
        </div>
    }
}
