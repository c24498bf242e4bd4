//! Item Counter Component
//!
//! "Showing N of M" labels under the list.

use leptos::prelude::*;

use crate::context::BoardContext;
use crate::store::BoardStateStoreFields;

#[component]
pub fn ItemCounter() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;
    let selectors = ctx.selectors();

    view! {
        <span class="item-counter text-muted">
            "Showing "
            <span id=selectors.count_id>{move || store.displayed().get()}</span>
            " of "
            <span id=selectors.total_id>{move || store.total().get()}</span>
        </span>
    }
}
