//! Notice List Component
//!
//! Dismissible alerts for failed requests. Each one also closes itself
//! after the configured timeout.

use leptos::prelude::*;

use crate::context::BoardContext;
use crate::store::BoardStateStoreFields;

const NOTICE_CLASS: &str = "alert alert-danger alert-dismissible fade show";

#[component]
pub fn NoticeList() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    view! {
        <div class="board-notices" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=NOTICE_CLASS role="alert">
                            {notice.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| ctx.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
