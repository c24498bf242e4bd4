//! Load More Button Component
//!
//! The trigger that appends the next page. Primary while clickable,
//! secondary and disabled once every page is shown.

use leptos::prelude::*;
use list_loader::Trigger;

use crate::context::BoardContext;
use crate::store::BoardStateStoreFields;

pub fn trigger_class(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Ready => "btn btn-primary",
        Trigger::Busy => "btn btn-primary disabled",
        Trigger::Exhausted => "btn btn-secondary disabled",
    }
}

pub fn trigger_label(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Busy => "Loading...",
        Trigger::Ready | Trigger::Exhausted => "Load more",
    }
}

#[component]
pub fn LoadMoreButton() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;
    let trigger_id = ctx.selectors().trigger_id;

    view! {
        <button
            id=trigger_id
            type="button"
            class=move || trigger_class(store.trigger().get())
            disabled=move || store.trigger().get() != Trigger::Ready
            aria-busy=move || (store.trigger().get() == Trigger::Busy).to_string()
            on:click=move |_| ctx.load_more()
        >
            {move || trigger_label(store.trigger().get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_switches_to_secondary() {
        assert_eq!(trigger_class(Trigger::Ready), "btn btn-primary");
        assert!(trigger_class(Trigger::Exhausted).contains("btn-secondary"));
        assert!(trigger_class(Trigger::Exhausted).contains("disabled"));
        assert!(trigger_class(Trigger::Busy).contains("disabled"));
    }

    #[test]
    fn test_label_while_busy() {
        assert_eq!(trigger_label(Trigger::Busy), "Loading...");
        assert_eq!(trigger_label(Trigger::Ready), "Load more");
    }
}
