//! Item List Component
//!
//! Container the server fragments are spliced into. Delete and like
//! buttons live inside those fragments, so their clicks are delegated
//! from here.

use leptos::html::Div;
use leptos::prelude::*;
use list_loader::ItemId;
use web_sys::MouseEvent;

use crate::context::BoardContext;
use crate::dom::closest_from_event;

#[component]
pub fn ItemList(
    /// Filled by the controller through the DOM view
    container: NodeRef<Div>,
) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let selectors = ctx.selectors();
    let container_id = selectors.container_id.clone();

    let on_click = move |ev: MouseEvent| {
        if ctx.can_delete() {
            if let Some(button) = closest_from_event(&ev, &selectors.delete_button) {
                ev.prevent_default();
                let id = button
                    .closest(&selectors.item)
                    .ok()
                    .flatten()
                    .and_then(|item| ItemId::from_element_id(&item.id(), &selectors.item_id_prefix));
                match id {
                    Some(id) => ctx.remove_item(id),
                    None => web_sys::console::warn_1(&"[ItemList] Delete button outside an item".into()),
                }
                return;
            }
        }

        if ctx.can_like() {
            if let Some(button) = closest_from_event(&ev, &selectors.like_button) {
                if let Some(post_id) = button.get_attribute(&selectors.like_attr) {
                    ev.prevent_default();
                    ctx.toggle_like(post_id);
                }
            }
        }
    };

    view! {
        <div id=container_id node_ref=container on:click=on_click></div>
    }
}
