//! Source and View Seams
//!
//! The controller talks to the server through [`ListSource`] and to the
//! page through [`ListView`]. Both are single-threaded: futures are not
//! `Send` and views mutate through `&self`.

#![allow(async_fn_in_trait)]

use crate::error::LoadResult;
use crate::item_id::ItemId;
use crate::params::PaginationParams;
use crate::state::Trigger;

/// Where pages of rendered items come from
pub trait ListSource {
    async fn parameters(&self) -> LoadResult<PaginationParams>;

    /// Rendered items of `page` (1-based).
    async fn page(&self, page: u32) -> LoadResult<String>;

    /// The single item that moved into the tail of `page` after a removal.
    async fn refill(&self, page: u32) -> LoadResult<String>;

    async fn delete(&self, id: ItemId) -> LoadResult<()>;

    /// Toggle the like on `post_id`; returns the re-rendered like control.
    async fn toggle_like(&self, post_id: &str, page: u32) -> LoadResult<String>;
}

/// Where rendered items end up
pub trait ListView {
    /// Replace the whole list with `html`.
    fn replace_items(&self, html: &str);

    /// Append `html` after the existing items.
    fn append_items(&self, html: &str);

    /// Detach the rendered item; `false` if it was not on the page.
    fn remove_item(&self, id: ItemId) -> bool;

    /// Number of rendered items currently in the container.
    fn item_count(&self) -> u32;

    fn show_counts(&self, displayed: u32, total: u32);

    fn show_trigger(&self, trigger: Trigger);

    fn replace_like(&self, post_id: &str, html: &str);
}
