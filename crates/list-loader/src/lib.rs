//! List Loader
//!
//! Incremental "load more" lists built from server-rendered HTML fragments.
//!
//! The server reports `{ <resource>_count, <resource>_per_page }`, hands
//! out one rendered page at a time, and can delete items. This crate keeps
//! the page cursor and the counts honest across those calls; the page
//! plugs in through [`ListSource`] (HTTP) and [`ListView`] (DOM).

mod controller;
mod endpoints;
mod error;
mod item_id;
mod params;
mod retry;
mod source;
mod state;

#[cfg(test)]
mod test_log;

pub use controller::ListController;
pub use endpoints::Endpoints;
pub use error::{LoadError, LoadResult};
pub use item_id::ItemId;
pub use params::{page_count, PaginationParams};
pub use retry::RetryPolicy;
pub use source::{ListSource, ListView};
pub use state::{LoaderState, Trigger};
