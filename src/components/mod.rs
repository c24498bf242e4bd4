//! UI Components
//!
//! Leptos components of the board widget.

mod item_counter;
mod item_list;
mod load_more_button;
mod notice_list;

pub use item_counter::ItemCounter;
pub use item_list::ItemList;
pub use load_more_button::LoadMoreButton;
pub use notice_list::NoticeList;
