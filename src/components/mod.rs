//! UI Components
//!
//! Leptos components for the packing-list view.

mod add_item_form;
mod item_row;
mod packing_list;
mod sort_selector;
mod stats_footer;

pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use packing_list::PackingList;
pub use sort_selector::SortSelector;
pub use stats_footer::StatsFooter;
