//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The helpers
//! delegate the actual mutations to `list` so the logic stays testable
//! outside the reactive graph.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Item;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Packing-list items in insertion order
    pub items: Vec<Item>,
    /// Next id to hand out; strictly monotonic for the page session
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Append a new item from the submitted draft, allocating its id
pub fn store_add_item(store: &AppStore, description: String, quantity: u8) {
    let mut next_id = store.next_id().get();
    list::push_item(&mut store.items().write(), &mut next_id, description, quantity);
    store.next_id().set(next_id);
}

/// Flip the packed flag on an item by id
pub fn store_toggle_item(store: &AppStore, id: u32) {
    list::toggle_item(&mut store.items().write(), id);
}

/// Remove an item from the store by id
pub fn store_remove_item(store: &AppStore, id: u32) {
    list::remove_item(&mut store.items().write(), id);
}

/// Drop every item
pub fn store_clear_items(store: &AppStore) {
    list::clear_items(&mut store.items().write());
}
