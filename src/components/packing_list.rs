//! Packing List Component
//!
//! Displays the items in the selected display order, with the sort selector
//! and the clear-list action underneath.

use leptos::prelude::*;

use crate::components::{ItemRow, SortSelector};
use crate::models::Item;
use crate::sort::{sorted_items, SortMode};

/// The list view with its actions row
#[component]
pub fn PackingList(
    items: Memo<Vec<Item>>,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    // Transient view state; picks the display order, never touches the store
    let (sort_mode, set_sort_mode) = signal(SortMode::default());

    let display_items = move || sorted_items(&items.get(), sort_mode.get());

    view! {
        <div class="list">
            <ul>
                <For
                    each=display_items
                    key=|item| {
                        // Key on the mutable field too so toggles re-render the row
                        (item.id, item.packed)
                    }
                    children=move |item| view! {
                        <ItemRow item=item on_toggle=on_toggle on_delete=on_delete />
                    }
                />
            </ul>
            <div class="actions">
                <SortSelector sort_mode=sort_mode set_sort_mode=set_sort_mode />
                <button class="button" on:click=move |_| on_clear.run(())>
                    "Clear List"
                </button>
            </div>
        </div>
    }
}
