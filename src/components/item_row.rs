//! Item Row Component
//!
//! Renders one entry with its packed checkbox and delete button.

use leptos::prelude::*;

use crate::models::Item;

/// One packing-list row
///
/// Emits `on_toggle` / `on_delete` with the item's id. Packed rows are
/// struck through; that is presentation only.
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let packed = item.packed;

    view! {
        <li>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| on_toggle.run(id)
            />
            <span style=if packed { "text-decoration: line-through" } else { "" }>
                {format!("{} {}", item.quantity, item.description)}
            </span>
            <button on:click=move |_| on_delete.run(id)>"❌"</button>
        </li>
    }
}
