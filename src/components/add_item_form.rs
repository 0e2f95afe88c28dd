//! Add Item Form Component
//!
//! Form for adding new entries with a quantity selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Largest quantity reachable through the selector
const MAX_QUANTITY: u8 = 20;

/// Form for adding new packing-list entries
///
/// Raises `on_add` with the draft `(description, quantity)`; empty
/// descriptions are discarded without touching the draft.
#[component]
pub fn AddItemForm(#[prop(into)] on_add: Callback<(String, u8)>) -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u8);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = description.get();
        if text.is_empty() {
            return;
        }
        on_add.run((text, quantity.get()));
        set_description.set(String::new());
        set_quantity.set(1);
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for the trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    set_quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                }
            >
                {(1..=MAX_QUANTITY).map(|num| view! {
                    <option value=num.to_string()>{num.to_string()}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_description.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
