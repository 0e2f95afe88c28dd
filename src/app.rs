//! Packing List App
//!
//! Root component. Owns the list state for the page session and binds the
//! mutation intents raised by the child components to the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, PackingList, StatsFooter};
use crate::store::{self, AppState, AppStateStoreFields};

const CLEAR_PROMPT: &str = "Are you sure you want to clear the packing list?";

#[component]
pub fn App() -> impl IntoView {
    // Single store instance, alive for the whole page view
    let store = Store::new(AppState::new());

    let items = Memo::new(move |_| store.items().get());

    let on_add = Callback::new(move |(description, quantity): (String, u8)| {
        store::store_add_item(&store, description, quantity);
    });
    let on_toggle = Callback::new(move |id: u32| {
        store::store_toggle_item(&store, id);
    });
    let on_delete = Callback::new(move |id: u32| {
        store::store_remove_item(&store, id);
    });
    let on_clear = Callback::new(move |_: ()| {
        let confirmed = window().confirm_with_message(CLEAR_PROMPT).unwrap_or(false);
        web_sys::console::log_1(&format!("[APP] clear list, confirmed={}", confirmed).into());
        if confirmed {
            store::store_clear_items(&store);
        }
    });

    view! {
        <div class="app">
            <h1>"🗼 Tokyo Trip 💼"</h1>

            <AddItemForm on_add=on_add />

            <PackingList
                items=items
                on_toggle=on_toggle
                on_delete=on_delete
                on_clear=on_clear
            />

            <StatsFooter items=items />
        </div>
    }
}
