//! Sort Selector Component
//!
//! Select control for the display ordering of the packing list.

use leptos::prelude::*;

use crate::sort::{SortMode, SORT_MODES};

/// Display-order selector
#[component]
pub fn SortSelector(
    sort_mode: ReadSignal<SortMode>,
    set_sort_mode: WriteSignal<SortMode>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || sort_mode.get().as_str()
            on:change=move |ev| {
                set_sort_mode.set(SortMode::from_str(&event_target_value(&ev)));
            }
        >
            {SORT_MODES.iter().map(|&(mode, label)| view! {
                <option value=mode.as_str()>{label}</option>
            }).collect_view()}
        </select>
    }
}
