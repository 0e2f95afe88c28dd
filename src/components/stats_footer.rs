//! Stats Footer Component
//!
//! Aggregate packing progress derived from the full item collection.

use leptos::prelude::*;

use crate::models::Item;
use crate::stats::PackingStats;

/// Footer line with the packing progress, or a prompt while the list is empty
#[component]
pub fn StatsFooter(items: Memo<Vec<Item>>) -> impl IntoView {
    let stats = move || PackingStats::from_items(&items.get());

    view! {
        {move || {
            let stats = stats();
            if stats.is_empty() {
                view! {
                    <p class="stats">
                        <em>"Start adding some items to the packing list 😍"</em>
                    </p>
                }.into_any()
            } else {
                let line = if stats.all_packed() {
                    "Everything packed! Ready to go 🛫".to_string()
                } else {
                    format!(
                        "💼 You have {} items on your list, and you already packed {} ({}%).",
                        stats.total, stats.packed_count, stats.percentage,
                    )
                };
                view! {
                    <footer class="stats">
                        <em>{line}</em>
                    </footer>
                }.into_any()
            }
        }}
    }
}
