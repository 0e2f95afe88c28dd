//! Display Ordering
//!
//! Pure derivation of the rendered order from the item sequence. Sorting
//! never reorders the underlying list; input order stays canonical.

use crate::models::Item;

/// Display-ordering selector for the packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Original insertion order
    #[default]
    Input,
    /// Ascending by description
    Description,
    /// Unpacked items first
    Packed,
}

/// Selector options as (mode, label) pairs
pub const SORT_MODES: &[(SortMode, &str)] = &[
    (SortMode::Input, "Sort by input order"),
    (SortMode::Description, "Sort by description"),
    (SortMode::Packed, "Sort by packed"),
];

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortMode::Description,
            "packed" => SortMode::Packed,
            _ => SortMode::Input,
        }
    }
}

/// Sort a snapshot of the items for display.
///
/// `Input` is the identity. The other modes use Rust's stable sort, so ties
/// keep their relative input order.
pub fn sorted_items(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            sorted.sort_by_key(|item| item.description.to_lowercase());
        }
        SortMode::Packed => {
            sorted.sort_by_key(|item| item.packed);
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, description: &str, packed: bool) -> Item {
        Item {
            id,
            description: description.to_string(),
            quantity: 1,
            packed,
        }
    }

    #[test]
    fn test_input_mode_is_identity() {
        let items = vec![
            make_item(1, "Socks", true),
            make_item(2, "Passport", false),
            make_item(3, "Charger", true),
        ];

        let sorted = sorted_items(&items, SortMode::Input);

        let ids: Vec<u32> = sorted.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_description_mode_is_case_folded() {
        let items = vec![
            make_item(1, "banana chips", false),
            make_item(2, "Apple cable", false),
            make_item(3, "charger", false),
        ];

        let sorted = sorted_items(&items, SortMode::Description);

        let ids: Vec<u32> = sorted.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_description_mode_keeps_ties_in_input_order() {
        let items = vec![
            make_item(1, "Socks", false),
            make_item(2, "socks", false),
            make_item(3, "Hat", false),
        ];

        let sorted = sorted_items(&items, SortMode::Description);

        let ids: Vec<u32> = sorted.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_packed_mode_puts_unpacked_first_stably() {
        let items = vec![
            make_item(1, "Socks", true),
            make_item(2, "Passport", false),
            make_item(3, "Charger", true),
            make_item(4, "Hat", false),
        ];

        let sorted = sorted_items(&items, SortMode::Packed);

        let ids: Vec<u32> = sorted.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_is_non_destructive() {
        let items = vec![
            make_item(1, "Socks", true),
            make_item(2, "Passport", false),
        ];
        let before = items.clone();

        let _ = sorted_items(&items, SortMode::Description);
        let _ = sorted_items(&items, SortMode::Packed);
        let sorted = sorted_items(&items, SortMode::Input);

        assert_eq!(items, before);
        assert_eq!(sorted, before);
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        for (mode, _) in SORT_MODES {
            assert_eq!(SortMode::from_str(mode.as_str()), *mode);
        }
        // Unknown values fall back to the default
        assert_eq!(SortMode::from_str("garbage"), SortMode::Input);
    }
}
