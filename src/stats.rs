//! Packing Statistics
//!
//! Aggregate figures derived from the full, unsorted item collection.

use crate::models::Item;

/// Derived packing progress for the stats footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingStats {
    pub total: usize,
    pub packed_count: usize,
    pub percentage: u32,
}

impl PackingStats {
    /// Compute stats over the collection. The percentage rounds halves up.
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed_count = items.iter().filter(|item| item.packed).count();
        let percentage = if total == 0 {
            0
        } else {
            ((packed_count * 100) as f64 / total as f64).round() as u32
        };
        Self {
            total,
            packed_count,
            percentage,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn all_packed(&self) -> bool {
        self.percentage == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(total: usize, packed: usize) -> Vec<Item> {
        (0..total)
            .map(|i| Item {
                id: i as u32 + 1,
                description: format!("Item {}", i + 1),
                quantity: 1,
                packed: i < packed,
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let stats = PackingStats::from_items(&[]);

        assert!(stats.is_empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.packed_count, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_half_packed() {
        let stats = PackingStats::from_items(&make_items(4, 2));

        assert!(!stats.is_empty());
        assert!(!stats.all_packed());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.packed_count, 2);
        assert_eq!(stats.percentage, 50);
    }

    #[test]
    fn test_fully_packed() {
        let stats = PackingStats::from_items(&make_items(3, 3));

        assert!(stats.all_packed());
        assert_eq!(stats.percentage, 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(PackingStats::from_items(&make_items(3, 1)).percentage, 33);
        assert_eq!(PackingStats::from_items(&make_items(3, 2)).percentage, 67);
        // 12.5 rounds up, not to even
        assert_eq!(PackingStats::from_items(&make_items(8, 1)).percentage, 13);
    }
}
