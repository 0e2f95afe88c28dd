//! Frontend Models
//!
//! Data structures for packing-list entries.

use serde::{Deserialize, Serialize};

/// One packing-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
    pub quantity: u8,
    pub packed: bool,
}

impl Item {
    /// A freshly added item is always unpacked
    pub fn new(id: u32, description: String, quantity: u8) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}
