//! State for the shopping cart.

use crate::ui::mvi::UiState;

/// One product line in the cart. `quantity` is always greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Cart contents in the order products were first added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub(super) items: Vec<CartEntry>,
}

impl UiState for CartState {}

impl CartState {
    pub fn items(&self) -> &[CartEntry] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all entries.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, entry| total.saturating_add(entry.quantity))
    }

    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|entry| entry.product_id == product_id)
            .map(|entry| entry.quantity)
    }
}
