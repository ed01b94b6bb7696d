//! State for the order history and the new-order signal.

use crate::ui::cart::CartEntry;
use crate::ui::mvi::UiState;

/// An order placed during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub number: String,
    pub items: Vec<CartEntry>,
    /// Total price in whole rubles.
    pub total: u32,
}

impl OrderRecord {
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, entry| total.saturating_add(entry.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdersState {
    pub(super) history: Vec<OrderRecord>,
    /// Number of the order just placed, shown once on the orders screen.
    pub(super) new_order: Option<String>,
}

impl UiState for OrdersState {}

impl OrdersState {
    /// Orders placed this session, oldest first.
    pub fn history(&self) -> &[OrderRecord] {
        &self.history
    }

    pub fn new_order(&self) -> Option<&str> {
        self.new_order.as_deref()
    }

    pub fn is_new(&self, number: &str) -> bool {
        self.new_order.as_deref() == Some(number)
    }
}
