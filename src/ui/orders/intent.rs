//! Intents for the order history.

use crate::ui::mvi::Intent;

use super::state::OrderRecord;

#[derive(Debug, Clone)]
pub enum OrdersIntent {
    /// Append a completed order to the session history.
    Record { record: OrderRecord },

    /// Announce a freshly placed order to the orders screen.
    Signal { number: String },

    /// The orders screen has shown the signal long enough.
    /// Only clears the signal if it still names `number`.
    Expire { number: String },
}

impl Intent for OrdersIntent {}
