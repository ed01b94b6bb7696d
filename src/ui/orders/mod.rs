//! Order history feature module.
//!
//! Keeps the orders placed in this session and the one-shot signal that
//! tells the orders screen which order was just placed.

mod intent;
mod reducer;
mod state;

pub use intent::OrdersIntent;
pub use reducer::OrdersReducer;
pub use state::{OrderRecord, OrdersState};
