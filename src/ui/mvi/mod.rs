//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every stateful part of the storefront (navigation, cart, orders) is a
//! state value plus a reducer. Timers and host calls live outside.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / timer ───┘
//! ```
//!
//! - **State**: Immutable snapshot the render pass reads
//! - **Intent**: Key presses turned into actions, or timer firings
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
