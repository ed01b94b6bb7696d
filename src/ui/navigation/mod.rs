//! Screen navigation feature module.
//!
//! Owns the current screen, the screen to return to from the cart or the
//! order history, and the fade-out → swap → fade-in transition flag.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screens and the navigation state machine
//! - `intent.rs` - Transition phases (Begin, Swap, Settle)
//! - `reducer.rs` - State transitions with generation checks

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavigationState, PendingTransition, ReturnScreen, Screen, Selection};
