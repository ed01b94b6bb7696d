//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Shopper actions (pick a category, add to cart, place an order)
/// - Timer firings (transition phases, order signal expiry)
pub trait Intent: Send + 'static {}
