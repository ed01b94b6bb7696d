//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects owned by `App`.
///
/// `Default` is the state at mount time; `App` swaps it out with
/// `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
